//! Mapping of domain and request errors onto HTTP responses.
//!
//! | Error | Status |
//! |---|---|
//! | request validation, `DomainError::Validation*` | 400 |
//! | `DomainError::NotFound` | 404 |
//! | `AccessError::InvalidOrExpiredCode` | 401 |
//! | `DomainError::Internal` | 500 |

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use mp_core::errors::{AccessError, DomainError};
use mp_shared::{error_codes, ErrorResponse};
use std::collections::HashMap;
use std::fmt;
use validator::ValidationErrors;

/// Error returned by route handlers
#[derive(Debug)]
pub enum ApiError {
    /// Error raised by a domain service
    Domain(DomainError),
    /// Request body or query failed validation
    Validation(ValidationErrors),
    /// Request could not be parsed
    BadRequest(String),
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError::Domain(error)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Domain(e) => write!(f, "{}", e),
            ApiError::Validation(e) => write!(f, "Validation failed: {}", e),
            ApiError::BadRequest(message) => f.write_str(message),
        }
    }
}

impl ApiError {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            ApiError::Domain(DomainError::Validation { message }) => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone())
            }
            ApiError::Domain(DomainError::ValidationErr(e)) => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, e.to_string())
            }
            ApiError::Domain(DomainError::NotFound { resource }) => {
                let message = format!("Resource not found: {}", resource);
                ErrorResponse::new(error_codes::NOT_FOUND, message)
            }
            ApiError::Domain(DomainError::Access(e @ AccessError::InvalidOrExpiredCode)) => {
                ErrorResponse::new(error_codes::ACCESS_CODE_INVALID, e.to_string())
            }
            ApiError::Domain(DomainError::Internal { .. }) => {
                ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred")
            }
            ApiError::Validation(errors) => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
                    .add_detail("fields", field_messages(errors))
            }
            ApiError::BadRequest(message) => {
                ErrorResponse::new(error_codes::BAD_REQUEST, message.clone())
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(DomainError::Validation { .. })
            | ApiError::Domain(DomainError::ValidationErr(_))
            | ApiError::Validation(_)
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Domain(DomainError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Domain(DomainError::Access(_)) => StatusCode::UNAUTHORIZED,
            ApiError::Domain(DomainError::Internal { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }
        HttpResponse::build(status).json(self.to_error_response())
    }
}

/// Field name to validation messages (or codes when no message is set)
fn field_messages(errors: &ValidationErrors) -> HashMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mp_core::errors::ValidationError;

    #[test]
    fn test_status_mapping() {
        let cases = vec![
            (
                ApiError::from(DomainError::NotFound {
                    resource: "patient 'x'".to_string(),
                }),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(DomainError::from(AccessError::InvalidOrExpiredCode)),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::from(DomainError::from(ValidationError::RequiredField {
                    field: "doctor_name".to_string(),
                })),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(DomainError::Internal {
                    message: "boom".to_string(),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (ApiError::BadRequest("bad json".to_string()), StatusCode::BAD_REQUEST),
        ];

        for (error, status) in cases {
            assert_eq!(error.status_code(), status);
        }
    }

    #[test]
    fn test_access_error_message_is_uniform() {
        let error = ApiError::from(DomainError::from(AccessError::InvalidOrExpiredCode));
        let body = error.to_error_response();
        assert_eq!(body.error, error_codes::ACCESS_CODE_INVALID);
        assert_eq!(body.message, "Invalid or expired code");
    }

    #[test]
    fn test_internal_error_hides_details() {
        let error = ApiError::from(DomainError::Internal {
            message: "connection refused".to_string(),
        });
        assert_eq!(error.to_error_response().message, "An internal error occurred");
    }
}
