use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ShareAccessRequest {
    /// Username of the patient sharing access
    #[validate(length(min = 1, max = 64))]
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyAccessRequest {
    /// Username of the patient whose records are requested
    #[validate(length(min = 1, max = 64))]
    pub username: String,

    /// 6-digit code shown to the patient
    #[validate(length(equal = 6))]
    pub code: String,

    /// Staff member redeeming the code, recorded in the access log
    #[validate(length(min = 1, max = 128))]
    pub accessor_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RevokeAccessRequest {
    #[validate(length(min = 1, max = 64))]
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevokeAccessResponse {
    pub revoked: bool,
}
