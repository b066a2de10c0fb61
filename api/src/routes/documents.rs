use actix_web::{web, HttpResponse};
use validator::Validate;

use mp_core::repositories::{AccessLogRepository, PatientDirectory, RecordStore};
use mp_core::services::DocumentCategorizer;
use mp_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::CategorizeDocumentRequest;
use crate::handlers::ApiError;

/// Handler for POST /api/v1/documents/categorize
///
/// Extraction is best effort: fields that cannot be found are `null`.
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "data": {
///         "category": "Lab Report",
///         "issuing_doctor": "Dr. Anya Sharma",
///         "issue_date": "2024-05-15",
///         "facility_name": "City General Hospital"
///     },
///     "timestamp": "2024-05-15T10:00:00Z"
/// }
/// ```
pub async fn categorize<P, S, L, C>(
    state: web::Data<AppState<P, S, L, C>>,
    request: web::Json<CategorizeDocumentRequest>,
) -> Result<HttpResponse, ApiError>
where
    P: PatientDirectory + 'static,
    S: RecordStore + 'static,
    L: AccessLogRepository + 'static,
    C: DocumentCategorizer + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let categorization = state.categorizer.categorize(&request.document_text).await;
    tracing::debug!(
        event = "document_categorized",
        category = ?categorization.category,
        unknown = categorization.is_unknown(),
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(categorization)))
}
