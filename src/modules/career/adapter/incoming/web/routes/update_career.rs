use crate::api::schemas::{UpdateCareerBody, ValidationErrorResponse};
use crate::career::adapter::incoming::web::requests::{parse_career_id, UpdateCareerRequest};
use crate::career::adapter::incoming::web::responses::{
    UpdateCareerResponse, UpdatedCareer, CAREER_NOT_FOUND,
};
use crate::career::application::results::CareerResult;
use crate::shared::api::{ApiDetail, ApiError, ApiResponse, RequestData};
use crate::AppState;
use actix_web::{patch, web, HttpResponse};
use tracing::{error, info, warn};

#[utoipa::path(
    patch,
    path = "/careers/{id}/",
    tag = "careers",
    params(("id" = i32, Path, description = "Career id")),
    request_body(
        content(
            (UpdateCareerBody = "application/json"),
            (UpdateCareerBody = "application/x-www-form-urlencoded")
        )
    ),
    responses(
        (status = 200, description = "Career updated", body = UpdatedCareer),
        (status = 400, description = "Field validation failed", body = ValidationErrorResponse),
        (status = 415, description = "Body is neither JSON nor a form", body = ApiDetail),
        (
            status = 404,
            description = "No career with this id",
            body = ApiError,
            example = json!({ "error_message": "Career not found" })
        ),
        (status = 500, description = "Storage unavailable", body = ApiError)
    )
)]
#[patch("/careers/{id}/")]
pub async fn update_career_handler(
    path: web::Path<String>,
    payload: RequestData,
    data: web::Data<AppState>,
) -> HttpResponse {
    let raw_id = path.into_inner();

    let update = match UpdateCareerRequest::validate(&payload.0) {
        Ok(update) => update,
        Err(errors) => {
            warn!(
                career_id = %raw_id,
                fields = ?errors.fields().collect::<Vec<_>>(),
                "Invalid update career request"
            );
            return ApiResponse::bad_request(errors);
        }
    };

    let Some(career_id) = parse_career_id(&raw_id) else {
        warn!(career_id = %raw_id, "Update requested for malformed career id");
        return ApiResponse::not_found(CAREER_NOT_FOUND);
    };

    let result = data
        .update_career_use_case
        .execute(update.for_career(career_id))
        .await;

    match &result {
        CareerResult::Success(_) => info!(career_id, "Career updated"),
        CareerResult::NotFound => warn!(career_id, "Career to update not found"),
        CareerResult::Error(reason) => {
            error!(
                career_id,
                result = result.name(),
                error = %reason,
                "Failed to update career"
            )
        }
    }

    UpdateCareerResponse::new(result).into_http_response()
}
