use crate::api::schemas::{CreateCareerBody, ValidationErrorResponse};
use crate::career::adapter::incoming::web::requests::CreateCareerRequest;
use crate::career::adapter::incoming::web::responses::{CreateCareerResponse, CreatedCareer};
use crate::career::application::results::CareerResult;
use crate::shared::api::{ApiDetail, ApiError, ApiResponse, RequestData};
use crate::AppState;
use actix_web::{post, web, HttpResponse};
use tracing::{error, info, warn};

#[utoipa::path(
    post,
    path = "/careers/",
    tag = "careers",
    request_body(
        content(
            (CreateCareerBody = "application/json"),
            (CreateCareerBody = "application/x-www-form-urlencoded")
        )
    ),
    responses(
        (
            status = 201,
            description = "Career created",
            body = CreatedCareer,
            example = json!({
                "username": "jdoe",
                "title": "Backend engineer",
                "content": "Five years building HTTP services."
            })
        ),
        (
            status = 400,
            description = "Field validation failed or body is malformed",
            body = ValidationErrorResponse,
            example = json!({ "username": ["This field is required."] })
        ),
        (status = 415, description = "Body is neither JSON nor a form", body = ApiDetail),
        (status = 500, description = "Storage unavailable", body = ApiError)
    )
)]
#[post("/careers/")]
pub async fn create_career_handler(
    payload: RequestData,
    data: web::Data<AppState>,
) -> HttpResponse {
    let new_career = match CreateCareerRequest::validate(&payload.0) {
        Ok(new_career) => new_career,
        Err(errors) => {
            warn!(
                fields = ?errors.fields().collect::<Vec<_>>(),
                "Invalid create career request"
            );
            return ApiResponse::bad_request(errors);
        }
    };

    let username = new_career.username.clone();
    let result = data.create_career_use_case.execute(new_career).await;

    match &result {
        CareerResult::Success(career) => {
            info!(career_id = career.id, username = %username, "Career created")
        }
        CareerResult::Error(reason) => {
            error!(
                username = %username,
                result = result.name(),
                error = %reason,
                "Failed to create career"
            )
        }
        CareerResult::NotFound => error!(username = %username, "Create career returned not found"),
    }

    CreateCareerResponse::new(result).into_http_response()
}
