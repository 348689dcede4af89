use crate::career::adapter::incoming::web::responses::{CareerListItem, ListCareersResponse};
use crate::career::application::results::CareerResult;
use crate::shared::api::ApiError;
use crate::AppState;
use actix_web::{get, web, HttpResponse};
use tracing::{error, info};

#[utoipa::path(
    get,
    path = "/careers/",
    tag = "careers",
    responses(
        (status = 200, description = "Every career, ordered by id", body = [CareerListItem]),
        (
            status = 500,
            description = "Storage unavailable",
            body = ApiError,
            example = json!({ "error_message": "Please, contact the server maintainers." })
        )
    )
)]
#[get("/careers/")]
pub async fn list_careers_handler(data: web::Data<AppState>) -> HttpResponse {
    let result = data.list_careers_use_case.execute().await;

    match &result {
        CareerResult::Success(careers) => info!(count = careers.len(), "Listed careers"),
        CareerResult::Error(reason) => {
            error!(result = result.name(), error = %reason, "Failed to list careers")
        }
        CareerResult::NotFound => error!("List careers returned not found"),
    }

    ListCareersResponse::new(result).into_http_response()
}
