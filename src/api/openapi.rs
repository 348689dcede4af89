use crate::api::schemas::{CreateCareerBody, UpdateCareerBody, ValidationErrorResponse};
use crate::career::adapter::incoming::web::responses::{
    CareerListItem, CreatedCareer, UpdatedCareer,
};
use crate::shared::api::{ApiDetail, ApiError};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Careers API",
        version = "1.0.0",
        description = "CRUD endpoints for career entries"
    ),
    paths(
        crate::career::adapter::incoming::web::routes::list_careers_handler,
        crate::career::adapter::incoming::web::routes::create_career_handler,
        crate::career::adapter::incoming::web::routes::update_career_handler,
        crate::career::adapter::incoming::web::routes::delete_career_handler,
    ),
    components(
        schemas(
            // Request bodies
            CreateCareerBody,
            UpdateCareerBody,

            // Responses
            CareerListItem,
            CreatedCareer,
            UpdatedCareer,
            ValidationErrorResponse,
            ApiError,
            ApiDetail
        )
    ),
    tags(
        (name = "careers", description = "Career management endpoints"),
    )
)]
pub struct ApiDoc;
