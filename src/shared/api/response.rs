// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

pub const INTERNAL_ERROR_MESSAGE: &str = "Please, contact the server maintainers.";

/// Body used for every not-found and internal error.
#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct ApiError {
    #[schema(example = "Career not found")]
    pub error_message: String,
}

/// Body produced by the JSON extractor when the request itself is unreadable.
#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct ApiDetail {
    #[schema(example = "Unsupported media type in request.")]
    pub detail: String,
}

pub struct ApiResponse;

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Created().json(data)
    }

    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiError {
            error_message: message.to_string(),
        })
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }

    /// 400 carrying field-level validation messages.
    pub fn bad_request<T: Serialize>(errors: T) -> HttpResponse {
        HttpResponse::BadRequest().json(errors)
    }

    pub fn detail(status: StatusCode, detail: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiDetail {
            detail: detail.to_string(),
        })
    }
}
