use actix_web::HttpResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    career::{
        application::results::CareerResult,
        domain::entities::{Career, CareerId},
    },
    shared::api::ApiResponse,
};

pub const CAREER_NOT_FOUND: &str = "Career not found";

//
// ──────────────────────────────────────────────────────────
// Response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CareerListItem {
    #[schema(example = 1)]
    pub id: CareerId,
    #[schema(example = "jdoe")]
    pub username: String,
    pub created_datetime: DateTime<Utc>,
    #[schema(example = "Backend engineer")]
    pub title: String,
    pub content: String,
}

impl From<Career> for CareerListItem {
    fn from(career: Career) -> Self {
        Self {
            id: career.id,
            username: career.username,
            created_datetime: career.created_datetime,
            title: career.title,
            content: career.content,
        }
    }
}

/// Body of a successful create: the submitted fields only.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreatedCareer {
    pub username: String,
    pub title: String,
    pub content: String,
}

impl From<Career> for CreatedCareer {
    fn from(career: Career) -> Self {
        Self {
            username: career.username,
            title: career.title,
            content: career.content,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UpdatedCareer {
    pub title: String,
    pub content: String,
}

impl From<Career> for UpdatedCareer {
    fn from(career: Career) -> Self {
        Self {
            title: career.title,
            content: career.content,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Result → HTTP mapping
// ──────────────────────────────────────────────────────────
//

pub struct ListCareersResponse {
    result: CareerResult<Vec<Career>>,
}

impl ListCareersResponse {
    pub fn new(result: CareerResult<Vec<Career>>) -> Self {
        Self { result }
    }

    pub fn into_http_response(self) -> HttpResponse {
        match self.result {
            CareerResult::Success(careers) => ApiResponse::success(
                careers
                    .into_iter()
                    .map(CareerListItem::from)
                    .collect::<Vec<_>>(),
            ),
            _ => ApiResponse::internal_error(),
        }
    }
}

pub struct CreateCareerResponse {
    result: CareerResult<Career>,
}

impl CreateCareerResponse {
    pub fn new(result: CareerResult<Career>) -> Self {
        Self { result }
    }

    pub fn into_http_response(self) -> HttpResponse {
        match self.result {
            CareerResult::Success(career) => ApiResponse::created(CreatedCareer::from(career)),
            _ => ApiResponse::internal_error(),
        }
    }
}

pub struct UpdateCareerResponse {
    result: CareerResult<Career>,
}

impl UpdateCareerResponse {
    pub fn new(result: CareerResult<Career>) -> Self {
        Self { result }
    }

    pub fn into_http_response(self) -> HttpResponse {
        match self.result {
            CareerResult::Success(career) => ApiResponse::success(UpdatedCareer::from(career)),
            CareerResult::NotFound => ApiResponse::not_found(CAREER_NOT_FOUND),
            CareerResult::Error(_) => ApiResponse::internal_error(),
        }
    }
}

pub struct DeleteCareerResponse {
    result: CareerResult<()>,
}

impl DeleteCareerResponse {
    pub fn new(result: CareerResult<()>) -> Self {
        Self { result }
    }

    pub fn into_http_response(self) -> HttpResponse {
        match self.result {
            CareerResult::Success(_) => ApiResponse::no_content(),
            CareerResult::NotFound => ApiResponse::not_found(CAREER_NOT_FOUND),
            CareerResult::Error(_) => ApiResponse::internal_error(),
        }
    }
}
