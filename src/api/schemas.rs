// src/api/schemas.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Body accepted by `POST /careers/`
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateCareerBody {
    /// Author of the entry, at most 30 characters
    #[schema(example = "jdoe")]
    pub username: String,

    /// At most 50 characters
    #[schema(example = "Backend engineer")]
    pub title: String,

    #[schema(example = "Five years building HTTP services.")]
    pub content: String,
}

/// Body accepted by `PATCH /careers/{id}/`. Any other key is ignored.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateCareerBody {
    #[schema(example = "Staff engineer")]
    pub title: String,

    #[schema(example = "Now leading the platform team.")]
    pub content: String,
}

/// Field name mapped to its validation messages
#[derive(Serialize, ToSchema)]
#[schema(example = json!({ "title": ["This field is required."] }))]
pub struct ValidationErrorResponse(pub BTreeMap<String, Vec<String>>);
