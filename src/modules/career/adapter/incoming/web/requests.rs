use serde_json::Value;

use super::validation::{as_object, CharField, FieldErrors};
use crate::career::domain::entities::{
    CareerChanges, CareerId, NewCareer, TITLE_MAX_LENGTH, USERNAME_MAX_LENGTH,
};

const USERNAME: CharField = CharField::new("username", Some(USERNAME_MAX_LENGTH));
const TITLE: CharField = CharField::new("title", Some(TITLE_MAX_LENGTH));
const CONTENT: CharField = CharField::new("content", None);

/// Validates a `POST /careers/` body.
pub struct CreateCareerRequest;

impl CreateCareerRequest {
    pub fn validate(payload: &Value) -> Result<NewCareer, FieldErrors> {
        let data = as_object(payload)?;
        let mut errors = FieldErrors::default();

        let username = USERNAME.clean(data, &mut errors);
        let title = TITLE.clean(data, &mut errors);
        let content = CONTENT.clean(data, &mut errors);

        match (username, title, content) {
            (Some(username), Some(title), Some(content)) => Ok(NewCareer {
                username,
                title,
                content,
            }),
            _ => Err(errors),
        }
    }
}

/// Validates a `PATCH /careers/{id}/` body. Only title and content are read.
pub struct UpdateCareerRequest;

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedUpdate {
    pub title: String,
    pub content: String,
}

impl ValidatedUpdate {
    pub fn for_career(self, id: CareerId) -> CareerChanges {
        CareerChanges {
            id,
            title: self.title,
            content: self.content,
        }
    }
}

impl UpdateCareerRequest {
    pub fn validate(payload: &Value) -> Result<ValidatedUpdate, FieldErrors> {
        let data = as_object(payload)?;
        let mut errors = FieldErrors::default();

        let title = TITLE.clean(data, &mut errors);
        let content = CONTENT.clean(data, &mut errors);

        match (title, content) {
            (Some(title), Some(content)) => Ok(ValidatedUpdate { title, content }),
            _ => Err(errors),
        }
    }
}

/// Path ids that are not positive integers cannot match a stored row.
pub fn parse_career_id(raw: &str) -> Option<CareerId> {
    raw.parse::<CareerId>().ok().filter(|id| *id > 0)
}
