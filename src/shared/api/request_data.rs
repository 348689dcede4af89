// src/shared/api/request_data.rs
use crate::shared::api::ApiResponse;
use actix_web::{
    dev::Payload, error::InternalError, http::StatusCode, web, Error as ActixError, FromRequest,
    HttpMessage, HttpRequest, HttpResponse,
};
use serde_json::{Map, Value};
use std::{future::Future, pin::Pin};

pub const UNSUPPORTED_MEDIA_TYPE: &str = "Unsupported media type in request.";

/// Request body decoded from JSON or a url-encoded form.
///
/// An empty body decodes to an empty object whatever its content type, so
/// validators report missing fields instead of a media type error. Form
/// values are always strings; a repeated key keeps its last value.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestData(pub Value);

enum BodyKind {
    Json,
    Form,
    Unsupported,
}

fn body_kind(req: &HttpRequest) -> BodyKind {
    let content_type = req.content_type().to_ascii_lowercase();

    if content_type == "application/json" || content_type.ends_with("+json") {
        BodyKind::Json
    } else if content_type == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Unsupported
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    InternalError::from_response("", response).into()
}

fn parse_error(kind: &str, err: impl std::fmt::Display) -> ActixError {
    create_api_error(ApiResponse::detail(
        StatusCode::BAD_REQUEST,
        &format!("{kind} parse error - {err}"),
    ))
}

fn decode(req: &HttpRequest, body: &[u8]) -> Result<Value, ActixError> {
    if body.is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    match body_kind(req) {
        BodyKind::Json => serde_json::from_slice(body).map_err(|e| parse_error("JSON", e)),
        BodyKind::Form => serde_urlencoded::from_bytes::<Vec<(String, String)>>(body)
            .map(|pairs| {
                Value::Object(
                    pairs
                        .into_iter()
                        .map(|(key, value)| (key, Value::String(value)))
                        .collect(),
                )
            })
            .map_err(|e| parse_error("Form", e)),
        BodyKind::Unsupported => Err(create_api_error(ApiResponse::detail(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            UNSUPPORTED_MEDIA_TYPE,
        ))),
    }
}

impl FromRequest for RequestData {
    type Error = ActixError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body = web::Bytes::from_request(req, payload);
        let req = req.clone();

        Box::pin(async move {
            let body = body.await?;
            decode(&req, &body).map(RequestData)
        })
    }
}
