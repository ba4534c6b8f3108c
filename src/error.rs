use rocket::http::Status;
use rocket::response::{self, Responder, status};
use rocket::serde::json::Json;
use rocket::{Request, Response};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Cursor;

/// JSON body shared by every failing response: `{ "error": "..." }`.
/// Server-side faults never leak SQL text or internals into it.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    Database(sqlx::Error),
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let (status, error) = match self {
            ApiError::Database(e) => {
                log::error!("database error: {}", e);
                (Status::InternalServerError, "internal server error".to_string())
            }
            ApiError::NotFound(msg) => {
                log::debug!("not found: {}", msg);
                (Status::NotFound, msg)
            }
            ApiError::BadRequest(msg) => {
                log::debug!("bad request: {}", msg);
                (Status::BadRequest, msg)
            }
            ApiError::Internal(msg) => {
                log::error!("internal error: {}", msg);
                (Status::InternalServerError, "internal server error".to_string())
            }
        };

        let json = serde_json::to_string(&ErrorBody { error })
            .unwrap_or_else(|_| r#"{"error":"internal server error"}"#.to_string());

        Response::build()
            .status(status)
            .header(rocket::http::ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".to_string()),
            _ => ApiError::Database(err),
        }
    }
}

impl rocket_okapi::response::OpenApiResponderInner for ApiError {
    fn responses(
        _generator: &mut rocket_okapi::r#gen::OpenApiGenerator,
    ) -> rocket_okapi::Result<rocket_okapi::okapi::openapi3::Responses> {
        // Every failure shares the `{ error }` body; nothing schema-specific.
        Ok(rocket_okapi::okapi::openapi3::Responses::default())
    }
}

/// Guard rejections bypass route responders, so catchers keep their
/// bodies in the same `{ "error": ... }` shape.
#[catch(401)]
pub fn unauthorized() -> Json<ErrorBody> {
    Json(ErrorBody {
        error: "authentication required".to_string(),
    })
}

#[catch(default)]
pub fn fallback(status: Status, _request: &Request) -> status::Custom<Json<ErrorBody>> {
    status::Custom(
        status,
        Json(ErrorBody {
            error: status.reason_lossy().to_lowercase(),
        }),
    )
}
