use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::user::errors::UserError;
use crate::inbound::http::validation::FieldError;
use crate::inbound::http::validation::ValidationErrors;

pub mod create_item;
pub mod delete_item;
pub mod get_item;
pub mod list_items;
pub mod login;
pub mod register;
pub mod update_item;

// Re-export handlers for easy access
pub use create_item::create_item;
pub use delete_item::delete_item;
pub use get_item::get_item;
pub use list_items::list_items;
pub use login::login;
pub use register::register;
pub use update_item::update_item;

/// Successful response: a status code and a JSON body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Error response.
///
/// Each variant renders as `{"error": CODE}`, except `Validation` which
/// renders as `{"errors": [{field, message}, ...]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Validation(Vec<FieldError>),
    Unauthorized,
    InvalidCredentials,
    EmailTaken,
    NotFound,
    InternalServerError(String),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
            ApiError::EmailTaken => (StatusCode::CONFLICT, "EMAIL_TAKEN"),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        }
    }
}

/// Item as rendered on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemData {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub owner: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Item> for ItemData {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.as_str().to_string(),
            description: item.description.as_ref().map(|d| d.as_str().to_string()),
            owner: item.owner.as_str().to_string(),
            created_at: item.created_at,
        }
    }
}

/// Parse an item id taken from the request path.
fn parse_item_id(raw: &str) -> Result<ItemId, ApiError> {
    ItemId::from_string(raw)
        .map_err(ItemError::from)
        .map_err(ApiError::from)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        match self {
            ApiError::Validation(errors) => {
                (status, Json(json!({ "errors": errors }))).into_response()
            }
            ApiError::InternalServerError(cause) => {
                tracing::error!(error = %cause, "Request failed");
                (status, Json(json!({ "error": code }))).into_response()
            }
            _ => (status, Json(json!({ "error": code }))).into_response(),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors.into_inner())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(vec![FieldError::new("body", rejection.body_text())])
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmailTaken(_) => ApiError::EmailTaken,
            UserError::InvalidCredentials => ApiError::InvalidCredentials,
            UserError::InvalidEmail(e) => {
                ApiError::Validation(vec![FieldError::new("email", e.to_string())])
            }
            UserError::InvalidPassword(e) => {
                ApiError::Validation(vec![FieldError::new("password", e.to_string())])
            }
            UserError::InvalidRole(_)
            | UserError::Password(_)
            | UserError::Token(_)
            | UserError::DatabaseError(_)
            | UserError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<ItemError> for ApiError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(_) => ApiError::NotFound,
            ItemError::InvalidItemId(e) => {
                ApiError::Validation(vec![FieldError::new("id", e.to_string())])
            }
            ItemError::InvalidName(e) => {
                ApiError::Validation(vec![FieldError::new("name", e.to_string())])
            }
            ItemError::InvalidDescription(e) => {
                ApiError::Validation(vec![FieldError::new("description", e.to_string())])
            }
            ItemError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}
