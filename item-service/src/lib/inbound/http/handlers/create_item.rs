use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::ItemData;
use crate::domain::item::models::CreateItemCommand;
use crate::domain::item::models::Description;
use crate::domain::item::models::ItemName;
use crate::domain::item::ports::ItemServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::ValidationErrors;

pub async fn create_item(
    State(state): State<AppState>,
    caller: CurrentUser,
    body: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<ApiSuccess<ItemData>, ApiError> {
    let Json(body) = body?;

    state
        .item_service
        .create_item(&caller.owner(), body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref item| ApiSuccess::new(StatusCode::CREATED, item.into()))
}

/// HTTP request body for creating an item (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct CreateItemRequest {
    name: String,
    description: Option<String>,
}

impl CreateItemRequest {
    fn try_into_command(self) -> Result<CreateItemCommand, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = errors.check("name", ItemName::new(self.name));
        let description = errors.check_optional(
            "description",
            self.description.map(Description::new),
        );

        match name {
            Some(name) if errors.is_empty() => Ok(CreateItemCommand { name, description }),
            _ => Err(errors),
        }
    }
}
