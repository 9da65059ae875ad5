use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::parse_item_id;
use super::ApiError;
use super::ApiSuccess;
use super::ItemData;
use crate::domain::item::models::Description;
use crate::domain::item::models::ItemName;
use crate::domain::item::models::UpdateItemCommand;
use crate::domain::item::ports::ItemServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::ValidationErrors;

pub async fn update_item(
    State(state): State<AppState>,
    caller: CurrentUser,
    Path(item_id): Path<String>,
    body: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<ApiSuccess<ItemData>, ApiError> {
    let item_id = parse_item_id(&item_id)?;
    let Json(body) = body?;

    state
        .item_service
        .update_item(&caller.owner(), &item_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref item| ApiSuccess::new(StatusCode::OK, item.into()))
}

/// HTTP request body for a partial item update (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct UpdateItemRequest {
    name: Option<String>,
    description: Option<String>,
}

impl UpdateItemRequest {
    fn try_into_command(self) -> Result<UpdateItemCommand, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let command = UpdateItemCommand {
            name: errors.check_optional("name", self.name.map(ItemName::new)),
            description: errors.check_optional(
                "description",
                self.description.map(Description::new),
            ),
        };

        if errors.is_empty() {
            Ok(command)
        } else {
            Err(errors)
        }
    }
}
