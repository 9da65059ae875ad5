use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::ItemData;
use crate::domain::item::ports::ItemServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn list_items(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> Result<ApiSuccess<Vec<ItemData>>, ApiError> {
    state
        .item_service
        .list_items(&caller.owner())
        .await
        .map_err(ApiError::from)
        .map(|items| ApiSuccess::new(StatusCode::OK, items.iter().map(ItemData::from).collect()))
}
