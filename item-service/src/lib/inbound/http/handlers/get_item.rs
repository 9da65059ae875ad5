use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_item_id;
use super::ApiError;
use super::ApiSuccess;
use super::ItemData;
use crate::domain::item::ports::ItemServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn get_item(
    State(state): State<AppState>,
    caller: CurrentUser,
    Path(item_id): Path<String>,
) -> Result<ApiSuccess<ItemData>, ApiError> {
    let item_id = parse_item_id(&item_id)?;

    state
        .item_service
        .get_item(&caller.owner(), &item_id)
        .await
        .map_err(ApiError::from)
        .map(|ref item| ApiSuccess::new(StatusCode::OK, item.into()))
}
