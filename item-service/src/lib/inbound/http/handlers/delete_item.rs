use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_item_id;
use super::ApiError;
use crate::domain::item::ports::ItemServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn delete_item(
    State(state): State<AppState>,
    caller: CurrentUser,
    Path(item_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let item_id = parse_item_id(&item_id)?;

    state
        .item_service
        .delete_item(&caller.owner(), &item_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
