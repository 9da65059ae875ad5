use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::ValidationErrors;

pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let Json(body) = body?;

    state
        .user_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

/// HTTP request body for registration (raw JSON)
///
/// Missing fields deserialize as empty strings so they are reported as
/// field errors rather than as an unreadable body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    email: String,
    password: String,
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterCommand, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let email = errors.check("email", EmailAddress::new(self.email));
        let password = errors.check("password", Password::new(self.password));

        match (email, password) {
            (Some(email), Some(password)) => Ok(RegisterCommand::new(email, password)),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub id: String,
    pub email: String,
    pub role: String,
}

impl From<&User> for RegisterResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            role: user.role.as_str().to_string(),
        }
    }
}
