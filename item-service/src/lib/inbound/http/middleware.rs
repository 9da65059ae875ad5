use std::sync::Arc;

use auth::Authenticator;
use auth::GateOutcome;
use auth::Identity;
use axum::extract::FromRequestParts;
use axum::extract::Request;
use axum::extract::State;
use axum::http::request::Parts;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::item::models::Owner;
use crate::inbound::http::handlers::ApiError;

/// Extension type carrying the verified caller of a request, if any.
///
/// Inserted by [`identify`] on every request.
#[derive(Debug, Clone, Default)]
pub struct IdentityContext(pub Option<Identity>);

/// Middleware that evaluates the bearer token and records the outcome in
/// request extensions.
///
/// Never rejects a request: an absent, malformed, forged or expired token all
/// leave an empty context behind.
pub async fn identify(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Response {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let outcome = authenticator.identify(header);
    if let GateOutcome::Rejected(reason) = &outcome {
        tracing::debug!(reason = %reason, "Bearer token rejected");
    }

    req.extensions_mut()
        .insert(IdentityContext(outcome.into_identity()));

    next.run(req).await
}

/// Extractor for routes that require an authenticated caller.
///
/// Rejects with `401` when the request carries no identity.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Identity);

impl CurrentUser {
    /// Owner under which this caller's items are stored.
    pub fn owner(&self) -> Owner {
        Owner::new(self.0.subject.as_str())
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<IdentityContext>() {
            Some(IdentityContext(Some(identity))) => Ok(CurrentUser(identity.clone())),
            _ => Err(ApiError::Unauthorized),
        }
    }
}
