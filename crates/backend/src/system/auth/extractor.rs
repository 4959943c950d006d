use std::sync::Arc;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};

use crate::routes::AppState;
use crate::shared::shopify::ShopifyAdminApi;

/// Authorized Admin API client for the current request
/// Usage in handlers: `async fn handler(AdminContext(admin): AdminContext) -> Response`
pub struct AdminContext(pub Arc<dyn ShopifyAdminApi>);

#[async_trait]
impl FromRequestParts<AppState> for AdminContext {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match state.authenticator.authenticate(parts).await {
            Ok(admin) => Ok(AdminContext(admin)),
            Err(e) => {
                tracing::warn!("Admin authentication failed for {}: {}", parts.uri.path(), e);
                Err(StatusCode::UNAUTHORIZED)
            }
        }
    }
}
