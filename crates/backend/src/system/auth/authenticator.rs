use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::Query;
use axum::http::{header::AUTHORIZATION, request::Parts};

use super::jwt::validate_session_token;
use super::AuthError;
use crate::shared::config::ShopifyConfig;
use crate::shared::shopify::{AdminApiClient, ShopifyAdminApi, ShopifyError};

/// Получить авторизованный клиент Admin API по входящему запросу
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, parts: &Parts) -> Result<Arc<dyn ShopifyAdminApi>, AuthError>;
}

/// Проверяет session token встроенной админки и выдаёт клиент с offline
/// access token магазина из конфигурации
pub struct SessionTokenAuthenticator {
    config: ShopifyConfig,
    http: reqwest::Client,
}

impl SessionTokenAuthenticator {
    pub fn new(config: ShopifyConfig) -> Result<Self, ShopifyError> {
        let http = AdminApiClient::build_http_client(&config)?;
        Ok(Self { config, http })
    }

    fn ensure_configured(&self) -> Result<(), AuthError> {
        if self.config.api_key.trim().is_empty() {
            return Err(AuthError::NotConfigured("shopify.api_key"));
        }
        if self.config.api_secret.trim().is_empty() {
            return Err(AuthError::NotConfigured("shopify.api_secret"));
        }
        if self.config.access_token.trim().is_empty() {
            return Err(AuthError::NotConfigured("shopify.access_token"));
        }
        Ok(())
    }
}

#[async_trait]
impl Authenticator for SessionTokenAuthenticator {
    async fn authenticate(&self, parts: &Parts) -> Result<Arc<dyn ShopifyAdminApi>, AuthError> {
        self.ensure_configured()?;

        let token = session_token(parts).ok_or(AuthError::MissingToken)?;
        let claims = validate_session_token(&token, &self.config.api_key, &self.config.api_secret)?;

        let shop = claims.shop_domain();
        if !shop.eq_ignore_ascii_case(self.config.shop.trim()) {
            return Err(AuthError::ShopMismatch {
                expected: self.config.shop.clone(),
                actual: shop.to_string(),
            });
        }

        let client = AdminApiClient::new(
            self.http.clone(),
            &self.config.shop,
            &self.config.api_version,
            &self.config.access_token,
        );
        tracing::debug!("Authenticated admin session for {} -> {}", shop, client.endpoint());

        Ok(Arc::new(client))
    }
}

/// `Authorization: Bearer <token>` или query-параметр `id_token`
fn session_token(parts: &Parts) -> Option<String> {
    let from_header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    from_header.or_else(|| {
        Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(params)| params.get("id_token").cloned())
            .filter(|t| !t.is_empty())
    })
}
