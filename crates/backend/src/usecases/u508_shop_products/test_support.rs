//! In-memory Admin API for tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::request::Parts;
use serde_json::{json, Value};

use crate::shared::shopify::queries::{CREATE_PRODUCT, VARIANTS_BULK_UPDATE};
use crate::shared::shopify::types::GraphQlError;
use crate::shared::shopify::{ShopifyAdminApi, ShopifyError};
use crate::system::auth::{AuthError, Authenticator};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub query: String,
    pub variables: Value,
}

type Handler = dyn Fn(&str, &Value) -> Result<Value, ShopifyError> + Send + Sync;

/// Отвечает через переданный обработчик и запоминает все вызовы
pub struct FakeAdminApi {
    handler: Box<Handler>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeAdminApi {
    pub fn replying(
        handler: impl Fn(&str, &Value) -> Result<Value, ShopifyError> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            handler: Box::new(handler),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Every call is rejected with the given message
    pub fn failing(message: &'static str) -> Arc<Self> {
        Self::replying(move |_, _| Err(ShopifyError::GraphQl(vec![GraphQlError::new(message)])))
    }

    /// Магазин, принимающий обе мутации; каждый товар получает новый id.
    /// При `with_variant = false` товар создаётся без варианта.
    pub fn shop(with_variant: bool) -> Arc<Self> {
        let next_id = AtomicUsize::new(1);
        Self::replying(move |query, variables| {
            if query == CREATE_PRODUCT {
                let id = next_id.fetch_add(1, Ordering::SeqCst);
                Ok(product_create_data(id, with_variant))
            } else if query == VARIANTS_BULK_UPDATE {
                Ok(json!({
                    "productVariantsBulkUpdate": {
                        "product": { "id": variables["productId"] },
                        "productVariants": [{ "id": variables["variants"][0]["id"] }],
                        "userErrors": []
                    }
                }))
            } else {
                Err(ShopifyError::GraphQl(vec![GraphQlError::new("unexpected document")]))
            }
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, query: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.query == query)
            .collect()
    }
}

#[async_trait]
impl ShopifyAdminApi for FakeAdminApi {
    async fn graphql(&self, query: &str, variables: Value) -> Result<Value, ShopifyError> {
        self.calls.lock().unwrap().push(RecordedCall {
            query: query.to_string(),
            variables: variables.clone(),
        });
        (self.handler)(query, &variables)
    }
}

/// Authenticator that always hands out the same fake client
pub struct StaticAuthenticator(pub Arc<FakeAdminApi>);

#[async_trait]
impl Authenticator for StaticAuthenticator {
    async fn authenticate(&self, _parts: &Parts) -> Result<Arc<dyn ShopifyAdminApi>, AuthError> {
        Ok(self.0.clone())
    }
}

pub struct DenyingAuthenticator;

#[async_trait]
impl Authenticator for DenyingAuthenticator {
    async fn authenticate(&self, _parts: &Parts) -> Result<Arc<dyn ShopifyAdminApi>, AuthError> {
        Err(AuthError::MissingToken)
    }
}

// ============================================================================
// Response builders
// ============================================================================

pub fn product_node(id: &str, title: &str, status: &str, sku: Option<&str>) -> Value {
    let variants = match sku {
        Some(sku) => json!({ "edges": [{ "node": { "sku": sku } }] }),
        None => json!({ "edges": [] }),
    };
    json!({ "id": id, "title": title, "status": status, "variants": variants })
}

pub fn list_products_data(nodes: Vec<Value>, has_next: bool, has_previous: bool) -> Value {
    let edges: Vec<Value> = nodes
        .into_iter()
        .enumerate()
        .map(|(i, node)| json!({ "cursor": format!("cursor-{}", i), "node": node }))
        .collect();

    json!({
        "products": {
            "edges": edges,
            "pageInfo": {
                "hasNextPage": has_next,
                "hasPreviousPage": has_previous,
                "startCursor": "cursor-start",
                "endCursor": "cursor-end"
            }
        }
    })
}

pub fn product_create_data(id: usize, with_variant: bool) -> Value {
    let variants = if with_variant {
        json!({ "edges": [{ "node": { "id": format!("gid://shopify/ProductVariant/{}", id * 10) } }] })
    } else {
        json!({ "edges": [] })
    };
    json!({
        "productCreate": {
            "product": { "id": format!("gid://shopify/Product/{}", id), "variants": variants },
            "userErrors": []
        }
    })
}
