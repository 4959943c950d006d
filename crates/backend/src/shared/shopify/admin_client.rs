use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::json;

use super::types::GraphQlResponse;
use super::{ShopifyAdminApi, ShopifyError};
use crate::shared::config::ShopifyConfig;

/// HTTP-клиент Admin GraphQL API одного магазина
#[derive(Clone)]
pub struct AdminApiClient {
    client: reqwest::Client,
    endpoint: String,
    access_token: String,
}

impl AdminApiClient {
    /// Общий `reqwest::Client` для всех запросов к Admin API
    pub fn build_http_client(config: &ShopifyConfig) -> Result<reqwest::Client, ShopifyError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(client)
    }

    pub fn new(client: reqwest::Client, shop: &str, api_version: &str, access_token: &str) -> Self {
        Self {
            client,
            endpoint: graphql_endpoint(shop, api_version),
            access_token: access_token.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Клиент на произвольный адрес (локальный сервер в тестах)
    #[cfg(test)]
    fn with_endpoint(client: reqwest::Client, endpoint: String, access_token: &str) -> Self {
        Self {
            client,
            endpoint,
            access_token: access_token.to_string(),
        }
    }
}

/// `https://{shop}/admin/api/{version}/graphql.json`
fn graphql_endpoint(shop: &str, api_version: &str) -> String {
    let shop = shop
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');
    format!("https://{}/admin/api/{}/graphql.json", shop, api_version)
}

/// Имя операции из документа, для логов
fn operation_name(query: &str) -> &str {
    query
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.split('(').next())
        .unwrap_or("anonymous")
}

#[async_trait]
impl ShopifyAdminApi for AdminApiClient {
    async fn graphql(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<serde_json::Value, ShopifyError> {
        let operation = operation_name(query);
        tracing::debug!("Admin API {} variables: {}", operation, variables);

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-Shopify-Access-Token", &self.access_token)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!("Admin API {} failed with status {}: {}", operation, status, body);
            return Err(ShopifyError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GraphQlResponse = serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(500).collect();
            tracing::error!("Failed to parse Admin API {} response: {}. Body: {}", operation, e, preview);
            e
        })?;

        envelope.into_data().map_err(|e| {
            tracing::warn!("Admin API {} returned errors: {}", operation, e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::shopify::queries;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::Value;

    const GRAPHQL_PATH: &str = "/admin/api/2025-01/graphql.json";

    /// Поднять локальный Admin API и вернуть клиент, направленный на него
    async fn client_for(app: Router) -> AdminApiClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        AdminApiClient::with_endpoint(
            reqwest::Client::builder().no_proxy().build().unwrap(),
            format!("http://{}{}", addr, GRAPHQL_PATH),
            "shpat_test",
        )
    }

    #[tokio::test]
    async fn test_request_carries_token_and_query_body() {
        let app = Router::new().route(
            GRAPHQL_PATH,
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let token = headers
                    .get("x-shopify-access-token")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                Json(json!({ "data": { "token": token, "body": body } }))
            }),
        );
        let client = client_for(app).await;

        let data = client
            .graphql(queries::LIST_PRODUCTS, json!({ "first": 5 }))
            .await
            .unwrap();

        assert_eq!(data["token"], "shpat_test");
        assert_eq!(data["body"]["query"], queries::LIST_PRODUCTS);
        assert_eq!(data["body"]["variables"], json!({ "first": 5 }));
    }

    #[tokio::test]
    async fn test_non_success_status_keeps_body() {
        let app = Router::new().route(
            GRAPHQL_PATH,
            post(|| async { (StatusCode::BAD_GATEWAY, "Bad Gateway") }),
        );
        let client = client_for(app).await;

        let err = client
            .graphql(queries::LIST_PRODUCTS, json!({}))
            .await
            .unwrap_err();

        match err {
            ShopifyError::Status { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "Bad Gateway");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_parse_error() {
        let app = Router::new().route(GRAPHQL_PATH, post(|| async { "<html>maintenance</html>" }));
        let client = client_for(app).await;

        let err = client.graphql(queries::LIST_PRODUCTS, json!({})).await;

        assert!(matches!(err, Err(ShopifyError::Parse(_))));
    }

    #[tokio::test]
    async fn test_graphql_errors_and_missing_data() {
        let app = Router::new().route(
            GRAPHQL_PATH,
            post(|| async { Json(json!({ "errors": [{ "message": "Throttled" }] })) }),
        );
        let client = client_for(app).await;
        let err = client
            .graphql(queries::LIST_PRODUCTS, json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ShopifyError::GraphQl(_)));
        assert_eq!(err.to_string(), "Throttled");

        let app = Router::new().route(GRAPHQL_PATH, post(|| async { Json(json!({ "data": null })) }));
        let client = client_for(app).await;
        let err = client.graphql(queries::LIST_PRODUCTS, json!({})).await;
        assert!(matches!(err, Err(ShopifyError::MissingData("data"))));
    }

    #[test]
    fn test_graphql_endpoint_normalizes_shop() {
        assert_eq!(
            graphql_endpoint("https://mugs.myshopify.com/", "2025-01"),
            "https://mugs.myshopify.com/admin/api/2025-01/graphql.json"
        );
        assert_eq!(
            graphql_endpoint("mugs.myshopify.com", "2024-10"),
            "https://mugs.myshopify.com/admin/api/2024-10/graphql.json"
        );
    }

    #[test]
    fn test_operation_name() {
        assert_eq!(operation_name(queries::LIST_PRODUCTS), "ListProducts");
        assert_eq!(operation_name(queries::CREATE_PRODUCT), "CreateProduct");
        assert_eq!(
            operation_name(queries::VARIANTS_BULK_UPDATE),
            "productVariantsBulkUpdate"
        );
    }
}
