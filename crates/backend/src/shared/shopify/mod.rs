//! Клиент Shopify Admin GraphQL API
//!
//! Вся бизнес-логика (товары, варианты, остатки) живёт в магазине; здесь
//! только транспорт и типизированный разбор ответов.

mod admin_client;
pub mod queries;
pub mod types;

pub use admin_client::AdminApiClient;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use types::{GraphQlError, UserError};

/// Errors that can occur when calling the Admin API.
#[derive(Debug, Error)]
pub enum ShopifyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Admin API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Top-level `errors` of the GraphQL response
    #[error("{}", format_graphql_errors(.0))]
    GraphQl(Vec<GraphQlError>),

    #[error("Failed to parse Admin API response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Admin API response is missing `{0}`")]
    MissingData(&'static str),

    /// `userErrors` of a mutation payload
    #[error("{}", format_user_errors(.0))]
    UserErrors(Vec<UserError>),
}

fn format_graphql_errors(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join("; ")
}

fn format_user_errors(errors: &[UserError]) -> String {
    errors
        .iter()
        .map(UserError::describe)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Авторизованный клиент Admin API: единственная операция `graphql`.
///
/// Возвращает содержимое `data` ответа; GraphQL `errors` превращаются в
/// [`ShopifyError::GraphQl`].
#[async_trait]
pub trait ShopifyAdminApi: Send + Sync {
    async fn graphql(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<serde_json::Value, ShopifyError>;
}

/// Выполнить документ и разобрать `data` в `T`
pub async fn execute<T, V>(
    api: &dyn ShopifyAdminApi,
    query: &str,
    variables: &V,
) -> Result<T, ShopifyError>
where
    T: DeserializeOwned,
    V: Serialize + ?Sized,
{
    let variables = serde_json::to_value(variables)?;
    let data = api.graphql(query, variables).await?;
    Ok(serde_json::from_value(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_error_display_is_bare_messages() {
        let err = ShopifyError::GraphQl(vec![
            GraphQlError::new("Title is required"),
            GraphQlError::new("Throttled"),
        ]);
        assert_eq!(err.to_string(), "Title is required; Throttled");
    }

    #[test]
    fn test_user_errors_display_includes_field_path() {
        let err = ShopifyError::UserErrors(vec![
            UserError {
                field: Some(vec!["variants".to_string(), "0".to_string(), "sku".to_string()]),
                message: "SKU has already been taken".to_string(),
            },
            UserError {
                field: None,
                message: "Something else".to_string(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "variants.0.sku: SKU has already been taken; Something else"
        );
    }
}
