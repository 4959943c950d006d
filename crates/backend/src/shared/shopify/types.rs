//! Ответы Admin API, ровно в объёме выбранных полей

use serde::Deserialize;

/// Тело ответа `graphql.json`
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl GraphQlResponse {
    /// `errors` важнее частичных `data`
    pub fn into_data(self) -> Result<serde_json::Value, super::ShopifyError> {
        if !self.errors.is_empty() {
            return Err(super::ShopifyError::GraphQl(self.errors));
        }
        match self.data {
            Some(data) if !data.is_null() => Ok(data),
            _ => Err(super::ShopifyError::MissingData("data")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

impl GraphQlError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Ошибка валидации внутри успешного ответа мутации
#[derive(Debug, Clone, Deserialize)]
pub struct UserError {
    #[serde(default)]
    pub field: Option<Vec<String>>,
    pub message: String,
}

impl UserError {
    pub fn describe(&self) -> String {
        match &self.field {
            Some(field) if !field.is_empty() => format!("{}: {}", field.join("."), self.message),
            _ => self.message.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Edges<T> {
    pub edges: Vec<Edge<T>>,
}

impl<T> Edges<T> {
    pub fn first_node(&self) -> Option<&T> {
        self.edges.first().map(|edge| &edge.node)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    #[serde(default)]
    pub start_cursor: Option<String>,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

// ============================================================================
// ListProducts
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ListProductsData {
    pub products: Connection<ProductNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductNode {
    pub id: String,
    pub title: String,
    /// Код как есть: новые версии API добавляют статусы
    pub status: String,
    pub variants: Edges<VariantSkuNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariantSkuNode {
    #[serde(default)]
    pub sku: Option<String>,
}

// ============================================================================
// CreateProduct
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductData {
    pub product_create: Option<ProductCreatePayload>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreatePayload {
    #[serde(default)]
    pub product: Option<CreatedProduct>,
    #[serde(default)]
    pub user_errors: Vec<UserError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedProduct {
    pub id: String,
    pub variants: Edges<IdNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdNode {
    pub id: String,
}

// ============================================================================
// productVariantsBulkUpdate
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantsBulkUpdateData {
    pub product_variants_bulk_update: Option<VariantsBulkUpdatePayload>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantsBulkUpdatePayload {
    #[serde(default)]
    pub product_variants: Option<Vec<IdNode>>,
    #[serde(default)]
    pub user_errors: Vec<UserError>,
}
