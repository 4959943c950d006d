//! GraphQL документы и их переменные

use contracts::enums::ProductStatus;
use contracts::usecases::u508_shop_products::PageRequest;
use serde::Serialize;

/// Список товаров, новые сверху.
///
/// Передаётся либо пара `first/after`, либо `last/before`; отсутствующие
/// переменные не сериализуются.
pub const LIST_PRODUCTS: &str = r#"query ListProducts($first: Int, $after: String, $last: Int, $before: String) {
  products(sortKey: CREATED_AT, reverse: true, first: $first, after: $after, last: $last, before: $before) {
    edges {
      cursor
      node {
        id
        title
        status
        variants(first: 1) {
          edges {
            node {
              sku
            }
          }
        }
      }
    }
    pageInfo {
      hasNextPage
      hasPreviousPage
      startCursor
      endCursor
    }
  }
}"#;

pub const CREATE_PRODUCT: &str = r#"mutation CreateProduct($input: ProductInput!) {
  productCreate(input: $input) {
    product {
      id
      variants(first: 1) {
        edges { node { id } }
      }
    }
    userErrors { field message }
  }
}"#;

pub const VARIANTS_BULK_UPDATE: &str = r#"mutation productVariantsBulkUpdate($productId: ID!, $variants: [ProductVariantsBulkInput!]!) {
  productVariantsBulkUpdate(productId: $productId, variants: $variants) {
    product {
      id
    }
    productVariants {
      id
    }
    userErrors {
      field
      message
    }
  }
}"#;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListProductsVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}

impl ListProductsVariables {
    pub fn for_page(page: &PageRequest, page_size: i64) -> Self {
        match page {
            PageRequest::Forward { after } => Self {
                first: Some(page_size),
                after: after.clone(),
                ..Default::default()
            },
            PageRequest::Backward { before } => Self {
                last: Some(page_size),
                before: Some(before.clone()),
                ..Default::default()
            },
        }
    }
}

/// Only title and status are ever set on creation
#[derive(Debug, Clone, Serialize)]
pub struct CreateProductVariables {
    pub input: ProductInput,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductInput {
    pub title: String,
    pub status: ProductStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantsBulkUpdateVariables {
    pub product_id: String,
    pub variants: Vec<VariantSkuInput>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantSkuInput {
    pub id: String,
    pub inventory_item: InventoryItemInput,
}

#[derive(Debug, Clone, Serialize)]
pub struct InventoryItemInput {
    pub sku: String,
}

impl VariantsBulkUpdateVariables {
    /// Один вариант, меняется только SKU его inventory item
    pub fn set_sku(product_id: &str, variant_id: &str, sku: &str) -> Self {
        Self {
            product_id: product_id.to_string(),
            variants: vec![VariantSkuInput {
                id: variant_id.to_string(),
                inventory_item: InventoryItemInput {
                    sku: sku.to_string(),
                },
            }],
        }
    }
}
