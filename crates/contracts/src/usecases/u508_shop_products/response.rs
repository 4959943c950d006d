use serde::{Deserialize, Serialize};

use crate::enums::ProductStatus;

use super::PRODUCT_CREATED_MESSAGE;

/// Строка таблицы товаров
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEntry {
    /// GID товара, например `gid://shopify/Product/123`
    pub id: String,
    pub title: String,
    /// Код статуса из Admin API без проверки: `ACTIVE`, `DRAFT`, `ARCHIVED`
    /// или любой новый
    pub status: String,
    /// SKU первого варианта; пустая строка, если варианта нет
    pub sku: String,
}

/// Вариант списка выбора статуса в форме создания
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusOption {
    pub label: String,
    pub value: ProductStatus,
}

impl StatusOption {
    /// Все статусы, которые принимает форма, в порядке отображения
    pub fn all() -> Vec<StatusOption> {
        ProductStatus::all()
            .into_iter()
            .map(|status| StatusOption {
                label: status.label().to_string(),
                value: status,
            })
            .collect()
    }
}

/// Ответ `GET /app`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub products: Vec<ProductEntry>,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    /// `pageInfo.endCursor`
    pub next_cursor: Option<String>,
    /// `pageInfo.startCursor`
    pub prev_cursor: Option<String>,
    pub status_options: Vec<StatusOption>,
}

/// Ответ `POST /app`: ровно одно из полей заполнено
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProductResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
}

impl CreateProductResponse {
    pub fn success() -> Self {
        Self {
            error: None,
            success: Some(PRODUCT_CREATED_MESSAGE.to_string()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            success: None,
        }
    }
}
