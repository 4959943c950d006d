use serde::{Deserialize, Serialize};
use std::fmt;

/// Статус товара в магазине
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    Active,
    #[default]
    Draft,
    Archived,
}

impl ProductStatus {
    /// Код статуса в Admin API
    pub fn code(&self) -> &'static str {
        match self {
            ProductStatus::Active => "ACTIVE",
            ProductStatus::Draft => "DRAFT",
            ProductStatus::Archived => "ARCHIVED",
        }
    }

    /// Подпись в списке выбора формы
    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Active => "Active",
            ProductStatus::Draft => "Draft",
            ProductStatus::Archived => "Archived",
        }
    }

    pub fn all() -> Vec<ProductStatus> {
        vec![
            ProductStatus::Active,
            ProductStatus::Draft,
            ProductStatus::Archived,
        ]
    }

    /// Парсинг из строки (точное совпадение кода)
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ACTIVE" => Some(ProductStatus::Active),
            "DRAFT" => Some(ProductStatus::Draft),
            "ARCHIVED" => Some(ProductStatus::Archived),
            _ => None,
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
