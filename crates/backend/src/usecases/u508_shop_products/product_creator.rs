use std::sync::Arc;

use contracts::enums::ProductStatus;
use contracts::usecases::u508_shop_products::{CreateProductForm, CreateProductResponse};
use thiserror::Error;

use crate::shared::shopify::queries::{
    CreateProductVariables, ProductInput, VariantsBulkUpdateVariables, CREATE_PRODUCT,
    VARIANTS_BULK_UPDATE,
};
use crate::shared::shopify::types::{CreateProductData, VariantsBulkUpdateData};
use crate::shared::shopify::{execute, ShopifyAdminApi, ShopifyError};

/// Ошибки формы, проверяемые до обращения к Admin API
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Title is required")]
    TitleRequired,

    #[error("SKU is required")]
    SkuRequired,

    #[error("Invalid product status: {0}")]
    InvalidStatus(String),
}

/// Проверенные данные формы
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub title: String,
    pub status: ProductStatus,
    pub sku: String,
}

impl NewProduct {
    /// Missing title/SKU are empty, missing status is DRAFT.
    pub fn from_form(form: CreateProductForm) -> Result<Self, FormError> {
        let title = form.title.unwrap_or_default();
        let sku = form.sku.unwrap_or_default();
        let status = match form.status.as_deref().map(str::trim) {
            None | Some("") => ProductStatus::default(),
            Some(code) => ProductStatus::from_code(code)
                .ok_or_else(|| FormError::InvalidStatus(code.to_string()))?,
        };

        if title.trim().is_empty() {
            return Err(FormError::TitleRequired);
        }
        if sku.trim().is_empty() {
            return Err(FormError::SkuRequired);
        }

        Ok(Self { title, status, sku })
    }
}

/// Созданный товар; id нужен только для логов и тестов
#[derive(Debug, Clone)]
pub struct ProductCreated {
    pub product_id: String,
    pub variant_id: Option<String>,
}

/// Создание товара и привязка SKU к его первому варианту
pub struct ProductCreator {
    admin: Arc<dyn ShopifyAdminApi>,
}

impl ProductCreator {
    pub fn new(admin: Arc<dyn ShopifyAdminApi>) -> Self {
        Self { admin }
    }

    /// Обработать отправку формы. Никогда не возвращает ошибку наружу:
    /// первая ошибка становится сообщением ответа.
    pub async fn submit(&self, form: CreateProductForm) -> CreateProductResponse {
        let product = match NewProduct::from_form(form) {
            Ok(product) => product,
            Err(e) => {
                tracing::info!("Product form rejected: {}", e);
                return CreateProductResponse::error(e.to_string());
            }
        };

        match self.create(&product).await {
            Ok(created) => {
                tracing::info!(
                    "Product created: {} (variant: {})",
                    created.product_id,
                    created.variant_id.as_deref().unwrap_or("none")
                );
                CreateProductResponse::success()
            }
            Err(e) => {
                tracing::warn!("Product creation failed for '{}': {}", product.title, e);
                CreateProductResponse::error(e.to_string())
            }
        }
    }

    /// `productCreate`, затем `productVariantsBulkUpdate`, если у товара
    /// есть вариант. Отката нет: при ошибке обновления SKU товар остаётся.
    pub async fn create(&self, product: &NewProduct) -> Result<ProductCreated, ShopifyError> {
        let variables = CreateProductVariables {
            input: ProductInput {
                title: product.title.clone(),
                status: product.status,
            },
        };
        let data: CreateProductData = execute(self.admin.as_ref(), CREATE_PRODUCT, &variables).await?;

        let payload = data
            .product_create
            .ok_or(ShopifyError::MissingData("productCreate"))?;
        if !payload.user_errors.is_empty() {
            return Err(ShopifyError::UserErrors(payload.user_errors));
        }
        let created = payload
            .product
            .ok_or(ShopifyError::MissingData("productCreate.product"))?;

        let variant_id = created.variants.first_node().map(|node| node.id.clone());

        if let Some(variant_id) = &variant_id {
            self.set_sku(&created.id, variant_id, &product.sku).await?;
        } else {
            tracing::debug!("Product {} has no variant, SKU update skipped", created.id);
        }

        Ok(ProductCreated {
            product_id: created.id,
            variant_id,
        })
    }

    async fn set_sku(&self, product_id: &str, variant_id: &str, sku: &str) -> Result<(), ShopifyError> {
        let variables = VariantsBulkUpdateVariables::set_sku(product_id, variant_id, sku);
        let data: VariantsBulkUpdateData =
            execute(self.admin.as_ref(), VARIANTS_BULK_UPDATE, &variables).await?;

        let payload = data
            .product_variants_bulk_update
            .ok_or(ShopifyError::MissingData("productVariantsBulkUpdate"))?;
        if !payload.user_errors.is_empty() {
            return Err(ShopifyError::UserErrors(payload.user_errors));
        }

        tracing::debug!(
            "SKU set on {} variant(s) of {}",
            payload.product_variants.map(|v| v.len()).unwrap_or(0),
            product_id
        );
        Ok(())
    }
}
