use std::sync::Arc;

use contracts::usecases::u508_shop_products::{
    ProductEntry, ProductListQuery, ProductListResponse, StatusOption, APP_ROOT, PAGE_SIZE,
};

use crate::shared::shopify::queries::{ListProductsVariables, LIST_PRODUCTS};
use crate::shared::shopify::types::ListProductsData;
use crate::shared::shopify::{execute, ShopifyAdminApi, ShopifyError};

/// Загрузка одной страницы товаров
pub struct ListLoader {
    admin: Arc<dyn ShopifyAdminApi>,
}

impl ListLoader {
    pub fn new(admin: Arc<dyn ShopifyAdminApi>) -> Self {
        Self { admin }
    }

    /// Один запрос `ListProducts`; флаги и курсоры страницы возвращаются
    /// как есть. Ошибки Admin API не обрабатываются, а пробрасываются.
    pub async fn load(&self, query: &ProductListQuery) -> Result<ProductListResponse, ShopifyError> {
        let page = query.page_request();
        let variables = ListProductsVariables::for_page(&page, PAGE_SIZE);
        tracing::debug!("Loading products page: {:?}", page);

        let data: ListProductsData = execute(self.admin.as_ref(), LIST_PRODUCTS, &variables).await?;
        Ok(into_list_response(data))
    }
}

fn into_list_response(data: ListProductsData) -> ProductListResponse {
    let connection = data.products;

    let products = connection
        .edges
        .into_iter()
        .map(|edge| {
            let node = edge.node;
            let sku = node
                .variants
                .edges
                .into_iter()
                .next()
                .and_then(|variant| variant.node.sku)
                .unwrap_or_default();

            ProductEntry {
                id: node.id,
                title: node.title,
                status: node.status,
                sku,
            }
        })
        .collect();

    ProductListResponse {
        products,
        has_next_page: connection.page_info.has_next_page,
        has_previous_page: connection.page_info.has_previous_page,
        next_cursor: connection.page_info.end_cursor,
        prev_cursor: connection.page_info.start_cursor,
        status_options: StatusOption::all(),
    }
}

/// Куда перенаправить запрос после загрузки страницы.
///
/// Нет предыдущей страницы, а в запросе был курсор: это первая страница,
/// её канонический адрес: корень без query string. Запрос без курсора
/// уже находится в корне и не перенаправляется.
pub fn redirect_target(
    query: &ProductListQuery,
    page: &ProductListResponse,
) -> Option<&'static str> {
    if !page.has_previous_page && query.has_cursor() {
        Some(APP_ROOT)
    } else {
        None
    }
}
