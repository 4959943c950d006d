use axum::{
    extract::{rejection::FormRejection, Query},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use contracts::usecases::u508_shop_products::{
    CreateProductForm, CreateProductResponse, ProductListQuery,
};

use crate::system::auth::AdminContext;
use crate::usecases::u508_shop_products::{list_loader, ListLoader, ProductCreator};

/// GET /app?after=...&before=...
pub async fn list_products(
    AdminContext(admin): AdminContext,
    Query(query): Query<ProductListQuery>,
) -> Result<Response, StatusCode> {
    let page = match ListLoader::new(admin).load(&query).await {
        Ok(page) => page,
        Err(e) => {
            tracing::error!("Failed to load products: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    if let Some(target) = list_loader::redirect_target(&query, &page) {
        return Ok(Redirect::to(target).into_response());
    }

    Ok(Json(page).into_response())
}

/// POST /app (form: title, status, sku)
///
/// Неразобранное тело формы тоже отвечает `{ "error" }`, а не текстом axum.
pub async fn create_product(
    AdminContext(admin): AdminContext,
    form: Result<Form<CreateProductForm>, FormRejection>,
) -> Json<CreateProductResponse> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::warn!("Rejected product form body: {}", rejection);
            return Json(CreateProductResponse::error(rejection.body_text()));
        }
    };

    Json(ProductCreator::new(admin).submit(form).await)
}
