use std::sync::Arc;

use axum::{routing::get, Router};
use contracts::usecases::u508_shop_products::APP_ROOT;

use crate::handlers;
use crate::system::auth::Authenticator;

/// Состояние, общее для всех обработчиков
#[derive(Clone)]
pub struct AppState {
    pub authenticator: Arc<dyn Authenticator>,
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // U508 Shop products page
        .route(
            APP_ROOT,
            get(handlers::u508_shop_products::list_products)
                .post(handlers::u508_shop_products::create_product),
        )
        .with_state(state)
}
