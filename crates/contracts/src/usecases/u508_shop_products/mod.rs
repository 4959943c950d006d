//! U508: список товаров магазина и создание товара с SKU

pub mod request;
pub mod response;

pub use request::{CreateProductForm, PageRequest, ProductListQuery};
pub use response::{CreateProductResponse, ProductEntry, ProductListResponse, StatusOption};

/// Размер страницы списка товаров
pub const PAGE_SIZE: i64 = 5;

/// Корневой путь страницы; сюда же ведёт редирект без query string
pub const APP_ROOT: &str = "/app";

/// Fixed confirmation returned after a product is created
pub const PRODUCT_CREATED_MESSAGE: &str = "Product created successfully";
