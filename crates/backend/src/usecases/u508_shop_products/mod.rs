pub mod list_loader;
pub mod product_creator;

#[cfg(test)]
pub mod test_support;

pub use list_loader::ListLoader;
pub use product_creator::ProductCreator;
