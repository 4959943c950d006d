pub mod u508_shop_products;
