pub mod auth_service;
pub mod favorite_service;
pub mod ingredient_service;
pub mod order_service;
pub mod product_service;
pub mod user_service;
