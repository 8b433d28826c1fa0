pub mod auth;
pub mod favorites;
pub mod ingredients;
pub mod orders;
pub mod products;
pub mod users;
