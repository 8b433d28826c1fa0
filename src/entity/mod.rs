pub mod audit_logs;
pub mod favorites;
pub mod ingredients;
pub mod orders;
pub mod product_ingredients;
pub mod products;
pub mod users;

pub use audit_logs::Entity as AuditLogs;
pub use favorites::Entity as Favorites;
pub use ingredients::Entity as Ingredients;
pub use orders::Entity as Orders;
pub use product_ingredients::Entity as ProductIngredients;
pub use products::Entity as Products;
pub use users::Entity as Users;
