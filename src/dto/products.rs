use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{IngredientLine, Product};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductList {
    pub items: Vec<Product>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AttachIngredientRequest {
    pub ingredient_id: Option<i32>,
    pub quantity: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductIngredientList {
    pub items: Vec<IngredientLine>,
}
