//! Response shapes. Entities serialize in two tiers: a shallow form with
//! the row's own scalars, and a detail form that embeds one hop of the
//! product/ingredient association as terminal line items. The line shapes
//! never embed further, so the mutual Product<->Ingredient nesting cannot
//! recurse.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity;

/// Public view of a user. The password hash never leaves the storage layer.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub full_name: String,
    pub telephone: String,
    pub address: String,
    pub email: String,
    pub registration_date: DateTime<FixedOffset>,
    pub is_active: bool,
}

impl From<entity::users::Model> for User {
    fn from(m: entity::users::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            full_name: m.full_name,
            telephone: m.telephone,
            address: m.address,
            email: m.email,
            registration_date: m.registration_date,
            is_active: m.is_active,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl From<entity::products::Model> for Product {
    fn from(m: entity::products::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            price: m.price,
        }
    }
}

/// One association line as seen from the product side.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IngredientLine {
    pub ingredient_id: i32,
    pub name: String,
    pub quantity: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductWithIngredients {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub ingredients: Vec<IngredientLine>,
}

impl ProductWithIngredients {
    pub fn new(m: entity::products::Model, ingredients: Vec<IngredientLine>) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            price: m.price,
            ingredients,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: i32,
    pub name: String,
}

impl From<entity::ingredients::Model> for Ingredient {
    fn from(m: entity::ingredients::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
        }
    }
}

/// One association line as seen from the ingredient side.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductLine {
    pub product_id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IngredientWithProducts {
    pub id: i32,
    pub name: String,
    pub products: Vec<ProductLine>,
}

impl IngredientWithProducts {
    pub fn new(m: entity::ingredients::Model, products: Vec<ProductLine>) -> Self {
        Self {
            id: m.id,
            name: m.name,
            products,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: i32,
    pub quantity_items: i32,
    pub customer_id: i32,
    pub date: NaiveDate,
    pub total: f64,
}

impl From<entity::orders::Model> for Order {
    fn from(m: entity::orders::Model) -> Self {
        Self {
            id: m.id,
            quantity_items: m.quantity_items,
            customer_id: m.customer_id,
            date: m.date,
            total: m.total,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub product_id: Option<i32>,
    pub order_id: Option<i32>,
}

impl From<entity::favorites::Model> for Favorite {
    fn from(m: entity::favorites::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            product_id: m.product_id,
            order_id: m.order_id,
        }
    }
}
