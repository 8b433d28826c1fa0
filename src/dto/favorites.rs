use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Favorite;

/// A favorite must point at a product, an order, or both.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddFavoriteRequest {
    pub product_id: Option<i32>,
    pub order_id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FavoriteList {
    pub items: Vec<Favorite>,
}
