use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Order;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub quantity_items: Option<i32>,
    pub date: Option<NaiveDate>,
    pub total: Option<f64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderRequest {
    pub quantity_items: Option<i32>,
    pub date: Option<NaiveDate>,
    pub total: Option<f64>,
}

impl UpdateOrderRequest {
    pub fn is_empty(&self) -> bool {
        self.quantity_items.is_none() && self.date.is_none() && self.total.is_none()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}
