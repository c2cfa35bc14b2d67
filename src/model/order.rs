use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::cart::CartState;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderLineDto {
    pub product_id: i64,
    pub quantity: u32,
}

/// Body of the request placing an order for the current cart
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub lines: Vec<OrderLineDto>,
}

impl From<&CartState> for OrderRequest {
    fn from(cart: &CartState) -> Self {
        Self {
            lines: cart
                .lines()
                .iter()
                .map(|line| OrderLineDto {
                    product_id: line.product.id,
                    quantity: line.quantity,
                })
                .collect(),
        }
    }
}

/// A placed order as confirmed by the API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    pub id: i64,
    pub total_cents: u64,
    pub placed_at: NaiveDateTime,
}
