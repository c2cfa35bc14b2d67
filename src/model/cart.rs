//! Shopping cart contents.
//!
//! The cart is a plain value owned by the client-side cart store; all mutation rules live
//! here so they can be exercised without a running UI.

use serde::{Deserialize, Serialize};

use crate::model::product::ProductDto;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: ProductDto,
    pub quantity: u32,
}

impl CartLine {
    /// Price of the line, unit price multiplied by quantity, saturating at `u64::MAX`
    pub fn total_cents(&self) -> u64 {
        self.product.price_cents.saturating_mul(u64::from(self.quantity))
    }
}

/// Ordered cart lines, one per distinct product ID
///
/// Lines keep the order in which their product was first added.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    lines: Vec<CartLine>,
}

impl CartState {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds `quantity` units of a product, merging into an existing line for the same product
    pub fn add(&mut self, product: ProductDto, quantity: u32) {
        if quantity == 0 {
            return;
        }

        match self.lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine { product, quantity }),
        }
    }

    /// Sets the quantity of a line, a quantity of zero removes it
    pub fn set_quantity(&mut self, product_id: i64, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product_id)
        {
            line.quantity = quantity;
        }
    }

    pub fn remove(&mut self, product_id: i64) {
        self.lines.retain(|line| line.product.id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0_u32, |count, line| count.saturating_add(line.quantity))
    }

    pub fn subtotal_cents(&self) -> u64 {
        self.lines
            .iter()
            .fold(0_u64, |total, line| total.saturating_add(line.total_cents()))
    }
}
