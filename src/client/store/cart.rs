use dioxus::prelude::*;

use crate::model::{cart::CartState, product::ProductDto};

/// Handle to the shopping cart shared by every page through context
#[derive(Clone, Copy, PartialEq)]
pub struct Cart {
    state: Signal<CartState>,
}

impl Cart {
    pub fn new(state: Signal<CartState>) -> Self {
        Self { state }
    }

    /// Current cart contents, subscribing the calling component to changes
    pub fn snapshot(&self) -> CartState {
        self.state.read().clone()
    }

    pub fn item_count(&self) -> u32 {
        self.state.read().item_count()
    }

    pub fn add(&self, product: ProductDto, quantity: u32) {
        let mut state = self.state;
        state.write().add(product, quantity);
    }

    pub fn set_quantity(&self, product_id: i64, quantity: u32) {
        let mut state = self.state;
        state.write().set_quantity(product_id, quantity);
    }

    pub fn remove(&self, product_id: i64) {
        let mut state = self.state;
        state.write().remove(product_id);
    }

    pub fn clear(&self) {
        let mut state = self.state;
        state.write().clear();
    }
}
