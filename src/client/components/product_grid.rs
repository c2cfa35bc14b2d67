//! Titled product grid with a loading fallback.
//!
//! The grid renders from its inputs only. While loading it shows a fixed number of skeleton
//! cards, since the size of the pending result is unknown.

use dioxus::prelude::*;

use crate::{
    client::{components::ProductCard, router::Route},
    model::product::{ProductDto, ALL_CATEGORY},
};

/// Number of skeleton cards shown while products are loading
pub const SKELETON_CARD_COUNT: usize = 8;

/// One cell of the grid
#[derive(Debug, PartialEq)]
pub enum GridSlot<'a> {
    Skeleton(usize),
    Product(&'a ProductDto),
}

impl GridSlot<'_> {
    /// Stable render key, product cells are keyed by product ID
    pub fn key(&self) -> String {
        match self {
            GridSlot::Skeleton(index) => format!("skeleton-{}", index),
            GridSlot::Product(product) => product.id.to_string(),
        }
    }
}

/// Cells to render for the given products and loading flag
pub fn grid_slots(products: &[ProductDto], is_loading: bool) -> Vec<GridSlot<'_>> {
    if is_loading {
        (0..SKELETON_CARD_COUNT).map(GridSlot::Skeleton).collect()
    } else {
        products.iter().map(GridSlot::Product).collect()
    }
}

/// Path listing the whole catalog
pub fn all_products_link() -> String {
    Route::Category {
        name: ALL_CATEGORY.to_string(),
    }
    .to_string()
}

#[component]
pub fn ProductGrid(
    title: String,
    products: Vec<ProductDto>,
    #[props(default)] is_loading: bool,
    #[props(default = all_products_link())] view_all_link: String,
    class: Option<String>,
) -> Element {
    let class = class.unwrap_or_default();

    let cards = grid_slots(&products, is_loading)
        .into_iter()
        .map(|slot| {
            let key = slot.key();
            match slot {
                GridSlot::Skeleton(_) => rsx!(SkeletonCard { key: "{key}" }),
                GridSlot::Product(product) => rsx!(ProductCard {
                    key: "{key}",
                    product: product.clone()
                }),
            }
        });

    rsx!(
        section { class: "flex flex-col gap-4 w-full {class}",
            div { class: "flex items-center justify-between",
                h2 { class: "text-2xl font-semibold",
                    "{title}"
                }
                Link {
                    to: view_all_link,
                    class: "link link-primary",
                    "View all"
                }
            }
            div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4",
                {cards}
            }
        }
    )
}

/// Placeholder shaped like a product card
#[component]
pub fn SkeletonCard() -> Element {
    rsx!(
        div { class: "card shadow-sm",
            div { class: "skeleton h-48 w-full rounded-b-none" }
            div { class: "card-body gap-2",
                div { class: "skeleton h-4 w-3/4" }
                div { class: "skeleton h-4 w-1/2" }
                div { class: "flex items-center justify-between mt-2",
                    div { class: "skeleton h-6 w-16" }
                    div { class: "skeleton h-8 w-24" }
                }
            }
        }
    )
}
