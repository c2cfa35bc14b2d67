//! Tests for the product grid as fed by a page's fetch state.

use storefront::{
    client::{
        components::product_grid::{grid_slots, GridSlot, SKELETON_CARD_COUNT},
        error::ClientError,
        util::Loaded,
    },
    model::product::ProductDto,
};

fn product(id: i64, title: &str) -> ProductDto {
    ProductDto {
        id,
        title: title.to_string(),
        price_cents: 1_999,
        image_url: format!("/images/{}.png", id),
        category: "outdoor".to_string(),
    }
}

/// Tests a page whose fetch is still pending.
///
/// Verifies that the pending resource produces a loading flag and that the grid renders
/// the fixed skeleton count for it.
///
/// Expected: 8 skeleton slots
#[test]
fn pending_fetch_renders_skeletons() {
    let loaded = Loaded::<Vec<ProductDto>>::from_resource(&None, "products");

    let slots = grid_slots(&loaded.value, loaded.is_loading);

    assert_eq!(slots.len(), SKELETON_CARD_COUNT);
    assert!(slots.iter().all(|s| matches!(s, GridSlot::Skeleton(_))));
}

/// Tests a page whose fetch returned three products.
///
/// Verifies one card per product in the order returned, each keyed by product ID.
///
/// Expected: cards keyed "3", "1", "2"
#[test]
fn completed_fetch_renders_cards_in_order() {
    let fetched = vec![product(3, "Tent"), product(1, "Lantern"), product(2, "Stove")];
    let loaded = Loaded::from_resource(&Some(Ok(fetched)), "products");

    let slots = grid_slots(&loaded.value, loaded.is_loading);

    let keys: Vec<String> = slots.iter().map(GridSlot::key).collect();
    assert_eq!(keys, vec!["3", "1", "2"]);
    let titles: Vec<&str> = slots
        .iter()
        .map(|slot| match slot {
            GridSlot::Product(product) => product.title.as_str(),
            GridSlot::Skeleton(_) => panic!("no skeletons once loaded"),
        })
        .collect();
    assert_eq!(titles, vec!["Tent", "Lantern", "Stove"]);
}

/// Expect a failed fetch to render no cards rather than skeletons
#[test]
fn failed_fetch_renders_no_cards() {
    let loaded = Loaded::<Vec<ProductDto>>::from_resource(
        &Some(Err(ClientError::Status {
            status: 503,
            message: "Service unavailable".to_string(),
        })),
        "products",
    );

    assert!(grid_slots(&loaded.value, loaded.is_loading).is_empty());
}
