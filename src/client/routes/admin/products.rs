use std::collections::HashSet;

use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrash;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::Page,
        router::Route,
        util::{ApiClient, Loaded},
    },
    model::product::{format_price, ProductDto},
};

/// Products whose title or category contains the query, ignoring case
///
/// A blank query matches everything.
pub fn filter_products<'a>(products: &'a [ProductDto], query: &str) -> Vec<&'a ProductDto> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return products.iter().collect();
    }

    products
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&query) || p.category.to_lowercase().contains(&query)
        })
        .collect()
}

#[component]
pub fn AdminProducts() -> Element {
    let api = use_context::<ApiClient>();
    let mut query = use_signal(String::new);
    let deleted = use_signal(HashSet::<i64>::new);

    let list_api = api.clone();
    let resource = use_resource(move || {
        let api = list_api.clone();
        async move { api.list_products(None).await }
    });
    let products = Loaded::from_resource(&resource.read(), "admin products");

    let deleted_ids = deleted.read();
    let remaining: Vec<ProductDto> = products
        .value
        .into_iter()
        .filter(|p| !deleted_ids.contains(&p.id))
        .collect();
    let visible = filter_products(&remaining, &query.read());

    rsx!(
        Title { "Products | Back-office" }
        Page { class: "flex flex-col items-center !pt-4",
            div { class: "w-full max-w-[1440px] flex flex-col gap-4",
                div { class: "flex items-center justify-between gap-4",
                    h1 { class: "text-3xl font-semibold", "Products" }
                    input {
                        class: "input input-bordered w-64",
                        placeholder: "Search by title or category",
                        value: "{query}",
                        oninput: move |evt: FormEvent| query.set(evt.value()),
                    }
                }
                if products.is_loading {
                    for index in 0..5 {
                        div { key: "skeleton-{index}", class: "skeleton h-10 w-full" }
                    }
                } else if visible.is_empty() {
                    p { class: "text-base-content/70", "No products match." }
                } else {
                    table { class: "table",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Title" }
                                th { "Category" }
                                th { "Price" }
                                th {}
                            }
                        }
                        tbody {
                            for product in visible {
                                ProductRow {
                                    key: "{product.id}",
                                    product: product.clone(),
                                    deleted: deleted,
                                    api: api.clone(),
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn ProductRow(product: ProductDto, deleted: Signal<HashSet<i64>>, api: ApiClient) -> Element {
    let mut deleted = deleted;
    let mut deleting = use_signal(|| false);
    let id = product.id;
    let price = format_price(product.price_cents);

    let delete = move |_: MouseEvent| {
        let api = api.clone();
        async move {
            deleting.set(true);
            match api.delete_product(id).await {
                Ok(()) => {
                    tracing::info!("Deleted product {}", id);
                    deleted.write().insert(id);
                }
                Err(err) => {
                    tracing::error!("Failed to delete product {}: {}", id, err);
                }
            }
            deleting.set(false);
        }
    };

    rsx!(
        tr {
            td { "{id}" }
            td {
                Link { to: Route::ProductDetail { id }, "{product.title}" }
            }
            td { "{product.category}" }
            td { "{price}" }
            td {
                button {
                    class: "btn btn-ghost btn-sm text-error",
                    disabled: deleting(),
                    onclick: delete,
                    Icon { width: 14, height: 14, icon: FaTrash }
                }
            }
        }
    )
}
