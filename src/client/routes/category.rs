use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{Page, ProductGrid},
        util::{ApiClient, Loaded},
    },
    model::product::ALL_CATEGORY,
};

/// Heading shown above a category listing
pub fn category_title(name: &str) -> String {
    if name == ALL_CATEGORY {
        "All products".to_string()
    } else {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[component]
pub fn Category(name: String) -> Element {
    let api = use_context::<ApiClient>();
    let title = category_title(&name);

    let resource = use_resource(use_reactive!(|(name,)| {
        let api = api.clone();
        async move { api.list_products(Some(&name)).await }
    }));
    let products = Loaded::from_resource(&resource.read(), "category products");

    rsx!(
        Title { "{title} | Storefront" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px]",
                ProductGrid {
                    title: title.clone(),
                    products: products.value,
                    is_loading: products.is_loading,
                }
            }
        }
    )
}
