use std::collections::HashSet;

use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::Page,
        router::Route,
        util::{ApiClient, Loaded},
    },
    model::product::{format_price, ProductDto},
};

/// Figures shown on the admin dashboard
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogSummary {
    pub product_count: usize,
    pub category_count: usize,
    pub lowest_price_cents: Option<u64>,
    pub highest_price_cents: Option<u64>,
    /// Mean price rounded down to the cent
    pub average_price_cents: Option<u64>,
}

impl CatalogSummary {
    pub fn from_products(products: &[ProductDto]) -> Self {
        if products.is_empty() {
            return Self::default();
        }

        let categories: HashSet<&str> = products.iter().map(|p| p.category.as_str()).collect();
        let prices = products.iter().map(|p| p.price_cents);
        let total: u64 = prices.clone().sum();

        Self {
            product_count: products.len(),
            category_count: categories.len(),
            lowest_price_cents: prices.clone().min(),
            highest_price_cents: prices.max(),
            average_price_cents: Some(total / products.len() as u64),
        }
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    let api = use_context::<ApiClient>();

    let resource = use_resource(move || {
        let api = api.clone();
        async move { api.list_products(None).await }
    });
    let products = Loaded::from_resource(&resource.read(), "catalog");
    let summary = CatalogSummary::from_products(&products.value);

    let price = |cents: Option<u64>| cents.map(format_price).unwrap_or_else(|| "-".to_string());

    rsx!(
        Title { "Dashboard | Back-office" }
        Page { class: "flex flex-col items-center !pt-4",
            div { class: "w-full max-w-[1440px] flex flex-col gap-4",
                h1 { class: "text-3xl font-semibold", "Dashboard" }
                if products.is_loading {
                    div { class: "skeleton h-24 w-full" }
                } else {
                    div { class: "stats stats-vertical lg:stats-horizontal shadow",
                        SummaryStat { title: "Products", value: summary.product_count.to_string() }
                        SummaryStat { title: "Categories", value: summary.category_count.to_string() }
                        SummaryStat { title: "Lowest price", value: price(summary.lowest_price_cents) }
                        SummaryStat { title: "Average price", value: price(summary.average_price_cents) }
                        SummaryStat { title: "Highest price", value: price(summary.highest_price_cents) }
                    }
                }
                Link { to: Route::AdminProducts {}, class: "btn btn-primary w-48", "Manage products" }
            }
        }
    )
}

#[component]
fn SummaryStat(title: &'static str, value: String) -> Element {
    rsx!(
        div { class: "stat",
            div { class: "stat-title", "{title}" }
            div { class: "stat-value text-2xl", "{value}" }
        }
    )
}
