use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{
    components::{Page, ProductGrid},
    routes::categories::CategoryLinks,
    util::{ApiClient, Loaded},
};

/// Number of products featured on the home page
pub const FEATURED_COUNT: usize = 8;

#[component]
pub fn Home() -> Element {
    let api = use_context::<ApiClient>();

    let resource = use_resource(move || {
        let api = api.clone();
        async move { api.list_products(None).await }
    });
    let mut featured = Loaded::from_resource(&resource.read(), "featured products");
    featured.value.truncate(FEATURED_COUNT);

    rsx!(
        Title { "Storefront" }
        Meta {
            name: "description",
            content: "Browse the catalog, fill your cart, and check out."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] flex flex-col gap-8",
                div { class: "hero bg-base-200 rounded-box py-12",
                    div { class: "hero-content text-center flex-col",
                        h1 { class: "text-4xl font-bold",
                            "Welcome to the Storefront"
                        }
                        p {
                            "Fresh arrivals every week. Browse by category or jump straight into the full catalog."
                        }
                    }
                }
                CategoryLinks {}
                ProductGrid {
                    title: "Featured",
                    products: featured.value,
                    is_loading: featured.is_loading,
                }
            }
        }
    )
}
