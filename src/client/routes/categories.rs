use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::Page,
        router::Route,
        util::{ApiClient, Loaded},
    },
    model::product::{CategoryDto, ALL_CATEGORY},
};

#[component]
pub fn Categories() -> Element {
    rsx!(
        Title { "Categories | Storefront" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] flex flex-col gap-4",
                h1 { class: "text-3xl font-semibold",
                    "Categories"
                }
                CategoryLinks {}
            }
        }
    )
}

/// Row of links to every category plus the whole catalog
#[component]
pub fn CategoryLinks() -> Element {
    let api = use_context::<ApiClient>();

    let resource = use_resource(move || {
        let api = api.clone();
        async move { api.list_categories().await }
    });
    let categories: Loaded<Vec<CategoryDto>> = Loaded::from_resource(&resource.read(), "categories");

    rsx!(
        ul { class: "flex flex-wrap gap-2",
            li {
                Link {
                    to: Route::Category { name: ALL_CATEGORY.to_string() },
                    class: "btn btn-outline",
                    "All products"
                }
            }
            if categories.is_loading {
                for index in 0..4 {
                    li { key: "skeleton-{index}",
                        div { class: "skeleton h-12 w-32" }
                    }
                }
            } else {
                for category in categories.value {
                    li { key: "{category.name}",
                        Link {
                            to: Route::Category { name: category.name.clone() },
                            class: "btn btn-outline",
                            "{category.name}"
                            span { class: "badge badge-ghost",
                                "{category.product_count}"
                            }
                        }
                    }
                }
            }
        }
    )
}
