use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMinus, FaPlus};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{LoadingIndicator, Page},
        router::Route,
        store::cart::Cart,
        util::ApiClient,
    },
    model::product::{format_price, ProductDto},
};

#[component]
pub fn ProductDetail(id: i64) -> Element {
    let api = use_context::<ApiClient>();

    let resource = use_resource(use_reactive!(|(id,)| {
        let api = api.clone();
        async move { api.get_product(id).await }
    }));

    let body = match &*resource.read() {
        None => rsx!(LoadingIndicator { label: "Loading product..." }),
        Some(Ok(product)) => rsx!(ProductSummary { product: product.clone() }),
        Some(Err(err)) if err.is_not_found() => rsx!(
            div { class: "flex flex-col items-center gap-4 pt-12",
                p { class: "text-xl", "This product is no longer available." }
                Link { to: Route::Categories {}, class: "btn btn-primary", "Browse categories" }
            }
        ),
        Some(Err(err)) => {
            tracing::error!("Failed to load product {}: {}", id, err);

            rsx!(
                div { class: "alert alert-error mt-12",
                    "Something went wrong loading this product, please try again."
                }
            )
        }
    };

    rsx!(
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1024px]",
                {body}
            }
        }
    )
}

#[component]
fn ProductSummary(product: ProductDto) -> Element {
    let cart = use_context::<Cart>();
    let mut quantity = use_signal(|| 1_u32);
    let price = format_price(product.price_cents);
    let item = product.clone();

    rsx!(
        Title { "{product.title} | Storefront" }
        div { class: "flex flex-col md:flex-row gap-8",
            img {
                class: "w-full md:w-1/2 rounded-box object-cover",
                src: "{product.image_url}",
                alt: "{product.title}",
            }
            div { class: "flex flex-col gap-4",
                h1 { class: "text-3xl font-semibold", "{product.title}" }
                Link {
                    to: Route::Category { name: product.category.clone() },
                    class: "link",
                    "{product.category}"
                }
                p { class: "text-2xl", "{price}" }
                div { class: "join",
                    button {
                        class: "btn join-item",
                        disabled: quantity() <= 1,
                        onclick: move |_| quantity -= 1,
                        Icon { width: 12, height: 12, icon: FaMinus }
                    }
                    span { class: "btn join-item no-animation", "{quantity}" }
                    button {
                        class: "btn join-item",
                        onclick: move |_| quantity += 1,
                        Icon { width: 12, height: 12, icon: FaPlus }
                    }
                }
                button {
                    class: "btn btn-primary w-48",
                    onclick: move |_| {
                        cart.add(item.clone(), quantity());
                        quantity.set(1);
                    },
                    "Add to cart"
                }
            }
        }
    )
}
