use dioxus::prelude::*;

use crate::{
    client::{router::Route, store::cart::Cart},
    model::product::{format_price, ProductDto},
};

#[component]
pub fn ProductCard(product: ProductDto) -> Element {
    let cart = use_context::<Cart>();
    let price = format_price(product.price_cents);
    let detail = Route::ProductDetail { id: product.id };
    let item = product.clone();

    rsx!(
        div { class: "card shadow-sm",
            Link { to: detail.clone(),
                figure {
                    img {
                        class: "h-48 w-full object-cover",
                        src: "{product.image_url}",
                        alt: "{product.title}",
                    }
                }
            }
            div { class: "card-body gap-2",
                Link { to: detail,
                    h3 { class: "card-title text-base",
                        "{product.title}"
                    }
                }
                p { class: "text-sm text-base-content/70",
                    "{product.category}"
                }
                div { class: "flex items-center justify-between mt-2",
                    span { class: "text-lg font-semibold",
                        "{price}"
                    }
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| cart.add(item.clone(), 1),
                        "Add to cart"
                    }
                }
            }
        }
    )
}
