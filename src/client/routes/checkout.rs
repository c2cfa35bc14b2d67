use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrash;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::Page,
        router::Route,
        store::cart::Cart,
        util::ApiClient,
    },
    model::{
        cart::CartLine,
        order::{OrderDto, OrderRequest},
        product::{format_price, ALL_CATEGORY},
    },
};

#[component]
pub fn Checkout() -> Element {
    let cart = use_context::<Cart>();
    let api = use_context::<ApiClient>();
    let mut placed = use_signal(|| None::<OrderDto>);
    let mut submitting = use_signal(|| false);
    let mut failure = use_signal(|| None::<String>);

    let contents = cart.snapshot();
    let subtotal = format_price(contents.subtotal_cents());

    let place_order = move |_: MouseEvent| {
        let api = api.clone();
        async move {
            let request = OrderRequest::from(&cart.snapshot());
            submitting.set(true);
            failure.set(None);

            match api.place_order(&request).await {
                Ok(order) => {
                    tracing::info!("Placed order {}", order.id);
                    cart.clear();
                    placed.set(Some(order));
                }
                Err(err) => {
                    tracing::error!("Failed to place order: {}", err);
                    failure.set(Some(err.to_string()));
                }
            }

            submitting.set(false);
        }
    };

    if let Some(order) = placed() {
        let total = format_price(order.total_cents);
        let placed_at = order.placed_at.format("%Y-%m-%d %H:%M").to_string();

        return rsx!(
            Title { "Order placed | Storefront" }
            Page { class: "flex items-center justify-center",
                div { class: "card shadow-sm w-full max-w-96",
                    div { class: "card-body items-center gap-2",
                        h2 { class: "card-title", "Thank you for your order" }
                        p { "Order #{order.id} for {total}" }
                        p { class: "text-sm text-base-content/70", "Placed {placed_at} UTC" }
                        Link { to: Route::Home {}, class: "btn btn-primary mt-4", "Keep shopping" }
                    }
                }
            }
        );
    }

    rsx!(
        Title { "Checkout | Storefront" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1024px] flex flex-col gap-4",
                h1 { class: "text-3xl font-semibold", "Your cart" }
                if contents.is_empty() {
                    div { class: "flex flex-col items-start gap-4",
                        p { "Your cart is empty." }
                        Link {
                            to: Route::Category { name: ALL_CATEGORY.to_string() },
                            class: "btn btn-primary",
                            "Browse products"
                        }
                    }
                } else {
                    table { class: "table",
                        thead {
                            tr {
                                th { "Product" }
                                th { "Price" }
                                th { "Quantity" }
                                th { "Total" }
                                th {}
                            }
                        }
                        tbody {
                            for line in contents.lines() {
                                CartLineRow { key: "{line.product.id}", line: line.clone() }
                            }
                        }
                    }
                    div { class: "flex items-center justify-end gap-4",
                        p { class: "text-xl", "Subtotal: {subtotal}" }
                        button {
                            class: "btn btn-primary",
                            disabled: submitting(),
                            onclick: place_order,
                            "Place order"
                        }
                    }
                    if let Some(message) = failure() {
                        div { class: "alert alert-error", "{message}" }
                    }
                }
            }
        }
    )
}

#[component]
fn CartLineRow(line: CartLine) -> Element {
    let cart = use_context::<Cart>();
    let id = line.product.id;
    let quantity = line.quantity;
    let price = format_price(line.product.price_cents);
    let total = format_price(line.total_cents());

    rsx!(
        tr {
            td {
                Link { to: Route::ProductDetail { id }, "{line.product.title}" }
            }
            td { "{price}" }
            td {
                input {
                    class: "input input-sm w-20",
                    r#type: "number",
                    min: "0",
                    value: "{quantity}",
                    onchange: move |evt: FormEvent| {
                        if let Ok(quantity) = evt.value().parse::<u32>() {
                            cart.set_quantity(id, quantity);
                        }
                    },
                }
            }
            td { "{total}" }
            td {
                button {
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| cart.remove(id),
                    Icon { width: 14, height: 14, icon: FaTrash }
                }
            }
        }
    )
}
