use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaUser;
use dioxus_free_icons::Icon;

use crate::client::{
    components::StoreTitleButton,
    router::Route,
    store::{cart::Cart, session::Session},
};

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                StoreTitleButton {}
            }
            div {
                class: "navbar-center",
                Link {
                    to: Route::Categories {},
                    class: "btn btn-ghost",
                    "Categories"
                }
            }
            div {
                class: "navbar-end gap-2",
                CartButton {}
                AccountButton {}
            }
        }

        Outlet::<Route> {}
    }
}

#[component]
pub fn CartButton() -> Element {
    let cart = use_context::<Cart>();
    let count = cart.item_count();

    rsx!(
        Link {
            to: Route::Checkout {},
            class: "btn btn-ghost",
            "Cart"
            if count > 0 {
                span { class: "badge badge-primary badge-sm",
                    "{count}"
                }
            }
        }
    )
}

#[component]
pub fn AccountButton() -> Element {
    let session = use_context::<Session>();
    let state = session.state();

    rsx!(
        if state.is_authenticated() {
            Link {
                to: Route::Profile {},
                class: "btn btn-outline flex gap-2",
                Icon {
                    width: 16,
                    height: 16,
                    icon: FaUser
                }
                "Profile"
            }
        } else if !state.is_loading() {
            Link {
                to: Route::Auth {},
                class: "btn btn-primary",
                "Sign in"
            }
        }
    )
}
