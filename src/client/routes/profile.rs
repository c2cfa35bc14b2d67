use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaUser;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    components::Page,
    router::Route,
    store::{cart::Cart, session::Session},
    util::ApiClient,
};

#[component]
pub fn Profile() -> Element {
    let session = use_context::<Session>();
    let cart = use_context::<Cart>();
    let api = use_context::<ApiClient>();
    let nav = navigator();
    let mut signing_out = use_signal(|| false);

    let state = session.state();
    let Some(user) = state.user() else {
        // The guard only renders this page for a signed-in session
        return rsx!();
    };

    let sign_out = move |_: MouseEvent| {
        let api = api.clone();
        async move {
            signing_out.set(true);
            if let Err(err) = api.logout().await {
                tracing::error!("Failed to sign out: {}", err);
                signing_out.set(false);
                return;
            }

            cart.clear();
            session.sign_out();
            nav.replace(Route::Home {});
        }
    };

    rsx!(
        Title { "Profile | Storefront" }
        Page { class: "flex flex-col items-center",
            div { class: "card shadow-sm w-full max-w-96",
                div { class: "card-body items-center gap-2",
                    div { class: "avatar placeholder",
                        div { class: "bg-neutral text-neutral-content w-24 rounded-full",
                            Icon { width: 48, height: 48, icon: FaUser }
                        }
                    }
                    p { class: "text-lg font-semibold mt-2", "{user.name}" }
                    p { class: "text-base-content/70", "{user.email}" }
                    div { class: "flex gap-2 mt-4",
                        Link { to: Route::AdminDashboard {}, class: "btn btn-outline", "Back-office" }
                        button {
                            class: "btn btn-outline",
                            disabled: signing_out(),
                            onclick: sign_out,
                            "Sign out"
                        }
                    }
                }
            }
        }
    )
}
