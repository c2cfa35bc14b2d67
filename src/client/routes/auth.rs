use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{
    components::{LoadingIndicator, Page},
    router::Route,
    store::session::{Session, SessionState},
    util::ApiClient,
};

/// Sign-in page, the redirect target of every protected route
///
/// Signing in is a full page load through the API's login flow. A visitor who is already
/// signed in is sent home, replacing this entry in history.
#[component]
pub fn Auth() -> Element {
    let session = use_context::<Session>();
    let api = use_context::<ApiClient>();
    let nav = navigator();

    match session.state() {
        SessionState::Loading => rsx!(LoadingIndicator {}),
        SessionState::Authenticated(_) => {
            nav.replace(Route::Home {});
            rsx!()
        }
        SessionState::Anonymous => rsx!(
            Title { "Sign in | Storefront" }
            Meta {
                name: "description",
                content: "Sign in to check out and manage your account."
            }
            Page { class: "flex items-center justify-center",
                div { class: "card shadow-sm w-full max-w-96",
                    div { class: "card-body items-center gap-4",
                        h2 { class: "card-title",
                            "Sign in"
                        }
                        p { class: "text-center",
                            "Sign in to check out, view your profile, or open the back-office."
                        }
                        a { href: api.login_url(),
                            button { class: "btn btn-primary w-48",
                                "Continue to sign in"
                            }
                        }
                    }
                }
            }
        ),
    }
}
