use dioxus::prelude::*;

use crate::{
    client::{
        config::Config,
        router::Route,
        store::{
            cart::Cart,
            session::{Session, SessionState},
        },
        util::ApiClient,
    },
    model::cart::CartState,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root component, provides the shared session, cart, and API client to every route
#[component]
pub fn App() -> Element {
    let config = use_context::<Config>();

    let api = use_context_provider(|| ApiClient::from_config(&config));
    let session_state = use_signal(|| SessionState::Loading);
    let session = use_context_provider(|| Session::new(session_state));
    let cart_state = use_signal(CartState::default);
    use_context_provider(|| Cart::new(cart_state));

    // Resolve the session once on startup, every guard waits on this single check
    use_future(move || {
        let api = api.clone();
        async move { session.resolve(api.get_session_user().await) }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
