//! Authentication guard for protected routes.
//!
//! The guard is a layout wrapping every protected route. It owns no state: each render reads
//! the shared [`Session`] and decides between waiting, redirecting to the sign-in page, or
//! rendering the routed page. The redirect replaces the current history entry so the guarded
//! path is not left behind in back navigation.

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use crate::client::{
    components::LoadingIndicator,
    router::Route,
    store::session::{Session, SessionState},
};

/// What a protected route should do for a given session state
#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    /// The session check is still running, show a loading indicator
    Pending,
    /// Navigate to the contained route, replacing history
    Redirect(Route),
    /// Render the protected page
    Render,
}

impl GuardDecision {
    pub fn evaluate(state: &SessionState) -> Self {
        match state {
            SessionState::Loading => GuardDecision::Pending,
            SessionState::Anonymous => GuardDecision::Redirect(Route::Auth {}),
            SessionState::Authenticated(_) => GuardDecision::Render,
        }
    }
}

#[component]
pub fn Protected() -> Element {
    let session = use_context::<Session>();
    let nav = navigator();
    let route = use_route::<Route>();

    match GuardDecision::evaluate(&session.state()) {
        GuardDecision::Pending => rsx!(LoadingIndicator {
            label: "Checking your session..."
        }),
        GuardDecision::Redirect(target) => {
            debug!("Redirecting anonymous visitor from {} to {}", route, target);
            nav.replace(target);

            rsx!()
        }
        GuardDecision::Render => rsx!(Outlet::<Route> {}),
    }
}
