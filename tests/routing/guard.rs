//! Tests for protected route handling across the whole route table.
//!
//! These render the real router with an in-memory history, so a route that slips out of the
//! `Protected` layout shows up as a visit that is no longer redirected.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_history::{History, MemoryHistory};
use storefront::{
    client::{
        components::guard::GuardDecision,
        config::Config,
        router::Route,
        store::{
            cart::Cart,
            session::{Session, SessionState},
        },
        util::ApiClient,
    },
    model::{cart::CartState, user::UserDto},
};

const PROTECTED_PATHS: [&str; 4] = ["/checkout", "/profile", "/admin", "/admin/products"];

const PUBLIC_PATHS: [&str; 7] = [
    "/",
    "/auth",
    "/categories",
    "/category/all",
    "/category/shoes",
    "/product/5",
    "/no/such/page",
];

fn user() -> UserDto {
    UserDto {
        id: 1,
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
    }
}

fn route(path: &str) -> Route {
    path.parse::<Route>()
        .unwrap_or_else(|_| panic!("{} should parse to a route", path))
}

/// App root for rendering, with the session fixed to the state found in the root context
#[component]
fn StorefrontShell() -> Element {
    let initial = use_context::<SessionState>();
    let session_state = use_signal(move || initial);
    use_context_provider(|| Session::new(session_state));
    let cart_state = use_signal(CartState::default);
    use_context_provider(|| Cart::new(cart_state));
    use_context_provider(|| ApiClient::new("/api"));
    use_context_provider(Config::default);

    rsx!(Router::<Route> {})
}

/// Renders the app at `path` with the given session and returns the history afterwards
fn visit(path: &str, state: SessionState) -> Rc<MemoryHistory> {
    let history = Rc::new(MemoryHistory::with_initial_path(path));

    let mut dom = VirtualDom::new(StorefrontShell)
        .with_root_context(history.clone() as Rc<dyn History>)
        .with_root_context(state);
    dom.rebuild_in_place();

    history
}

/// Tests anonymous visits to every protected path.
///
/// Verifies that the rendered guard navigates to `/auth` and replaces the history entry, so
/// the protected path cannot be reached again with Back.
///
/// Expected: current route `/auth` and no back entry for every protected path
#[test]
fn anonymous_visit_to_protected_path_redirects_to_auth() {
    for path in PROTECTED_PATHS {
        let history = visit(path, SessionState::Anonymous);

        assert_eq!(history.current_route(), "/auth", "{} should redirect", path);
        assert!(!history.can_go_back(), "{} should be replaced in history", path);
    }
}

/// Tests anonymous visits to every public path.
///
/// Verifies that only routes inside the guard redirect, and that `Route::is_protected`
/// agrees with the rendered behavior for the whole table.
///
/// Expected: every public path stays where it is
#[test]
fn anonymous_visit_to_public_path_stays() {
    for path in PUBLIC_PATHS {
        assert!(!route(path).is_protected(), "{} should be public", path);

        let history = visit(path, SessionState::Anonymous);

        assert_eq!(history.current_route(), path, "{} should not redirect", path);
    }

    for path in PROTECTED_PATHS {
        assert!(route(path).is_protected(), "{} should be protected", path);
    }
}

/// Expect a pending session check to hold every protected path without redirecting
#[test]
fn loading_session_holds_protected_path() {
    for path in PROTECTED_PATHS {
        let history = visit(path, SessionState::Loading);

        assert_eq!(history.current_route(), path, "{} should wait", path);
    }
}

/// Expect a signed-in visitor to stay on every protected path
#[test]
fn authenticated_visit_to_protected_path_renders() {
    for path in PROTECTED_PATHS {
        let history = visit(path, SessionState::Authenticated(user()));

        assert_eq!(history.current_route(), path, "{} should render", path);
    }
}

/// Tests signing in after being turned away from the admin products page.
///
/// Verifies the redirect for an anonymous visit to `/admin/products`, then that visiting the
/// same path again with a signed-in session renders it.
///
/// Expected: `/auth`, then `/admin/products`
#[test]
fn admin_products_redirects_then_renders_after_sign_in() {
    let history = visit("/admin/products", SessionState::Anonymous);
    assert_eq!(history.current_route(), "/auth");

    let history = visit("/admin/products", SessionState::Authenticated(user()));
    assert_eq!(history.current_route(), "/admin/products");
    assert_eq!(route("/admin/products"), Route::AdminProducts {});
}

/// Tests navigation while the session check is running.
///
/// Verifies that every guard reading the same pending session waits, and that all of them
/// settle on one decision once the session resolves.
///
/// Expected: Pending for every path, then one shared settled decision
#[test]
fn concurrent_navigation_waits_and_settles_consistently() {
    let mut state = SessionState::Loading;

    let pending: Vec<GuardDecision> = PROTECTED_PATHS
        .iter()
        .map(|_| GuardDecision::evaluate(&state))
        .collect();
    assert!(pending.iter().all(|d| *d == GuardDecision::Pending));

    for settled in [SessionState::Anonymous, SessionState::Authenticated(user())] {
        state = settled;
        let decisions: Vec<GuardDecision> = PROTECTED_PATHS
            .iter()
            .map(|_| GuardDecision::evaluate(&state))
            .collect();

        assert!(decisions.windows(2).all(|pair| pair[0] == pair[1]));
        assert_ne!(decisions[0], GuardDecision::Pending);
    }
}

/// Expect a parameterized path to carry its parameter into the route
#[test]
fn parameterized_route_keeps_parameters() {
    assert_eq!(route("/product/5"), Route::ProductDetail { id: 5 });
}
