use dioxus::prelude::*;

use crate::client::{
    components::admin::{AdminNavbar, AdminQuickNav},
    config::Config,
    router::Route,
};

/// Chrome around every admin page, only reachable through the authentication guard
#[component]
pub fn AdminLayout() -> Element {
    let config = use_context::<Config>();

    rsx! {
        div { class: "pt-[64px]",
            AdminNavbar {}
            if config.admin_quick_nav {
                AdminQuickNav {}
            }
            Outlet::<Route> {}
        }
    }
}
