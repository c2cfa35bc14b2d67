use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn AdminNavbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-300 min-h-12",
            div {
                class: "navbar-start",
                p { class: "text-lg font-semibold px-2",
                    "Back-office"
                }
            }
            div {
                class: "navbar-end gap-2",
                Link {
                    to: Route::AdminDashboard {},
                    class: "btn btn-ghost btn-sm",
                    "Dashboard"
                }
                Link {
                    to: Route::AdminProducts {},
                    class: "btn btn-ghost btn-sm",
                    "Products"
                }
            }
        }
    }
}
