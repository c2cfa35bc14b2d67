use dioxus::prelude::*;

use crate::client::router::Route;

/// Version label shown next to the store name, taken from the package version
pub fn version_label() -> String {
    format!("v{}", env!("CARGO_PKG_VERSION"))
}

#[component]
pub fn StoreTitleButton() -> Element {
    let version = version_label();

    rsx!(
        Link {
            to: Route::Home {},
            div { class: "flex items-center gap-2",
                p { class: "text-xl",
                    "Storefront"
                }
                p { class: "text-xs",
                    "{version}"
                }
            }
        }
    )
}
