use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator(label: Option<&'static str>) -> Element {
    rsx!(
        div { class: "min-h-screen flex flex-col items-center justify-center gap-4",
            span { class: "loading loading-spinner loading-lg" }
            if let Some(label) = label {
                p { class: "text-base-content/70",
                    "{label}"
                }
            }
        }
    )
}
