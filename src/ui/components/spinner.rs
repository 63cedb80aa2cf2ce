use dioxus::prelude::*;

/// Indeterminate activity indicator shown while an orders page loads.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner-wrap",
            div { class: "spinner" }
        }
    }
}
