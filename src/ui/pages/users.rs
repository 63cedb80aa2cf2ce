use dioxus::prelude::*;

/// Placeholder panel; station and user management render here eventually.
#[component]
pub fn UsersPage() -> Element {
    rsx! {
        div { class: "users-panel", "Hello" }
    }
}
