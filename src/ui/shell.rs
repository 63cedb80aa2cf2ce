use dioxus::prelude::*;

use crate::domain::{DashboardState, Tab};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<DashboardState>>();
    let current = state.with(|st| st.view.tab);
    let mut state_mut = state;

    rsx! {
        div { class: "app-frame",
            header { class: "app-bar",
                h1 { class: "app-title", "POS Admin" }
                nav { class: "tab-bar",
                    TabButton {
                        active: current == Tab::Orders,
                        label: Tab::Orders.label(),
                        onclick: move |_| state_mut.with_mut(|st| st.view.select_tab(Tab::Orders)),
                    }
                    TabButton {
                        active: current == Tab::Users,
                        label: Tab::Users.label(),
                        onclick: move |_| state_mut.with_mut(|st| st.view.select_tab(Tab::Users)),
                    }
                }
            }
            main { class: "app-main", {children} }
        }
    }
}

#[component]
fn TabButton(active: bool, label: &'static str, onclick: EventHandler<()>) -> Element {
    let class = if active { "tab-button active" } else { "tab-button" };
    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
