use dioxus::prelude::*;
use rust_decimal::Decimal;

use crate::domain::day_label;
use crate::util::format::format_money;

#[component]
pub fn EarningsCard(day: usize, amount: Decimal) -> Element {
    let label = day_label(day);
    let value = format_money(amount);
    rsx! {
        div { class: "earnings-card",
            h3 { class: "earnings-card-label", "{label}" }
            p { class: "earnings-card-value", "{value}" }
        }
    }
}
