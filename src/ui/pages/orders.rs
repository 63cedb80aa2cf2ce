use std::rc::Rc;

use dioxus::prelude::*;
use tracing::warn;

use crate::{
    domain::{earnings_window, DashboardState},
    infra::{DownloadInitiator, PosClient},
    ui::components::{
        earnings_card::EarningsCard,
        order_table::{OrderRow, OrdersTable},
        spinner::Spinner,
    },
    util::format::format_money,
};

#[component]
pub fn OrdersPage() -> Element {
    let state = use_context::<Signal<DashboardState>>();
    let downloader = use_context::<Rc<dyn DownloadInitiator>>();

    let total_label = state.with(|st| format_money(st.total_earnings));
    let window = state.with(|st| earnings_window(&st.earnings_per_day));
    let fetch = state.with(|st| st.orders.clone());

    let rows: Vec<OrderRow> = fetch.orders.iter().map(OrderRow::from_rich_order).collect();

    let on_export = {
        let downloader = downloader.clone();
        move |_| match PosClient::from_env() {
            Ok(client) => match client.export_totals_url() {
                Ok(url) => downloader.trigger(url.as_str()),
                Err(err) => warn!("export URL could not be built: {err}"),
            },
            Err(err) => warn!("export skipped, API client unavailable: {err}"),
        }
    };

    rsx! {
        section { class: "orders-panel",
            h3 { class: "total-earnings", "Total Earnings: {total_label}" }

            div { class: "earnings-grid",
                for (day, amount) in window.into_iter().enumerate() {
                    EarningsCard { day, amount }
                }
            }

            div { class: "export-row",
                button { class: "btn-primary", onclick: on_export, "Export Sales YTD" }
            }

            div { class: "orders-list",
                // The previous page's error stays up while the next one
                // loads; heading and spinner can be visible together.
                if let Some(message) = fetch.error.as_ref() {
                    h4 { class: "fetch-error", "{message}" }
                }
                if fetch.is_loading() {
                    Spinner {}
                }
                OrdersTable { rows }
            }
        }
    }
}
