use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, error, warn};

use crate::{
    domain::{DashboardState, Tab},
    infra::{DownloadInitiator, PosClient, WebviewDownloader},
    ui::{
        pages::{OrdersPage, UsersPage},
        shell::Shell,
    },
    util::assets,
};

#[component]
pub fn App() -> Element {
    let state = use_signal(DashboardState::default);
    use_context_provider(|| state);
    use_context_provider(|| Rc::new(WebviewDownloader) as Rc<dyn DownloadInitiator>);

    // The orders resource keys on this memo alone, so a tab flip (or any
    // other state write) never re-triggers the fetch; only a page change
    // does.
    let page = use_memo(move || state.with(|st| st.view.page));

    let _orders = use_resource(move || async move { fetch_orders(state, page()).await });
    let _earnings_per_day =
        use_resource(move || async move { fetch_earnings_per_day(state).await });
    let _total_earnings = use_resource(move || async move { fetch_total_earnings(state).await });

    let tab = state.with(|st| st.view.tab);

    rsx! {
        document::Style { "{assets::main_css()}" }
        Shell {
            if tab == Tab::Orders {
                OrdersPage {}
            } else {
                UsersPage {}
            }
        }
    }
}

/// Loads one page of orders. Each call draws a fresh request tag; a response
/// is dropped unless its tag is still the latest, so a slow page can never
/// overwrite a newer one.
async fn fetch_orders(mut state: Signal<DashboardState>, page: u32) {
    let tag = state.with_mut(|st| {
        st.orders.begin();
        st.order_requests.begin()
    });

    let client = match PosClient::from_env() {
        Ok(client) => client,
        Err(err) => {
            error!("POS API client unavailable: {err}");
            state.with_mut(|st| {
                if st.order_requests.is_current(tag) {
                    st.orders.fail("Could not reach the order service.");
                }
            });
            return;
        }
    };

    match client.get_orders(page).await {
        Ok(orders) => state.with_mut(|st| {
            if st.order_requests.is_current(tag) {
                debug!(page, count = orders.len(), "orders page loaded");
                st.orders.resolve(orders);
            } else {
                debug!(page, "discarding stale orders response");
            }
        }),
        Err(err) => {
            warn!(page, "orders fetch failed: {err}");
            state.with_mut(|st| {
                if st.order_requests.is_current(tag) {
                    st.orders.fail(err.to_string());
                }
            });
        }
    }
}

/// Earnings have no error channel: a failed fetch leaves the zeros in place
/// and is indistinguishable from a day without sales.
async fn fetch_earnings_per_day(mut state: Signal<DashboardState>) {
    let client = match PosClient::from_env() {
        Ok(client) => client,
        Err(err) => {
            warn!("per-day earnings skipped, API client unavailable: {err}");
            return;
        }
    };

    match client.get_earnings_per_day().await {
        Ok(per_day) => state.with_mut(|st| st.earnings_per_day = per_day),
        Err(err) => warn!("per-day earnings fetch failed: {err}"),
    }
}

async fn fetch_total_earnings(mut state: Signal<DashboardState>) {
    let client = match PosClient::from_env() {
        Ok(client) => client,
        Err(err) => {
            warn!("total earnings skipped, API client unavailable: {err}");
            return;
        }
    };

    match client.get_total_earnings().await {
        Ok(total) => state.with_mut(|st| st.total_earnings = total),
        Err(err) => warn!("total earnings fetch failed: {err}"),
    }
}
