#![allow(dead_code)]

use rust_decimal::Decimal;

use super::entities::RichOrder;

/// Which panel the dashboard shows. Stored locally only; tab selection is
/// never reflected in a URL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Orders,
    Users,
}

impl Tab {
    pub fn index(self) -> usize {
        match self {
            Tab::Orders => 0,
            Tab::Users => 1,
        }
    }

    /// Only 0 and 1 have defined rendering; everything else is rejected.
    pub fn from_index(index: usize) -> Option<Tab> {
        match index {
            0 => Some(Tab::Orders),
            1 => Some(Tab::Users),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Orders => "Orders",
            Tab::Users => "Users",
        }
    }
}

/// The two fields that fully determine what the dashboard renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewState {
    /// 1-based page of the orders list.
    pub page: u32,
    pub tab: Tab,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: 1,
            tab: Tab::default(),
        }
    }
}

impl ViewState {
    /// Replaces the tab. The page is untouched, so the orders fetch (which
    /// keys on `page` alone) is not re-triggered.
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Moves to a new 1-based page. Zero is not a page; it is ignored.
    pub fn set_page(&mut self, page: u32) {
        if page >= 1 {
            self.page = page;
        }
    }
}

/// Fetch lifecycle of the orders collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

/// Bookkeeping for the order-list fetch: status, current rows and the last
/// error message. `begin` deliberately leaves a previous error in place, so
/// the error heading stays visible while the next page loads; the panel can
/// show both at once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrdersFetch {
    pub status: FetchStatus,
    pub orders: Vec<RichOrder>,
    pub error: Option<String>,
}

impl OrdersFetch {
    pub fn begin(&mut self) {
        self.status = FetchStatus::Loading;
    }

    pub fn resolve(&mut self, orders: Vec<RichOrder>) {
        self.status = FetchStatus::Loaded;
        self.orders = orders;
        self.error = None;
    }

    /// Keeps whatever rows were loaded before; the table renders them under
    /// the error heading.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = FetchStatus::Error;
        self.error = Some(message.into());
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }
}

/// Monotonic tags for in-flight order requests. A response may only be
/// applied if its tag is still the latest one issued; anything older is a
/// stale page and gets dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestLedger {
    latest: u64,
}

impl RequestLedger {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, tag: u64) -> bool {
        tag == self.latest
    }
}

/// Everything the dashboard holds between renders. All fetched values are
/// snapshots replaced wholesale by the next fetch.
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub view: ViewState,
    pub orders: OrdersFetch,
    pub earnings_per_day: Vec<Decimal>,
    pub total_earnings: Decimal,
    pub order_requests: RequestLedger,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_of_orders_tab() {
        let view = ViewState::default();
        assert_eq!(view.page, 1);
        assert_eq!(view.tab, Tab::Orders);
    }

    #[test]
    fn select_tab_leaves_page_alone() {
        let mut view = ViewState::default();
        view.set_page(4);
        view.select_tab(Tab::Users);
        assert_eq!(view.page, 4);
        assert_eq!(view.tab, Tab::Users);
    }

    #[test]
    fn set_page_rejects_zero() {
        let mut view = ViewState::default();
        view.set_page(0);
        assert_eq!(view.page, 1);
        view.set_page(9);
        assert_eq!(view.page, 9);
    }

    #[test]
    fn tab_indices_round_trip_and_reject_the_rest() {
        assert_eq!(Tab::from_index(0), Some(Tab::Orders));
        assert_eq!(Tab::from_index(1), Some(Tab::Users));
        assert_eq!(Tab::from_index(2), None);
        assert_eq!(Tab::Users.index(), 1);
    }

    #[test]
    fn begin_keeps_the_previous_error_visible() {
        let mut fetch = OrdersFetch::default();
        fetch.fail("orders are unavailable");
        fetch.begin();
        assert!(fetch.is_loading());
        assert_eq!(fetch.error.as_deref(), Some("orders are unavailable"));
    }

    #[test]
    fn resolve_clears_error_and_replaces_rows() {
        let mut fetch = OrdersFetch::default();
        fetch.fail("boom");
        fetch.begin();
        fetch.resolve(Vec::new());
        assert_eq!(fetch.status, FetchStatus::Loaded);
        assert!(fetch.error.is_none());
    }

    #[test]
    fn ledger_issues_one_tag_per_request_and_outdates_older_ones() {
        let mut ledger = RequestLedger::default();
        let first = ledger.begin();
        assert!(ledger.is_current(first));

        let second = ledger.begin();
        assert!(ledger.is_current(second));
        assert!(!ledger.is_current(first));
    }
}
