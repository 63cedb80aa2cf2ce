//! Domain model and view-state logic for the admin dashboard.

pub mod aggregation;
pub mod entities;
pub mod view_state;

#[allow(unused_imports)]
pub use aggregation::{
    day_label, earnings_window, items_label, line_items, LineItem, EARNINGS_WINDOW_DAYS,
};
#[allow(unused_imports)]
pub use entities::{
    Order, Product, ProductAggregate, ProductMap, ProductType, RichOrder, Station,
};
#[allow(unused_imports)]
pub use view_state::{
    DashboardState, FetchStatus, OrdersFetch, RequestLedger, Tab, ViewState,
};
