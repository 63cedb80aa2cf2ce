use dioxus::prelude::*;

use crate::domain::{items_label, RichOrder};
use crate::util::format::{format_date_placed, format_money};

/// One rendered line of the orders table.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderRow {
    pub order_id: i64,
    pub items: String,
    pub cancelled: bool,
    pub total: String,
    pub placed: String,
}

impl OrderRow {
    pub fn from_rich_order(order: &RichOrder) -> Self {
        Self {
            order_id: order.order_id,
            items: items_label(&order.order),
            cancelled: order.order.cancelled,
            total: format_money(order.total),
            placed: format_date_placed(order.order.created_at),
        }
    }
}

/// Rows render in the order they were fetched; the index is only a rendering
/// key, never an identity.
#[component]
pub fn OrdersTable(rows: Vec<OrderRow>) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        div { class: "table-panel",
            table { class: "orders-table",
                thead {
                    tr {
                        th { "#" }
                        th { "Purchased Items" }
                        th {}
                        th { "Total" }
                        th { "Date Placed" }
                    }
                }
                tbody {
                    for (i, row) in rows.into_iter().enumerate() {
                        tr { key: "{i}",
                            td { class: "order-id", "{row.order_id}" }
                            td { "{row.items}" }
                            td {
                                if row.cancelled {
                                    span { class: "badge-cancelled", "Cancelled" }
                                }
                            }
                            td { class: "order-total", "{row.total}" }
                            td { class: "order-placed", "{row.placed}" }
                        }
                    }
                    if is_empty {
                        tr {
                            td { class: "empty-row", colspan: "5", "No orders on this page yet." }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Order, Product, ProductType};
    use time::macros::datetime;

    fn rich_order(id: i64, cancelled: bool) -> RichOrder {
        let latte = Product {
            id: 1,
            name: "Latte".to_string(),
            price: "4.50".parse().unwrap(),
            kind: ProductType::Drink,
            discontinued: false,
            sold_out: false,
        };
        let order = Order {
            id,
            cancelled,
            created_at: datetime!(2024-06-01 09:30 UTC),
            products: vec![latte.clone(), latte],
        };
        RichOrder {
            order_id: id,
            total: order.total(),
            order,
        }
    }

    #[test]
    fn rows_preserve_fetch_order() {
        let fetched = vec![rich_order(5, false), rich_order(1, false)];
        let ids: Vec<i64> = fetched
            .iter()
            .map(OrderRow::from_rich_order)
            .map(|row| row.order_id)
            .collect();
        assert_eq!(ids, vec![5, 1]);
    }

    #[test]
    fn rows_carry_formatted_fields() {
        let row = OrderRow::from_rich_order(&rich_order(9, true));
        assert!(row.cancelled);
        assert_eq!(row.items, "2× Latte");
        assert_eq!(row.total, "$9.00");
        assert_eq!(row.placed, "Jun 01, 2024 09:30 AM");
    }

    #[test]
    fn row_count_matches_the_fetched_page() {
        let fetched: Vec<RichOrder> = (1..=7).map(|id| rich_order(id, false)).collect();
        let rows: Vec<OrderRow> = fetched.iter().map(OrderRow::from_rich_order).collect();
        assert_eq!(rows.len(), fetched.len());
    }
}
