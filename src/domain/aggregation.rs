use rust_decimal::Decimal;

use super::entities::Order;

/// The earnings strip always shows this many days, newest first.
pub const EARNINGS_WINDOW_DAYS: usize = 4;

/// Projects the per-day earnings sequence onto the fixed card window. The
/// collaborator promises at least four entries but is not trusted on it:
/// missing days read as zero, extra days are ignored.
pub fn earnings_window(per_day: &[Decimal]) -> [Decimal; EARNINGS_WINDOW_DAYS] {
    let mut window = [Decimal::ZERO; EARNINGS_WINDOW_DAYS];
    for (slot, value) in window.iter_mut().zip(per_day) {
        *slot = *value;
    }
    window
}

pub fn day_label(day: usize) -> String {
    match day {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        n => format!("{n} days ago"),
    }
}

/// One aggregated purchase line within an order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineItem {
    pub name: String,
    pub amount: u32,
}

/// Collapses an order's raw product sequence into display lines. The
/// underlying map iterates in arbitrary order, so lines are sorted by name to
/// keep the rendered label stable.
pub fn line_items(order: &Order) -> Vec<LineItem> {
    let mut items: Vec<LineItem> = order
        .aggregate_products()
        .into_values()
        .map(|aggregate| LineItem {
            name: aggregate.product.name,
            amount: aggregate.amount,
        })
        .collect();
    items.sort_by(|a, b| a.name.cmp(&b.name));
    items
}

/// "2× Latte, 1× Scone" for the Purchased Items column.
pub fn items_label(order: &Order) -> String {
    line_items(order)
        .into_iter()
        .map(|item| format!("{}× {}", item.amount, item.name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Product, ProductType};
    use time::macros::datetime;

    fn product(id: i64, name: &str, price: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: price.parse().unwrap(),
            kind: ProductType::Pastry,
            discontinued: false,
            sold_out: false,
        }
    }

    fn order_with(products: Vec<Product>) -> Order {
        Order {
            id: 1,
            cancelled: false,
            created_at: datetime!(2024-06-01 08:00 UTC),
            products,
        }
    }

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn short_earnings_sequences_clamp_to_zero() {
        let window = earnings_window(&[dec("10"), dec("20")]);
        assert_eq!(
            window,
            [dec("10"), dec("20"), Decimal::ZERO, Decimal::ZERO]
        );
    }

    #[test]
    fn long_earnings_sequences_only_fill_four_cards() {
        let window = earnings_window(&[dec("1"), dec("2"), dec("3"), dec("4"), dec("5")]);
        assert_eq!(window, [dec("1"), dec("2"), dec("3"), dec("4")]);
    }

    #[test]
    fn empty_earnings_render_as_four_zero_cards() {
        assert_eq!(earnings_window(&[]), [Decimal::ZERO; EARNINGS_WINDOW_DAYS]);
    }

    #[test]
    fn day_labels_read_naturally() {
        assert_eq!(day_label(0), "Today");
        assert_eq!(day_label(1), "Yesterday");
        assert_eq!(day_label(3), "3 days ago");
    }

    #[test]
    fn line_items_are_aggregated_and_name_sorted() {
        let latte = product(1, "Latte", "4.50");
        let bagel = product(2, "Bagel", "2.75");
        let order = order_with(vec![latte.clone(), bagel, latte]);

        let items = line_items(&order);
        assert_eq!(
            items,
            vec![
                LineItem {
                    name: "Bagel".to_string(),
                    amount: 1
                },
                LineItem {
                    name: "Latte".to_string(),
                    amount: 2
                },
            ]
        );
    }

    #[test]
    fn items_label_joins_counted_lines() {
        let latte = product(1, "Latte", "4.50");
        let bagel = product(2, "Bagel", "2.75");
        let order = order_with(vec![latte.clone(), bagel, latte]);
        assert_eq!(items_label(&order), "1× Bagel, 2× Latte");
    }

    #[test]
    fn empty_orders_produce_an_empty_label() {
        assert_eq!(items_label(&order_with(vec![])), "");
    }
}
