#![allow(dead_code)]

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Classification of a product on the menu. The set is closed; anything else
/// coming off the wire is a producer-side validation error and fails
/// deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Food,
    Drink,
    Pastry,
}

/// A sellable item as the register knows it. Read-only projection on this
/// side; the dashboard never mutates products.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    #[serde(rename = "type")]
    pub kind: ProductType,
    pub discontinued: bool,
    pub sold_out: bool,
}

/// A product paired with how many units of it appear in some container.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductAggregate {
    pub product: Product,
    pub amount: u32,
}

/// Line-item counts keyed by the product id rendered as a string. Every key
/// equals `product.id.to_string()` of its entry.
pub type ProductMap = HashMap<String, ProductAggregate>;

/// An order as placed at the register. `products` is the raw sequence; a
/// product appearing twice means two units were sold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub cancelled: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub products: Vec<Product>,
}

impl Order {
    /// Collapses the raw product sequence into per-product unit counts.
    pub fn aggregate_products(&self) -> ProductMap {
        let mut map = ProductMap::new();
        for product in &self.products {
            map.entry(product.id.to_string())
                .and_modify(|aggregate| aggregate.amount += 1)
                .or_insert_with(|| ProductAggregate {
                    product: product.clone(),
                    amount: 1,
                });
        }
        map
    }

    /// Sum of the raw sequence's unit prices.
    pub fn total(&self) -> Decimal {
        self.products.iter().map(|product| product.price).sum()
    }
}

/// An order enriched with its precomputed total, ready for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RichOrder {
    pub order_id: i64,
    pub total: Decimal,
    pub order: Order,
}

impl RichOrder {
    /// `order_id` must mirror the wrapped order's id.
    pub fn is_consistent(&self) -> bool {
        self.order_id == self.order.id
    }
}

/// A register station. Not rendered anywhere yet; reserved for the Users tab.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: i64,
    pub name: String,
    pub products: Vec<Product>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}
