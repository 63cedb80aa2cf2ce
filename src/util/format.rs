use rust_decimal::{Decimal, RoundingStrategy};
use time::macros::format_description;
use time::OffsetDateTime;

/// Currency display: `$` prefix, exactly two digits after the point, rounded
/// half-up. `Decimal` keeps this identical across platforms; `42` renders as
/// `$42.00` and `3.005` as `$3.01`.
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.2}")
}

/// "Date Placed" column, e.g. `Jun 01, 2024 09:30 AM`.
pub fn format_date_placed(timestamp: OffsetDateTime) -> String {
    let format =
        format_description!("[month repr:short] [day], [year] [hour repr:12]:[minute] [period]");
    timestamp
        .format(&format)
        .unwrap_or_else(|_| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn money_always_carries_two_decimals() {
        assert_eq!(format_money(dec("42")), "$42.00");
        assert_eq!(format_money(dec("1.2")), "$1.20");
        assert_eq!(format_money(dec("0")), "$0.00");
    }

    #[test]
    fn money_rounds_half_up() {
        assert_eq!(format_money(dec("3.005")), "$3.01");
        assert_eq!(format_money(dec("3.004")), "$3.00");
        assert_eq!(format_money(dec("2.675")), "$2.68");
    }

    #[test]
    fn date_placed_reads_like_a_receipt() {
        let placed = datetime!(2024-06-01 09:30 UTC);
        assert_eq!(format_date_placed(placed), "Jun 01, 2024 09:30 AM");
    }
}
