use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places kept on monetary fields of a `SellerResult`.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// The final per-seller statistics, in profit-descending order.
///
/// This struct is the final output of the `SalesAnalyticsEngine` and serves as the
/// data transfer object for report rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerResult {
    pub seller_id: String,
    pub name: String,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    pub bonus: Decimal,
}

/// One of a seller's best-selling products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u64,
}

/// Rounds a monetary amount to 2 decimal places, halves away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_money(dec!(1.005)), dec!(1.01));
        assert_eq!(round_money(dec!(-1.005)), dec!(-1.01));
        assert_eq!(round_money(dec!(2.344)), dec!(2.34));
        assert_eq!(round_money(dec!(7)), dec!(7));
    }

    #[test]
    fn never_keeps_more_than_two_places() {
        assert!(round_money(dec!(123.456789)).scale() <= MONEY_DECIMAL_PLACES);
    }

    #[test]
    fn serializes_money_as_json_numbers() {
        let result = SellerResult {
            seller_id: "seller_1".to_string(),
            name: "Ivan Ivanov".to_string(),
            revenue: dec!(10.5),
            profit: dec!(2.25),
            sales_count: 1,
            top_products: vec![TopProduct {
                sku: "SKU_001".to_string(),
                quantity: 3,
            }],
            bonus: dec!(0.34),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["revenue"], serde_json::json!(10.5));
        assert_eq!(json["profit"], serde_json::json!(2.25));
        assert_eq!(json["top_products"][0]["quantity"], serde_json::json!(3));
    }
}
