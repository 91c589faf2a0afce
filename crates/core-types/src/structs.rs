use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A salesperson whose activity is being aggregated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    /// The display name used in reports: first and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A catalog entry, keyed by its SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    /// The cost of a single unit to the business.
    pub purchase_price: Decimal,
}

/// A single product line within a purchase record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    pub quantity: u32,
    /// The unit price before the discount is applied.
    pub sale_price: Decimal,
    /// Discount as a percentage, nominally in [0, 100].
    #[serde(default)]
    pub discount: Decimal,
}

impl LineItem {
    /// Checks that the discount is a percentage in [0, 100].
    ///
    /// Aggregation never calls this: out-of-range discounts are passed through
    /// to the revenue formula untouched. It exists so that callers can surface
    /// suspicious data before running a report.
    pub fn check_discount(&self) -> Result<(), CoreError> {
        if self.discount < Decimal::ZERO || self.discount > Decimal::ONE_HUNDRED {
            return Err(CoreError::InvalidInput(
                format!("discount of sku '{}'", self.sku),
                format!("{} is outside [0, 100]", self.discount),
            ));
        }
        Ok(())
    }
}

/// One sales transaction made by a seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: String,
    /// The receipt total as recorded at the till. Summed into seller revenue as-is.
    pub total_amount: Decimal,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// The complete input dataset for a sales report.
///
/// Missing collections deserialize as empty vectors so that shape problems are
/// reported by validation rather than by the JSON parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    #[serde(default)]
    pub sellers: Vec<Seller>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub purchase_records: Vec<PurchaseRecord>,
}

impl SalesData {
    /// Runs the per-line data checks over every purchase record and collects the failures.
    pub fn integrity_issues(&self) -> Vec<CoreError> {
        self.purchase_records
            .iter()
            .flat_map(|record| record.items.iter())
            .filter_map(|item| item.check_discount().err())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn full_name_joins_with_a_single_space() {
        let seller = Seller {
            id: "seller_1".to_string(),
            first_name: "Alexey".to_string(),
            last_name: "Petrov".to_string(),
        };
        assert_eq!(seller.full_name(), "Alexey Petrov");
    }

    #[test]
    fn deserializes_numbers_and_ignores_unknown_fields() {
        let json = r#"{
            "sellers": [{"id": "seller_1", "first_name": "Alexey", "last_name": "Petrov", "position": "Senior"}],
            "products": [{"sku": "SKU_001", "purchase_price": 12.5, "name": "Tea"}],
            "purchase_records": [{
                "receipt_id": "receipt_1",
                "seller_id": "seller_1",
                "total_amount": "99.90",
                "items": [{"sku": "SKU_001", "quantity": 3, "sale_price": 40, "discount": 15}]
            }]
        }"#;

        let data: SalesData = serde_json::from_str(json).unwrap();
        assert_eq!(data.products[0].purchase_price, dec!(12.5));
        assert_eq!(data.purchase_records[0].total_amount, dec!(99.90));
        assert_eq!(data.purchase_records[0].items[0].discount, dec!(15));
        assert_eq!(data.purchase_records[0].items[0].quantity, 3);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let data: SalesData = serde_json::from_str(r#"{"sellers": []}"#).unwrap();
        assert!(data.products.is_empty());
        assert!(data.purchase_records.is_empty());
    }

    #[test]
    fn missing_discount_defaults_to_zero() {
        let item: LineItem =
            serde_json::from_str(r#"{"sku": "SKU_001", "quantity": 1, "sale_price": 10}"#).unwrap();
        assert_eq!(item.discount, Decimal::ZERO);
    }

    #[test]
    fn integrity_issues_flag_out_of_range_discounts() {
        let item = |sku: &str, discount| LineItem {
            sku: sku.to_string(),
            quantity: 1,
            sale_price: dec!(10),
            discount,
        };
        let data = SalesData {
            purchase_records: vec![PurchaseRecord {
                seller_id: "seller_1".to_string(),
                total_amount: dec!(10),
                items: vec![item("A", dec!(0)), item("B", dec!(100)), item("C", dec!(120)), item("D", dec!(-5))],
            }],
            ..Default::default()
        };

        let issues = data.integrity_issues();
        assert_eq!(issues.len(), 2);
        assert!(issues[0].to_string().contains("sku 'C'"));
        assert!(issues[1].to_string().contains("sku 'D'"));
    }
}
