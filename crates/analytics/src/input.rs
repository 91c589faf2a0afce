use crate::error::AnalyticsError;
use core_types::SalesData;
use serde_json::Value;

pub const SELLERS: &str = "sellers";
pub const PRODUCTS: &str = "products";
pub const PURCHASE_RECORDS: &str = "purchase_records";

/// Parses a JSON sales dataset.
///
/// The document must be an object whose `sellers`, `products` and `purchase_records`
/// are non-empty arrays, otherwise `AnalyticsError::InvalidInput` names the first
/// offending member. Problems inside the records themselves (a missing field, a
/// string where a number belongs) surface as `AnalyticsError::Deserialization`.
pub fn parse_sales_data(json: &str) -> Result<SalesData, AnalyticsError> {
    let document: Value = serde_json::from_str(json)?;

    let Value::Object(members) = &document else {
        return Err(AnalyticsError::InvalidInput { field: "data" });
    };

    for field in [SELLERS, PRODUCTS, PURCHASE_RECORDS] {
        match members.get(field) {
            Some(Value::Array(items)) if !items.is_empty() => {}
            _ => return Err(AnalyticsError::InvalidInput { field }),
        }
    }

    Ok(serde_json::from_value(document)?)
}
