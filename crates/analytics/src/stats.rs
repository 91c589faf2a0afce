use crate::report::TopProduct;
use core_types::Seller;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Running totals for one seller, built up while purchase records are folded in.
///
/// This is what a `BonusCalculator` gets to look at. It is discarded once the
/// final `SellerResult`s have been produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStats {
    pub id: String,
    pub name: String,
    /// Sum of `total_amount` over the seller's purchase records.
    pub revenue: Decimal,
    /// Sum of `revenue - cost` over the seller's matched line items.
    pub profit: Decimal,
    /// Number of purchase records, regardless of how many items each holds.
    pub sales_count: u64,
    /// Cumulative quantity sold per SKU. Ordered by SKU.
    pub products_sold: BTreeMap<String, u64>,
}

impl SellerStats {
    /// Creates zeroed statistics for a seller.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            products_sold: BTreeMap::new(),
        }
    }

    /// Records `quantity` more units of `sku`, creating the entry if needed.
    pub fn add_sold(&mut self, sku: &str, quantity: u32) {
        *self.products_sold.entry(sku.to_string()).or_insert(0) += u64::from(quantity);
    }

    /// The `limit` SKUs with the highest quantity sold, highest first.
    ///
    /// Equal quantities are ordered by SKU, because the sort is stable and
    /// `products_sold` iterates in SKU order.
    pub fn top_products(&self, limit: usize) -> Vec<TopProduct> {
        let mut products: Vec<TopProduct> = self
            .products_sold
            .iter()
            .map(|(sku, &quantity)| TopProduct {
                sku: sku.clone(),
                quantity,
            })
            .collect();
        products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        products.truncate(limit);
        products
    }
}

impl From<&Seller> for SellerStats {
    fn from(seller: &Seller) -> Self {
        Self::new(seller.id.clone(), seller.full_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_seller_starts_zeroed() {
        let seller = Seller {
            id: "seller_7".to_string(),
            first_name: "Anna".to_string(),
            last_name: "Smirnova".to_string(),
        };
        let stats = SellerStats::from(&seller);
        assert_eq!(stats.id, "seller_7");
        assert_eq!(stats.name, "Anna Smirnova");
        assert_eq!(stats.revenue, Decimal::ZERO);
        assert_eq!(stats.profit, Decimal::ZERO);
        assert_eq!(stats.sales_count, 0);
        assert!(stats.products_sold.is_empty());
    }

    #[test]
    fn add_sold_accumulates_per_sku() {
        let mut stats = SellerStats::new("s", "S");
        stats.add_sold("A", 2);
        stats.add_sold("B", 1);
        stats.add_sold("A", 5);
        assert_eq!(stats.products_sold.get("A"), Some(&7));
        assert_eq!(stats.products_sold.get("B"), Some(&1));
    }

    #[test]
    fn top_products_sorts_by_quantity_then_sku_and_truncates() {
        let mut stats = SellerStats::new("s", "S");
        stats.add_sold("D", 3);
        stats.add_sold("B", 9);
        stats.add_sold("C", 3);
        stats.add_sold("A", 1);

        let top: Vec<(String, u64)> = stats
            .top_products(3)
            .into_iter()
            .map(|p| (p.sku, p.quantity))
            .collect();
        assert_eq!(
            top,
            vec![("B".to_string(), 9), ("C".to_string(), 3), ("D".to_string(), 3)]
        );
    }
}
