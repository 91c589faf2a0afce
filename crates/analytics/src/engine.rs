use crate::calculators::{BonusCalculator, RevenueCalculator};
use crate::error::AnalyticsError;
use crate::factory::{create_bonus_calculator, create_revenue_calculator};
use crate::input::{PRODUCTS, PURCHASE_RECORDS, SELLERS};
use crate::report::{SellerResult, round_money};
use crate::stats::SellerStats;
use configuration::AnalyticsSettings;
use core_types::{Product, SalesData};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// How many top products are kept per seller unless configured otherwise.
pub const DEFAULT_TOP_PRODUCTS_LIMIT: usize = 10;

/// Aggregates purchase records into ranked per-seller statistics.
///
/// The engine owns its revenue and bonus formulas and nothing else, so one
/// instance can serve any number of datasets.
pub struct SalesAnalyticsEngine {
    revenue: Box<dyn RevenueCalculator>,
    bonus: Box<dyn BonusCalculator>,
    top_products_limit: usize,
}

impl SalesAnalyticsEngine {
    pub fn new(revenue: Box<dyn RevenueCalculator>, bonus: Box<dyn BonusCalculator>) -> Self {
        Self {
            revenue,
            bonus,
            top_products_limit: DEFAULT_TOP_PRODUCTS_LIMIT,
        }
    }

    /// Builds an engine with the formulas and limits named in the analytics settings.
    pub fn from_settings(settings: &AnalyticsSettings) -> Self {
        Self::new(
            create_revenue_calculator(settings.revenue_model),
            create_bonus_calculator(settings.bonus_model, &settings.bonus_schedule),
        )
        .with_top_products_limit(settings.top_products_limit)
    }

    pub fn with_top_products_limit(mut self, limit: usize) -> Self {
        self.top_products_limit = limit;
        self
    }

    /// Checks that every collection of the dataset is non-empty.
    ///
    /// Collections are checked in the order sellers, products, purchase records,
    /// and the first empty one is reported.
    pub fn validate(data: &SalesData) -> Result<(), AnalyticsError> {
        let checks = [
            (SELLERS, data.sellers.is_empty()),
            (PRODUCTS, data.products.is_empty()),
            (PURCHASE_RECORDS, data.purchase_records.is_empty()),
        ];
        match checks.into_iter().find(|&(_, empty)| empty) {
            Some((field, _)) => Err(AnalyticsError::InvalidInput { field }),
            None => Ok(()),
        }
    }

    /// The main entry point for calculating per-seller statistics.
    ///
    /// # Arguments
    ///
    /// * `data` - The sellers, products and purchase records to aggregate.
    ///
    /// # Returns
    ///
    /// One `SellerResult` per input seller, ordered by profit descending. Sellers
    /// with equal profit keep their input order.
    ///
    /// Purchase records of unknown sellers and line items of unknown products are
    /// skipped; the only error is an invalid dataset shape, detected before any
    /// aggregation happens.
    #[tracing::instrument(name = "sales_aggregate", skip_all, fields(sellers = data.sellers.len(), records = data.purchase_records.len()))]
    pub fn calculate(&self, data: &SalesData) -> Result<Vec<SellerResult>, AnalyticsError> {
        Self::validate(data)?;

        let mut stats: Vec<SellerStats> = data.sellers.iter().map(SellerStats::from).collect();

        // A repeated id resolves to the seller that appears last.
        let seller_index: HashMap<&str, usize> = data
            .sellers
            .iter()
            .enumerate()
            .map(|(i, seller)| (seller.id.as_str(), i))
            .collect();
        let product_index: HashMap<&str, &Product> = data
            .products
            .iter()
            .map(|product| (product.sku.as_str(), product))
            .collect();

        let mut skipped_records = 0usize;
        let mut skipped_items = 0usize;

        for record in &data.purchase_records {
            let Some(&position) = seller_index.get(record.seller_id.as_str()) else {
                tracing::debug!(seller_id = %record.seller_id, "Skipping purchase record of unknown seller.");
                skipped_records += 1;
                continue;
            };
            let seller = &mut stats[position];

            // Receipt totals and per-item profit are accumulated independently.
            seller.revenue += record.total_amount;

            for item in &record.items {
                let Some(product) = product_index.get(item.sku.as_str()) else {
                    tracing::debug!(seller_id = %record.seller_id, sku = %item.sku, "Skipping line item of unknown product.");
                    skipped_items += 1;
                    continue;
                };

                let revenue = self.revenue.calculate(item, product);
                let cost = product.purchase_price * Decimal::from(item.quantity);
                seller.profit += revenue - cost;
                seller.add_sold(&item.sku, item.quantity);
            }

            seller.sales_count += 1;
        }

        tracing::info!(
            processed_records = data.purchase_records.len() - skipped_records,
            skipped_records,
            skipped_items,
            "Purchase records aggregated."
        );

        // `sort_by` is stable, so ties keep input order.
        stats.sort_by(|a, b| b.profit.cmp(&a.profit));

        let total = stats.len();
        let results = stats
            .iter()
            .enumerate()
            .map(|(index, seller)| {
                let bonus = self.bonus.calculate(index, total, seller);
                SellerResult {
                    seller_id: seller.id.clone(),
                    name: seller.name.clone(),
                    revenue: round_money(seller.revenue),
                    profit: round_money(seller.profit),
                    sales_count: seller.sales_count,
                    top_products: seller.top_products(self.top_products_limit),
                    bonus: round_money(bonus),
                }
            })
            .collect();

        Ok(results)
    }
}

impl Default for SalesAnalyticsEngine {
    /// `SimpleRevenue` with the standard `BonusByProfit` schedule and a top-10 limit.
    fn default() -> Self {
        Self::from_settings(&AnalyticsSettings::default())
    }
}
