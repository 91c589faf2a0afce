use crate::stats::SellerStats;
use configuration::BonusSchedule;
use core_types::{LineItem, Product};
use rust_decimal::Decimal;

/// Computes the revenue of a single line item.
///
/// The `Send + Sync` bounds allow one engine to be shared between threads that
/// each aggregate their own dataset.
pub trait RevenueCalculator: Send + Sync {
    /// Returns the monetary revenue of `item`, given the catalog entry it refers to.
    fn calculate(&self, item: &LineItem, product: &Product) -> Decimal;
}

/// Computes a seller's bonus from their position in the profit ranking.
pub trait BonusCalculator: Send + Sync {
    /// # Arguments
    ///
    /// * `index` - The seller's zero-based rank, 0 being the highest profit.
    /// * `total` - The number of ranked sellers.
    /// * `seller` - The seller's accumulated statistics.
    fn calculate(&self, index: usize, total: usize, seller: &SellerStats) -> Decimal;
}

impl<F> RevenueCalculator for F
where
    F: Fn(&LineItem, &Product) -> Decimal + Send + Sync,
{
    fn calculate(&self, item: &LineItem, product: &Product) -> Decimal {
        self(item, product)
    }
}

impl<F> BonusCalculator for F
where
    F: Fn(usize, usize, &SellerStats) -> Decimal + Send + Sync,
{
    fn calculate(&self, index: usize, total: usize, seller: &SellerStats) -> Decimal {
        self(index, total, seller)
    }
}

/// Revenue net of the percentage discount: `sale_price * (1 - discount / 100) * quantity`.
///
/// The discount is not clamped, so values outside [0, 100] produce negative or
/// inflated revenue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenueCalculator for SimpleRevenue {
    fn calculate(&self, item: &LineItem, _product: &Product) -> Decimal {
        let effective_price = item.sale_price * (Decimal::ONE - item.discount / Decimal::ONE_HUNDRED);
        effective_price * Decimal::from(item.quantity)
    }
}

/// Pays out a fraction of profit that depends on the seller's rank.
///
/// The rules are checked in this order, and the first match wins:
/// 1. rank 0 gets `first`
/// 2. rank 1 gets `second` when there are at least 2 sellers
/// 3. rank 2 gets `third` when there are at least 3 sellers
/// 4. the last rank gets `last`
/// 5. everyone else gets `others`
///
/// So a lone seller is paid as the leader, and with exactly three sellers the
/// third one is paid as the last.
#[derive(Debug, Clone, Default)]
pub struct BonusByProfit {
    schedule: BonusSchedule,
}

impl BonusByProfit {
    pub fn new(schedule: BonusSchedule) -> Self {
        Self { schedule }
    }

    fn rate(&self, index: usize, total: usize) -> Decimal {
        if index == 0 {
            self.schedule.first
        } else if index == 1 && total > 1 {
            self.schedule.second
        } else if index == 2 && total > 2 {
            self.schedule.third
        } else if index + 1 == total {
            self.schedule.last
        } else {
            self.schedule.others
        }
    }
}

impl BonusCalculator for BonusByProfit {
    fn calculate(&self, index: usize, total: usize, seller: &SellerStats) -> Decimal {
        seller.profit * self.rate(index, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(quantity: u32, sale_price: Decimal, discount: Decimal) -> LineItem {
        LineItem {
            sku: "SKU_001".to_string(),
            quantity,
            sale_price,
            discount,
        }
    }

    fn product() -> Product {
        Product {
            sku: "SKU_001".to_string(),
            purchase_price: dec!(50),
        }
    }

    fn seller_with_profit(profit: Decimal) -> SellerStats {
        let mut stats = SellerStats::new("seller_1", "Ivan Ivanov");
        stats.profit = profit;
        stats
    }

    #[test]
    fn simple_revenue_applies_percentage_discount() {
        let revenue = SimpleRevenue.calculate(&item(3, dec!(200), dec!(25)), &product());
        assert_eq!(revenue, dec!(450));
    }

    #[test]
    fn simple_revenue_without_discount_is_price_times_quantity() {
        let revenue = SimpleRevenue.calculate(&item(4, dec!(19.99), dec!(0)), &product());
        assert_eq!(revenue, dec!(79.96));
    }

    #[test]
    fn simple_revenue_does_not_clamp_discount() {
        let over = SimpleRevenue.calculate(&item(1, dec!(100), dec!(150)), &product());
        assert_eq!(over, dec!(-50));

        let negative = SimpleRevenue.calculate(&item(1, dec!(100), dec!(-10)), &product());
        assert_eq!(negative, dec!(110));
    }

    #[test]
    fn bonus_schedule_for_many_sellers() {
        let bonus = BonusByProfit::default();
        let seller = seller_with_profit(dec!(1000));
        let bonuses: Vec<Decimal> = (0..6).map(|i| bonus.calculate(i, 6, &seller)).collect();
        assert_eq!(
            bonuses,
            vec![dec!(150), dec!(100), dec!(100), dec!(50), dec!(50), dec!(0)]
        );
    }

    #[test]
    fn lone_seller_is_paid_as_leader() {
        let bonus = BonusByProfit::default();
        assert_eq!(bonus.calculate(0, 1, &seller_with_profit(dec!(100))), dec!(15));
    }

    #[test]
    fn last_place_overrides_nothing_above_it() {
        let bonus = BonusByProfit::default();
        // With two sellers, rank 1 is both "second" and "last"; "second" is checked first.
        assert_eq!(bonus.calculate(1, 2, &seller_with_profit(dec!(200))), dec!(20));
        // With four sellers, rank 3 is the last and gets nothing.
        assert_eq!(bonus.calculate(3, 4, &seller_with_profit(dec!(200))), dec!(0));
    }

    #[test]
    fn custom_schedule_rates_are_used() {
        let schedule = BonusSchedule {
            first: dec!(0.2),
            second: dec!(0.1),
            third: dec!(0.1),
            last: dec!(0.01),
            others: dec!(0.03),
        };
        let bonus = BonusByProfit::new(schedule);
        let seller = seller_with_profit(dec!(100));
        assert_eq!(bonus.calculate(0, 5, &seller), dec!(20));
        assert_eq!(bonus.calculate(3, 5, &seller), dec!(3));
        assert_eq!(bonus.calculate(4, 5, &seller), dec!(1));
    }

    #[test]
    fn closures_are_calculators() {
        let flat = |_: &LineItem, _: &Product| dec!(7);
        assert_eq!(flat.calculate(&item(1, dec!(1), dec!(0)), &product()), dec!(7));

        let by_rank = |index: usize, _total: usize, _seller: &SellerStats| Decimal::from(index);
        assert_eq!(by_rank.calculate(4, 10, &seller_with_profit(dec!(0))), dec!(4));
    }
}
