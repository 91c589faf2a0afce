use crate::calculators::{BonusByProfit, BonusCalculator, RevenueCalculator, SimpleRevenue};
use configuration::BonusSchedule;
use core_types::{BonusModel, RevenueModel};

/// Creates the revenue formula identified by `model`.
pub fn create_revenue_calculator(model: RevenueModel) -> Box<dyn RevenueCalculator> {
    // The compiler will error here if a new RevenueModel is added but not handled.
    match model {
        RevenueModel::Simple => Box::new(SimpleRevenue),
    }
}

/// Creates the bonus formula identified by `model`, paying out the rates in `schedule`.
pub fn create_bonus_calculator(
    model: BonusModel,
    schedule: &BonusSchedule,
) -> Box<dyn BonusCalculator> {
    match model {
        BonusModel::ByProfit => Box::new(BonusByProfit::new(schedule.clone())),
    }
}
