use serde::{Deserialize, Serialize};

/// Identifies which revenue formula to apply to each line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueModel {
    /// `sale_price * (1 - discount / 100) * quantity`.
    #[default]
    Simple,
}

/// Identifies which bonus formula to apply to each ranked seller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusModel {
    /// A percentage of profit that depends on the seller's rank.
    #[default]
    ByProfit,
}
