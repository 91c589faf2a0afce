use crate::error::ConfigError;
use core_types::{BonusModel, RevenueModel};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analytics: AnalyticsSettings,
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub logging: Logging,
}

impl Config {
    /// Rejects values that deserialize fine but make no sense for a report.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analytics.top_products_limit == 0 {
            return Err(ConfigError::ValidationError(
                "analytics.top_products_limit must be greater than 0".to_string(),
            ));
        }
        self.analytics.bonus_schedule.validate()
    }
}

/// Contains the parameters of the sales aggregation itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyticsSettings {
    /// Which formula turns a line item into revenue.
    pub revenue_model: RevenueModel,
    /// Which formula turns a seller's rank into a bonus.
    pub bonus_model: BonusModel,
    /// How many best-selling products to keep per seller.
    pub top_products_limit: usize,
    pub bonus_schedule: BonusSchedule,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            revenue_model: RevenueModel::default(),
            bonus_model: BonusModel::default(),
            top_products_limit: 10,
            bonus_schedule: BonusSchedule::default(),
        }
    }
}

/// Profit fractions paid out per rank by the `by_profit` bonus model.
///
/// Only the rates are configurable. Which rank receives which rate, and the
/// order in which those rules are checked, is fixed by the bonus calculator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BonusSchedule {
    /// Rank 0, the seller with the highest profit.
    pub first: Decimal,
    /// Rank 1.
    pub second: Decimal,
    /// Rank 2.
    pub third: Decimal,
    /// The last rank, unless it is already one of the above.
    pub last: Decimal,
    /// Everyone else.
    pub others: Decimal,
}

impl Default for BonusSchedule {
    fn default() -> Self {
        Self {
            first: dec!(0.15),
            second: dec!(0.10),
            third: dec!(0.10),
            last: Decimal::ZERO,
            others: dec!(0.05),
        }
    }
}

impl BonusSchedule {
    fn validate(&self) -> Result<(), ConfigError> {
        let rates = [
            ("first", self.first),
            ("second", self.second),
            ("third", self.third),
            ("last", self.last),
            ("others", self.others),
        ];
        for (name, rate) in rates {
            if rate.is_sign_negative() && !rate.is_zero() {
                return Err(ConfigError::ValidationError(format!(
                    "analytics.bonus_schedule.{name} must not be negative (got {rate})"
                )));
            }
        }
        Ok(())
    }
}

/// How the `report` command renders its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Contains defaults for the `report` command.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub format: OutputFormat,
}

/// Contains parameters for the tracing subscriber installed by the binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// An `EnvFilter` directive, used when `RUST_LOG` is not set.
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<String>,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}
