//! # Sales Analytics Engine
//!
//! This crate turns raw sales activity into per-seller statistics: revenue, profit,
//! a rank-based bonus and the best-selling products of each seller.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files,
//!   terminals or any other external system. It depends only on `core-types` and
//!   `configuration` (Layer 0).
//! - **Pluggable Formulas:** Revenue and bonus are computed through the
//!   `RevenueCalculator` and `BonusCalculator` traits, so the engine can run any
//!   formula without knowing its internal details.
//! - **Stateless Calculation:** The `SalesAnalyticsEngine` holds only its formulas.
//!   It takes a `SalesData` snapshot as input and produces a ranked `Vec<SellerResult>`,
//!   never mutating its input.
//!
//! ## Public API
//!
//! - `SalesAnalyticsEngine`: The main struct that contains the aggregation logic.
//! - `RevenueCalculator` / `BonusCalculator`: The formula traits, with the stock
//!   `SimpleRevenue` and `BonusByProfit` implementations.
//! - `create_revenue_calculator` / `create_bonus_calculator`: Factories driven by configuration.
//! - `SellerResult`: The standardized per-seller output row.
//! - `parse_sales_data`: Shape-checks and deserializes a JSON dataset.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod calculators;
pub mod engine;
pub mod error;
pub mod factory;
pub mod input;
pub mod report;
pub mod stats;

// Re-export the key components to create a clean, public-facing API.
pub use calculators::{BonusByProfit, BonusCalculator, RevenueCalculator, SimpleRevenue};
pub use engine::SalesAnalyticsEngine;
pub use error::AnalyticsError;
pub use factory::{create_bonus_calculator, create_revenue_calculator};
pub use input::parse_sales_data;
pub use report::{SellerResult, TopProduct};
pub use stats::SellerStats;
