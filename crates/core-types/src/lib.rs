pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{BonusModel, RevenueModel};
pub use error::CoreError;
pub use structs::{LineItem, Product, PurchaseRecord, SalesData, Seller};
