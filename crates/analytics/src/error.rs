use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// The dataset, or one of its three collections, is absent, not a collection, or empty.
    #[error("Invalid input data: `{field}` is missing, empty or not a collection")]
    InvalidInput { field: &'static str },

    #[error("Failed to deserialize sales data: {0}")]
    Deserialization(#[from] serde_json::Error),
}
