use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{
    AnalyticsSettings, BonusSchedule, Config, Logging, OutputFormat, ReportSettings,
};

/// Prefix of the environment variables that override file settings,
/// e.g. `SALES__ANALYTICS__TOP_PRODUCTS_LIMIT=5`.
const ENV_PREFIX: &str = "SALES";

/// Loads the application configuration.
///
/// Sources are layered in this order, later ones winning:
/// 1. Built-in defaults.
/// 2. The TOML file at `path`, or an optional `config.toml` in the working directory.
/// 3. `SALES__`-prefixed environment variables.
///
/// An explicitly given `path` must exist; the implicit `config.toml` may be absent.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name("config.toml").required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(?config, "Configuration loaded.");
    Ok(config)
}
