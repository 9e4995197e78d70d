//! Application configuration management.
//!
//! Configuration is an explicit value: callers load it once and hand the
//! relevant section to whatever they construct. Nothing here is global.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Largest number of fractional digits an exact decimal can carry.
pub const MAX_DECIMAL_PLACES: u32 = 28;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Rounding configuration.
    pub rounding: RoundingConfig,
    /// Business calendar configuration.
    pub calendar: CalendarConfig,
    /// Date parser configuration.
    pub parser: ParserConfig,
}

/// Rounding configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoundingConfig {
    /// Default number of fractional digits for currency amounts.
    pub decimal_places: u32,
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self { decimal_places: 2 }
    }
}

/// Business calendar configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Dates that never count as business days.
    pub holidays: Vec<NaiveDate>,
}

/// Date parser configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Read ambiguous numeric dates such as `01/02/2024` as day-first.
    pub day_first: bool,
    /// Additional `chrono` format strings tried after the built-in ones.
    pub extra_formats: Vec<String>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `TALLY__SECTION__KEY` environment variables. List values
    /// (`TALLY__CALENDAR__HOLIDAYS`, `TALLY__PARSER__EXTRA_FORMATS`) are
    /// comma separated.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or fails validation.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("TALLY")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("calendar.holidays")
                    .with_list_parse_key("parser.extra_formats"),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    /// Checks invariants that the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if `rounding.decimal_places` exceeds
    /// [`MAX_DECIMAL_PLACES`].
    pub fn validate(&self) -> AppResult<()> {
        if self.rounding.decimal_places > MAX_DECIMAL_PLACES {
            return Err(AppError::Validation(format!(
                "rounding.decimal_places must be at most {MAX_DECIMAL_PLACES}, got {}",
                self.rounding.decimal_places
            )));
        }
        Ok(())
    }
}
