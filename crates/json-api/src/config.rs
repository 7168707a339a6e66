//! Server configuration module

use clap::{Args, Parser};
use rust_decimal::Decimal;

use till::{calculator::DiscountConfig, items::ItemCategory};

/// Till JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "till-json", about = "Till JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server host address
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "SERVER_PORT", default_value = "8703")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Discount rule settings.
    #[command(flatten)]
    pub discount: DiscountSettings,
}

/// Settings for the two standard discount rules.
///
/// The defaults are the historical deployment constants.
#[derive(Debug, Args)]
pub struct DiscountSettings {
    /// Code customers supply for the code discount
    #[arg(long, env = "DISCOUNT_CODE", default_value = "SPECIAL_CODE_15")]
    pub code: String,

    /// Percentage off the basket when the code matches
    #[arg(long, env = "DISCOUNT_CODE_PERCENT", default_value = "20")]
    pub code_percent: Decimal,

    /// Item category that triggers the category discount
    #[arg(long, env = "DISCOUNT_ITEM_CATEGORY", default_value = "BELT")]
    pub item_category: ItemCategory,

    /// Percentage off the basket when the category is present
    #[arg(long, env = "DISCOUNT_ITEM_PERCENT", default_value = "10")]
    pub item_percent: Decimal,
}

impl From<DiscountSettings> for DiscountConfig {
    fn from(settings: DiscountSettings) -> Self {
        Self {
            code: settings.code,
            code_percent: settings.code_percent,
            item_category: settings.item_category,
            item_percent: settings.item_percent,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
