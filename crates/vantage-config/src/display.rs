//! Display formatting preferences.

use serde::{Deserialize, Serialize};

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Symbol prefixed to currency amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// `chrono` strftime pattern for dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            date_format: default_date_format(),
        }
    }
}
