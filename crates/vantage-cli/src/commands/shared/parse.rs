use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;

/// Parse a flag value through its `FromStr` impl, naming the flag on error.
pub fn parse_value<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>()
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse an optional `YYYY-MM-DD` flag.
pub fn parse_date(raw: Option<&str>, field: &str) -> anyhow::Result<Option<NaiveDate>> {
    raw.map(|value| {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|error| {
            anyhow::anyhow!("invalid {field} '{value}' (expected YYYY-MM-DD): {error}")
        })
    })
    .transpose()
}
