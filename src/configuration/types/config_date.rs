use chrono::NaiveDate;
use color_eyre::eyre::{eyre, Result};
use log::trace;

/// Formats tried before falling back to human readable input
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d.%m.%Y"];

/// Parse a date given by the user or the `calpad.toml` file
///
/// Exact dates (`2024-05-10` or `10.05.2024`) are tried first, anything else goes through
/// [`fuzzydate::parse`] so we can handle human readable dates like "today" or "next friday".
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            trace!("parsed '{}' with '{}'", input, fmt);
            return Ok(date);
        }
    }

    fuzzydate::parse(input.to_string())
        .map(|d| d.date())
        .map_err(|e| eyre!("could not parse date '{}': {}", input, e))
}
