//! Date Helpers

use chrono::{Local, NaiveDate};

const ISO_DATE: &str = "%Y-%m-%d";

/// Today's local date as `YYYY-MM-DD`
pub fn today() -> String {
    Local::now().date_naive().format(ISO_DATE).to_string()
}

/// `2024-10-15` -> `October 15, 2024`. Anything unparsable is returned as-is.
pub fn display_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), ISO_DATE) {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2024-10-15"), "October 15, 2024");
        assert_eq!(display_date("2025-03-01"), "March 1, 2025");
        assert_eq!(display_date(""), "");
        assert_eq!(display_date("soon"), "soon");
    }
}
