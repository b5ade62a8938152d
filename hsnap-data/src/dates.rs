//! Date helpers shared by the documents, the view and the CLI.

use chrono::NaiveDate;

/// ISO format used for every period label in the JSON documents.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Formats accepted when reading upstream CSV dates.
const CSV_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%m/%d/%y"];

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_iso(date: &NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Parse a date string in "YYYY-MM-DD" format
pub fn parse_iso(s: &str) -> anyhow::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s.trim(), ISO_FORMAT)?)
}

/// Parse a date as written in the upstream spreadsheets.
///
/// Timestamps such as `2020-03-01 00:00:00` are accepted by dropping the
/// time part.
pub fn parse_csv_date(s: &str) -> anyhow::Result<NaiveDate> {
    let date_part = s.trim().split([' ', 'T']).next().unwrap_or("");
    for format in CSV_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(date_part, format) {
            return Ok(date);
        }
    }
    anyhow::bail!("unrecognised date: {:?}", s)
}

/// True when `label` is a well-formed ISO date.
pub fn is_iso_label(label: &str) -> bool {
    label.len() == 10 && NaiveDate::parse_from_str(label, ISO_FORMAT).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_and_parse() {
        let date = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
        let formatted = format_iso(&date);
        assert_eq!(formatted, "2020-03-01");
        assert_eq!(parse_iso(&formatted).unwrap(), date);
    }

    #[test]
    fn test_parse_csv_date_variants() {
        let expected = NaiveDate::from_ymd_opt(2021, 9, 1).unwrap();
        assert_eq!(parse_csv_date("2021-09-01").unwrap(), expected);
        assert_eq!(parse_csv_date("9/1/2021").unwrap(), expected);
        assert_eq!(parse_csv_date("2021-09-01 00:00:00").unwrap(), expected);
        assert!(parse_csv_date("September").is_err());
    }

    #[test]
    fn test_is_iso_label() {
        assert!(is_iso_label("1999-01-01"));
        assert!(!is_iso_label("1999-1-1"));
        assert!(!is_iso_label("01/01/1999"));
        assert!(!is_iso_label("1999-02-30"));
    }
}
