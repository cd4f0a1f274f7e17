//! Time related utils.

use crate::{Error, Result};
use chrono::Utc;

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Get the current time in UTC.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a time as decimal unix seconds: "1700000000".
///
/// No fractional part, no leading zeros, no sign for non-negative epoch
/// values. This exact string is part of the wire contract: it is both the
/// header value and the trailing component of the canonical string.
pub fn format_timestamp(time: DateTime) -> String {
    time.timestamp().to_string()
}

/// Parse a claimed timestamp header into unix seconds.
///
/// Accepts anything `i64` parses (the counterpart of Go's
/// `strconv.ParseInt`). Callers must keep using the raw input string for
/// canonicalization; re-formatting the parsed value would break values
/// like "0012".
pub fn parse_timestamp(s: &str) -> Result<i64> {
    s.parse::<i64>()
        .map_err(|e| Error::timestamp_malformed(format!("timestamp {s:?} is not an integer")).with_source(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_format_timestamp() {
        let t = DateTime::from_timestamp(1700000000, 0).unwrap();
        assert_eq!(format_timestamp(t), "1700000000");

        let epoch = DateTime::from_timestamp(0, 0).unwrap();
        assert_eq!(format_timestamp(epoch), "0");
    }

    #[test]
    fn test_format_timestamp_drops_fractional_part() {
        let t = DateTime::from_timestamp(1700000000, 999_999_999).unwrap();
        assert_eq!(format_timestamp(t), "1700000000");
    }

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(parse_timestamp("1700000000").unwrap(), 1700000000);
        assert_eq!(parse_timestamp("0012").unwrap(), 12);
        assert_eq!(parse_timestamp("-1").unwrap(), -1);

        for input in ["", "abc", "17.5", "17 ", "0x11"] {
            let err = parse_timestamp(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TimestampMalformed, "input: {input:?}");
        }
    }
}
