// src/fields/rating.rs
use crate::config::consts::MAX_RATING;
use crate::error::FieldError;

/// `" 4.21 "` → `Some(4.21)`. Out of `[0, 5]` counts as malformed.
pub fn parse_rating(text: Option<&str>) -> Option<f64> {
    rating(text).ok()
}

/// `"2,500"` → `Some(2500)`.
pub fn parse_count(text: Option<&str>) -> Option<u64> {
    count(text).ok()
}

pub(crate) fn rating(text: Option<&str>) -> Result<f64, FieldError> {
    let raw = text.ok_or(FieldError::Missing)?.trim();
    let value: f64 = raw
        .parse()
        .map_err(|_| FieldError::Malformed(format!("rating {raw:?}")))?;
    if value.is_finite() && (0.0..=MAX_RATING).contains(&value) {
        Ok(value)
    } else {
        Err(FieldError::Malformed(format!("rating out of range: {value}")))
    }
}

pub(crate) fn count(text: Option<&str>) -> Result<u64, FieldError> {
    let raw = text.ok_or(FieldError::Missing)?;
    let digits: String = raw.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    digits
        .parse()
        .map_err(|_| FieldError::Malformed(format!("count {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_parses_decimal() {
        assert_eq!(parse_rating(Some("4.5")), Some(4.5));
        assert_eq!(parse_rating(Some("\n   4.21\n ")), Some(4.21));
        assert_eq!(parse_rating(Some("0")), Some(0.0));
        assert_eq!(parse_rating(Some("5.00")), Some(5.0));
    }

    #[test]
    fn rating_sentinels() {
        assert_eq!(parse_rating(None), None);
        assert_eq!(parse_rating(Some("")), None);
        assert_eq!(parse_rating(Some("n/a")), None);
        assert_eq!(parse_rating(Some("5.01")), None);
        assert_eq!(parse_rating(Some("-1")), None);
        assert_eq!(parse_rating(Some("NaN")), None);
        assert_eq!(rating(None), Err(FieldError::Missing));
    }

    #[test]
    fn count_drops_thousands_separators() {
        assert_eq!(parse_count(Some("1,234")), Some(1234));
        assert_eq!(parse_count(Some(" 2,500 ")), Some(2500));
        assert_eq!(parse_count(Some("1,234,567")), Some(1_234_567));
        assert_eq!(parse_count(Some("7")), Some(7));
    }

    #[test]
    fn count_sentinels() {
        assert_eq!(parse_count(None), None);
        assert_eq!(parse_count(Some("")), None);
        assert_eq!(parse_count(Some("-3")), None);
        assert_eq!(parse_count(Some("1.5k")), None);
        assert!(matches!(count(Some("x")), Err(FieldError::Malformed(_))));
    }
}
