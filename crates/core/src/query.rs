//! Inbound `page` query-parameter parsing.
//!
//! The parameter is parsed with an explicit, total function instead of
//! falling through numeric coercion: every input maps to either a valid
//! 1-based page number or a typed error, and the caller-facing default is
//! a named constant.

/// Page served when the request carries no usable `page` value
pub const DEFAULT_PAGE: u32 = 1;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParsePageError {
    #[error("page parameter is empty")]
    Empty,

    #[error("page parameter is not a number: {0}")]
    NotANumber(String),

    #[error("page parameter must be at least 1")]
    Zero,
}

/// Parse a raw `page` query value into a 1-based page number.
pub fn parse_page(raw: &str) -> Result<u32, ParsePageError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParsePageError::Empty);
    }

    let page: u32 = trimmed
        .parse()
        .map_err(|_| ParsePageError::NotANumber(trimmed.to_string()))?;

    if page == 0 {
        return Err(ParsePageError::Zero);
    }

    Ok(page)
}

/// Page number for an inbound request.
///
/// Absent, empty, non-numeric, or non-positive input falls back to
/// [`DEFAULT_PAGE`]. Pages beyond the feed's last page are passed through
/// untouched; upstream decides what an over-range page looks like.
pub fn page_or_default(raw: Option<&str>) -> u32 {
    raw.and_then(|value| parse_page(value).ok())
        .unwrap_or(DEFAULT_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_valid() {
        assert_eq!(parse_page("1"), Ok(1));
        assert_eq!(parse_page("7"), Ok(7));
        assert_eq!(parse_page(" 12 "), Ok(12));
    }

    #[test]
    fn test_parse_page_empty() {
        assert_eq!(parse_page(""), Err(ParsePageError::Empty));
        assert_eq!(parse_page("   "), Err(ParsePageError::Empty));
    }

    #[test]
    fn test_parse_page_not_a_number() {
        assert_eq!(
            parse_page("abc"),
            Err(ParsePageError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            parse_page("3.5"),
            Err(ParsePageError::NotANumber("3.5".to_string()))
        );
        // u32 parsing rejects the sign, so negatives land here too
        assert_eq!(
            parse_page("-2"),
            Err(ParsePageError::NotANumber("-2".to_string()))
        );
    }

    #[test]
    fn test_parse_page_zero() {
        assert_eq!(parse_page("0"), Err(ParsePageError::Zero));
    }

    #[test]
    fn test_page_or_default_absent() {
        assert_eq!(page_or_default(None), DEFAULT_PAGE);
    }

    #[test]
    fn test_page_or_default_invalid() {
        assert_eq!(page_or_default(Some("")), DEFAULT_PAGE);
        assert_eq!(page_or_default(Some("garbage")), DEFAULT_PAGE);
        assert_eq!(page_or_default(Some("0")), DEFAULT_PAGE);
        assert_eq!(page_or_default(Some("-9")), DEFAULT_PAGE);
    }

    #[test]
    fn test_page_or_default_valid() {
        assert_eq!(page_or_default(Some("7")), 7);
    }

    #[test]
    fn test_page_or_default_over_range_passes_through() {
        assert_eq!(page_or_default(Some("99999")), 99999);
    }
}
