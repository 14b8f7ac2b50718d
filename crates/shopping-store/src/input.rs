//! Form Input Normalization
//!
//! Turns raw text from form fields into values the store accepts.

/// Quantity used when the user gives nothing usable
pub const DEFAULT_QUANTITY: u32 = 1;

/// Parse a quantity field.
///
/// Reads an optional sign and the leading run of digits after any
/// whitespace, ignoring the rest ("3 packs" is 3, "2.5" is 2). Anything
/// that is not a positive integer becomes [`DEFAULT_QUANTITY`].
pub fn parse_quantity(raw: &str) -> u32 {
    let rest = raw.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if negative || digits_len == 0 {
        return DEFAULT_QUANTITY;
    }
    match rest[..digits_len].parse::<u32>() {
        Ok(0) | Err(_) => DEFAULT_QUANTITY,
        Ok(n) => n,
    }
}

/// Trim a required name. `None` when nothing is left.
pub fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Trim optional notes. Blank notes are treated as absent.
pub fn normalize_notes(raw: &str) -> Option<String> {
    normalize_name(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("2"), 2);
        assert_eq!(parse_quantity("  12"), 12);
        assert_eq!(parse_quantity("+4"), 4);
        assert_eq!(parse_quantity("3 packs"), 3);
        assert_eq!(parse_quantity("2.5"), 2);
    }

    #[test]
    fn test_parse_quantity_falls_back_to_one() {
        for raw in ["", "   ", "0", "000", "-3", "abc", "x5", "-", "99999999999"] {
            assert_eq!(parse_quantity(raw), DEFAULT_QUANTITY, "input {:?}", raw);
        }
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Milk "), Some("Milk".to_string()));
        assert_eq!(normalize_name(" \t\n"), None);
        assert_eq!(normalize_notes(""), None);
        assert_eq!(normalize_notes(" organic "), Some("organic".to_string()));
    }
}
