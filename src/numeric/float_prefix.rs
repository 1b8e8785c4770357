//! Lenient leading-float parsing
//!
//! Reads the longest numeric prefix of a string and ignores whatever trails
//! it, the way browser `parseFloat` treats `data-order` hints and form input.

/// Parse the longest leading float in `input`
///
/// Leading whitespace is skipped. Accepts an optional sign, digits with an
/// optional fraction and exponent, or `Infinity`. Returns `None` when the
/// prefix contains no digit.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            end = 1;
            true
        }
        Some(b'+') => {
            end = 1;
            false
        }
        _ => false,
    };

    if s[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digit_count = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digit_count += frac_end - frac_start;
        end = frac_end;
    }

    if digit_count == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_float_prefix("42"), Some(42.0));
        assert_eq!(parse_float_prefix("-42.5"), Some(-42.5));
        assert_eq!(parse_float_prefix("+7"), Some(7.0));
        assert_eq!(parse_float_prefix("  3.25"), Some(3.25));
    }

    #[test]
    fn test_partial_fractions() {
        assert_eq!(parse_float_prefix("5."), Some(5.0));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("-.25"), Some(-0.25));
    }

    #[test]
    fn test_trailing_garbage_ignored() {
        assert_eq!(parse_float_prefix("1234.56 MXN"), Some(1234.56));
        assert_eq!(parse_float_prefix("1234.5.6"), Some(1234.5));
        assert_eq!(parse_float_prefix("12-3"), Some(12.0));
        assert_eq!(parse_float_prefix("1,234"), Some(1.0));
    }

    #[test]
    fn test_exponent() {
        assert_eq!(parse_float_prefix("1e3"), Some(1000.0));
        assert_eq!(parse_float_prefix("2.5E-1"), Some(0.25));
        // Dangling exponent marker is not part of the number
        assert_eq!(parse_float_prefix("7e"), Some(7.0));
        assert_eq!(parse_float_prefix("7e+"), Some(7.0));
    }

    #[test]
    fn test_infinity() {
        assert_eq!(parse_float_prefix("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float_prefix("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("-"), None);
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("-."), None);
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix("$12"), None);
        assert_eq!(parse_float_prefix("--5"), None);
    }
}
