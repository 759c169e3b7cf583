//! Numeric text conversion.

/// Formats a number as canonical JSON text.
///
/// Non-finite values have no JSON encoding and become `null`. Negative
/// zero normalizes to `0` so structurally-equal documents cannot differ
/// by a sign bit. Finite values use the shortest decimal text that
/// round-trips, with integral values printed without a fraction.
///
/// # Examples
///
/// ```
/// use json_stable::number::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(3.14), "3.14");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(f64::NAN), "null");
/// assert_eq!(format_number(f64::INFINITY), "null");
/// ```
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return "null".to_owned();
    }
    if n == 0.0 {
        // also matches -0.0
        return "0".to_owned();
    }
    n.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-17.0), "-17");
        assert_eq!(format_number(1e6), "1000000");
    }

    #[test]
    fn fractional_values_are_shortest_round_trip() {
        assert_eq!(format_number(3.14), "3.14");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(-0.5), "-0.5");
    }

    #[test]
    fn negative_zero_normalizes() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn non_finite_values_become_null() {
        assert_eq!(format_number(f64::NAN), "null");
        assert_eq!(format_number(f64::INFINITY), "null");
        assert_eq!(format_number(f64::NEG_INFINITY), "null");
    }

    #[test]
    fn output_round_trips() {
        for n in [3.14, 0.1, 12345.6789, -2.5e-3, 9007199254740991.0] {
            let text = format_number(n);
            assert_eq!(text.parse::<f64>().unwrap(), n);
        }
    }
}
