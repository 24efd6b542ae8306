//! Float to text for ASCII STL and generated scripts.

/// Shortest text that parses back to exactly `value`.
///
/// Magnitudes in `[1e-5, 1e15)` and zero print as plain decimals, the rest
/// in scientific notation. Non-finite values print as `NaN`, `inf` and
/// `-inf`, all of which `f64::from_str` accepts.
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if !value.is_finite() || magnitude == 0.0 || (1e-5..1e15).contains(&magnitude) {
        // Display never emits a trailing ".0" for integral f64 values.
        format!("{}", value)
    } else {
        format!("{:e}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn integers_have_no_fraction() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(-5.0), "-5");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn fractions_are_shortest() {
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(f64::from(0.1f32)), "0.10000000149011612");
    }

    #[test]
    fn extremes_use_exponent() {
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(2.5e20), "2.5e20");
    }

    #[test]
    fn non_finite_values_are_readable() {
        assert!(format_number(f64::NAN).parse::<f64>().unwrap().is_nan());
        assert_eq!(format_number(f64::INFINITY).parse::<f64>(), Ok(f64::INFINITY));
        assert_eq!(format_number(f64::NEG_INFINITY).parse::<f64>(), Ok(f64::NEG_INFINITY));
    }

    proptest! {
        #[test]
        fn text_round_trips_exactly(v in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
            let parsed: f64 = format_number(v).parse().unwrap();
            prop_assert_eq!(parsed.to_bits(), v.to_bits());
        }
    }
}
