//! Number rendering for console output and step descriptions.

/// Significant digits shown for every number.
pub(crate) const PRECISION: usize = 6;

/// Render a number in general format with [`PRECISION`] significant digits.
///
/// Fixed notation is used while the decimal exponent is in `-4..PRECISION`,
/// scientific notation (`1.5e+07`) otherwise. Trailing zeros and a dangling
/// decimal point are stripped in both forms.
///
/// # Example
///
/// ```rust
/// use recall_calc::console::format_number;
///
/// assert_eq!(format_number(15.0), "15");
/// assert_eq!(format_number(0.1 + 0.2), "0.3");
/// assert_eq!(format_number(10.0 / 3.0), "3.33333");
/// assert_eq!(format_number(1234567.0), "1.23457e+06");
/// assert_eq!(format_number(0.00001), "1e-05");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to PRECISION digits first gives the exponent after carry,
    // so 999999.5 is classified by 1e6 rather than 9.99999e5.
    let scientific = format!("{:.*e}", PRECISION - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (PRECISION as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_have_no_fraction() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(100000.0), "100000");
    }

    #[test]
    fn fractions_are_trimmed() {
        assert_eq!(format_number(4.5), "4.5");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(2.0 / 3.0), "0.666667");
        assert_eq!(format_number(0.0001), "0.0001");
    }

    #[test]
    fn large_and_small_switch_to_scientific() {
        assert_eq!(format_number(1_000_000.0), "1e+06");
        assert_eq!(format_number(999_999.5), "1e+06");
        assert_eq!(format_number(-2.5e10), "-2.5e+10");
        assert_eq!(format_number(1.0e100), "1e+100");
        assert_eq!(format_number(0.000012345), "1.2345e-05");
    }

    #[test]
    fn zero_keeps_its_sign() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "-0");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(f64::NAN), "nan");
    }
}
