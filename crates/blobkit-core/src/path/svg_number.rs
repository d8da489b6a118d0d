//! Number formatting for SVG attributes and path data

use std::fmt;

const EXPONENT_BELOW: f64 = 1e-6;
const EXPONENT_FROM: f64 = 1e21;

/// Shortest round-trip decimal form of an `f64`
///
/// Integral values print without a fractional part (`150`, not `150.0`) and
/// negative zero prints as `0`. Magnitudes below `1e-6` or from `1e21` up use
/// exponent form (`3.67e-15`, `1e+21`), as browsers serialize numbers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SvgNumber(pub f64);

impl fmt::Display for SvgNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v == 0.0 {
            f.write_str("0")
        } else if v.is_infinite() {
            f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })
        } else if v.abs() < EXPONENT_BELOW || v.abs() >= EXPONENT_FROM {
            let formatted = format!("{v:e}");
            match formatted.split_once('e') {
                Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
                _ => f.write_str(&formatted),
            }
        } else {
            write!(f, "{v}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_like_path_data() {
        assert_eq!(SvgNumber(150.0).to_string(), "150");
        assert_eq!(SvgNumber(-2.0).to_string(), "-2");
        assert_eq!(SvgNumber(0.5).to_string(), "0.5");
        assert_eq!(SvgNumber(0.1 + 0.2).to_string(), "0.30000000000000004");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        let near_zero = (std::f64::consts::FRAC_PI_2).cos() * 60.0;
        assert!(SvgNumber(near_zero).to_string().contains("e-15"));
        assert_eq!(SvgNumber(3.67e-15).to_string(), "3.67e-15");
        assert_eq!(SvgNumber(-1.5e-7).to_string(), "-1.5e-7");
        assert_eq!(SvgNumber(1e-6).to_string(), "0.000001");
        assert_eq!(SvgNumber(1e21).to_string(), "1e+21");
        assert_eq!(SvgNumber(1.2e20).to_string(), "120000000000000000000");
    }

    #[test]
    fn negative_zero_is_plain_zero() {
        assert_eq!(SvgNumber(-0.0).to_string(), "0");
    }
}
