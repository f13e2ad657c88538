//! Number formatting for progress lines.

use std::fmt;

/// Formats an `f64` with the shortest digits that round-trip, always showing
/// it as a float.
///
/// Whole numbers keep a trailing `.0` (`3.0`). Magnitudes below `1e-4` or at
/// least `1e16` switch to exponent form with a signed, two-digit exponent
/// (`1e-07`, `1.5e+16`). Non-finite values print as `inf`, `-inf`, `nan`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Float(pub f64);

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
        }

        let scientific = format!("{value:e}");
        let (mantissa, exponent) = scientific
            .split_once('e')
            .unwrap_or((scientific.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);

        if (-4..16).contains(&exponent) {
            let plain = value.to_string();
            if plain.contains('.') {
                f.write_str(&plain)
            } else {
                write!(f, "{plain}.0")
            }
        } else {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
        }
    }
}
