//! Text rendering of polynomial terms.
//!
//! Coefficients use the general notation of a C++ output stream with
//! default settings (`%g`, six significant digits), so rendered lines match
//! fixtures produced by the stream-based writers this format comes from.

use std::fmt::{self, Write};

/// Significant digits in general notation.
const PRECISION: usize = 6;

/// Formats `value` in `%g` notation.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub(crate) fn general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // The exponent must come from the value after rounding to PRECISION digits.
    let sci = format!("{:.*e}", PRECISION - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return value.to_string();
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= PRECISION as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.unsigned_abs())
    } else {
        let decimals = (PRECISION as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Writes `[ t0 + t1 + ... ]`, or `[ ]` when there are no terms.
///
/// Each term is `c` for exponent 0, `c x` for exponent 1 and `c x^k`
/// otherwise.
pub(crate) fn write_terms<W, I>(out: &mut W, terms: I) -> fmt::Result
where
    W: Write,
    I: IntoIterator<Item = (usize, f64)>,
{
    out.write_char('[')?;
    let mut first = true;
    for (index, value) in terms {
        out.write_str(if first { " " } else { " + " })?;
        out.write_str(&general(value))?;
        match index {
            0 => {}
            1 => out.write_str(" x")?,
            _ => write!(out, " x^{index}")?,
        }
        first = false;
    }
    out.write_str(" ]")
}
