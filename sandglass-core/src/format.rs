//! Significant-figure formatting for projection summaries.
//!
//! Mirrors printf `%g`: fixed notation for moderate exponents, scientific
//! otherwise, trailing zeros stripped.

pub fn format_sig(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if !value.is_finite() {
        return format!("{value}");
    }
    if value == 0.0 {
        return "0".to_string();
    }
    // Render scientifically first; rounding there settles exponent bumps
    // (99999.99 at 5 digits is 1e+05, not 100000).
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exp) = split_exponent(&sci);
    if exp < -4 || exp >= digits as i32 {
        format!(
            "{}e{}{:02}",
            trim_zeros(mantissa),
            if exp < 0 { "-" } else { "+" },
            exp.abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        trim_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn split_exponent(sci: &str) -> (&str, i32) {
    match sci.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or(0)),
        None => (sci, 0),
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
