//! Moneyline conversions for display. None of this feeds the parlay maths.

/// American moneyline ("+150", "-120") to decimal odds.
pub fn moneyline_to_decimal(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let n = s.strip_prefix('+').unwrap_or(s).parse::<i64>().ok()?;
    if n >= 100 {
        Some(1.0 + (n as f64) / 100.0)
    } else if n <= -100 {
        Some(1.0 + 100.0 / (-(n as f64)))
    } else {
        None // |line| < 100 is not a valid moneyline
    }
}

pub fn format_decimal(d: f64) -> String {
    format!("{:.3}", d)
}

pub fn format_fractional(d: f64) -> String {
    if d <= 1.0 {
        return "—".into();
    }
    let (num, den) = approx_fraction(d - 1.0, MAX_FRACTION_DENOMINATOR);
    format!("{}/{}", num, den)
}

/// Bookmaker-style fractions stay small.
const MAX_FRACTION_DENOMINATOR: i64 = 100;

/// Break-even probability for decimal odds, vig included.
pub fn break_even_probability(d: f64) -> Option<f64> {
    if d > 1.0 {
        Some(1.0 / d)
    } else {
        None
    }
}

/// Best convergent of `x`'s continued fraction with denominator <= `max_den`.
fn approx_fraction(x: f64, max_den: i64) -> (i64, i64) {
    let mut rest = x;
    let mut term = rest.floor();
    // (numerator, denominator) of the previous and current convergents
    let mut prev = (1_i64, 0_i64);
    let mut best = (term as i64, 1_i64);
    loop {
        let frac = rest - term;
        if frac.abs() < 1e-9 {
            return best;
        }
        rest = 1.0 / frac;
        term = rest.floor();
        let a = term as i64;
        let next = (prev.0 + a * best.0, prev.1 + a * best.1);
        if next.1 > max_den {
            return best;
        }
        prev = best;
        best = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moneyline_to_decimal() {
        assert_eq!(moneyline_to_decimal("+150"), Some(2.5));
        assert_eq!(moneyline_to_decimal("150"), Some(2.5));
        assert_eq!(moneyline_to_decimal("-200"), Some(1.5));
        assert_eq!(moneyline_to_decimal("+100"), Some(2.0));
        assert_eq!(moneyline_to_decimal("-50"), None);
        assert_eq!(moneyline_to_decimal("even"), None);
        assert_eq!(moneyline_to_decimal(""), None);
    }

    #[test]
    fn test_format_fractional() {
        assert_eq!(format_fractional(2.5), "3/2");
        assert_eq!(format_fractional(1.5), "1/2");
        assert_eq!(format_fractional(3.0), "2/1");
        assert_eq!(format_fractional(1.0), "—");
        // -110 is 1.909..., 10/11 exactly
        assert_eq!(format_fractional(1.0 + 100.0 / 110.0), "10/11");
        // the convergent after 15/7 is 227/106, past the cap
        assert_eq!(format_fractional(std::f64::consts::PI), "15/7");
    }

    #[test]
    fn test_break_even_probability() {
        assert_eq!(break_even_probability(2.0), Some(0.5));
        assert_eq!(break_even_probability(1.0), None);
    }
}
