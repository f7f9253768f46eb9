// ============================================================================
// Decimal Rendering
// Turns a major-unit f64 into locale-formatted text
// ============================================================================

use super::locale::{DigitGrouping, LocaleConventions, SymbolPlacement};
use super::options::FormatOptions;

/// Render a major-unit amount with the given conventions and options.
///
/// Non-finite amounts render as `NaN`, `∞`, or `-∞`; an unguarded division
/// by zero upstream is therefore visible in the output rather than hidden.
/// Negative amounts that round to zero render unsigned: `0`, never `-0`.
pub fn render(value: f64, conventions: &LocaleConventions, options: &FormatOptions) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let negative = value < 0.0;
    let max_digits = options.effective_maximum_fraction_digits() as usize;
    let min_digits = options.minimum_fraction_digits as usize;

    // Round the magnitude to the maximum fraction digits. Ties resolve the
    // way the standard formatter resolves them (to even).
    let rounded = format!("{:.*}", max_digits, value.abs());
    let (integer, fraction) = match rounded.split_once('.') {
        Some((i, f)) => (i, trim_fraction(f, min_digits)),
        None => (rounded.as_str(), ""),
    };

    let mut digits = if options.use_grouping {
        group_digits(integer, conventions.group_separator, conventions.grouping)
    } else {
        integer.to_string()
    };
    if !fraction.is_empty() {
        digits.push(conventions.decimal_separator);
        digits.push_str(fraction);
    }

    // -0 rounds away any sign worth showing
    let negative = negative && digits.bytes().any(|b| (b'1'..=b'9').contains(&b));

    let mut out = String::with_capacity(digits.len() + 4);
    if negative {
        out.push('-');
    }
    match &options.currency_symbol {
        Some(symbol) => match conventions.symbol_placement {
            SymbolPlacement::Prefix => {
                out.push_str(symbol);
                out.push_str(&digits);
            },
            SymbolPlacement::SuffixSpaced => {
                out.push_str(&digits);
                out.push('\u{00A0}');
                out.push_str(symbol);
            },
        },
        None => out.push_str(&digits),
    }
    out
}

/// Drop trailing fraction zeros, but never below the minimum digit count.
fn trim_fraction(fraction: &str, minimum: usize) -> &str {
    let significant = fraction.trim_end_matches('0').len();
    &fraction[..significant.max(minimum).min(fraction.len())]
}

/// Insert group separators into a run of integer digits.
fn group_digits(digits: &str, separator: char, grouping: DigitGrouping) -> String {
    let mut groups: Vec<&str> = Vec::new();
    let mut end = digits.len();
    let mut size = 3;
    while end > 0 {
        let start = end.saturating_sub(size);
        groups.push(&digits[start..end]);
        end = start;
        if grouping == DigitGrouping::SouthAsian {
            size = 2;
        }
    }
    groups.reverse();
    groups.join(&separator.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::locale;

    fn defaults() -> FormatOptions {
        FormatOptions::default()
    }

    fn en_us() -> &'static LocaleConventions {
        &locale::EN_US
    }

    #[test]
    fn test_grouped_two_decimals() {
        assert_eq!(render(1023.99, en_us(), &defaults()), "1,023.99");
        assert_eq!(render(1234567.5, en_us(), &defaults()), "1,234,567.5");
    }

    #[test]
    fn test_whole_amounts_drop_fraction() {
        assert_eq!(render(11.0, en_us(), &defaults()), "11");
        assert_eq!(render(1000.0, en_us(), &defaults()), "1,000");
    }

    #[test]
    fn test_grouping_disabled() {
        let opts = defaults().with_grouping(false);
        assert_eq!(render(1023.99, en_us(), &opts), "1023.99");
    }

    #[test]
    fn test_minimum_fraction_digits_pad() {
        let opts = defaults().with_minimum_fraction_digits(2);
        assert_eq!(render(11.0, en_us(), &opts), "11.00");
        assert_eq!(render(11.5, en_us(), &opts), "11.50");
    }

    #[test]
    fn test_maximum_fraction_digits_round() {
        let opts = defaults().with_maximum_fraction_digits(2);
        assert_eq!(render(3.333333, en_us(), &opts), "3.33");
        assert_eq!(render(3.336, en_us(), &opts), "3.34");
    }

    #[test]
    fn test_maximum_zero_digits() {
        let opts = defaults().with_maximum_fraction_digits(0);
        assert_eq!(render(1023.99, en_us(), &opts), "1,024");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(render(-1023.99, en_us(), &defaults()), "-1,023.99");
        // A negative amount that rounds to zero shows no sign
        let opts = defaults().with_maximum_fraction_digits(0);
        assert_eq!(render(-0.2, en_us(), &opts), "0");
    }

    #[test]
    fn test_german_conventions() {
        let de = locale::lookup("de-DE").unwrap();
        assert_eq!(render(1023.99, de, &defaults()), "1.023,99");
    }

    #[test]
    fn test_south_asian_grouping() {
        let en_in = locale::lookup("en-IN").unwrap();
        assert_eq!(render(1234567.0, en_in, &defaults()), "12,34,567");
        assert_eq!(render(1000.0, en_in, &defaults()), "1,000");
    }

    #[test]
    fn test_currency_symbol_prefix() {
        let opts = defaults().with_currency_symbol("$");
        assert_eq!(render(1023.99, en_us(), &opts), "$1,023.99");
        assert_eq!(render(-5.0, en_us(), &opts), "-$5");
    }

    #[test]
    fn test_currency_symbol_suffix() {
        let de = locale::lookup("de-DE").unwrap();
        let opts = defaults().with_currency_symbol("€");
        assert_eq!(render(1023.99, de, &opts), "1.023,99\u{00A0}€");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(render(f64::NAN, en_us(), &defaults()), "NaN");
        assert_eq!(render(f64::INFINITY, en_us(), &defaults()), "∞");
        assert_eq!(render(f64::NEG_INFINITY, en_us(), &defaults()), "-∞");
    }
}
