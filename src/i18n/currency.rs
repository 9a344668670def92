//! Per-locale currency formatting.
//!
//! Prices are rendered with the grouping and decimal conventions of the
//! active locale but a fixed USD unit across all locales. The single
//! currency is a deliberate simplification carried over from the site's
//! pricing model, not a localization gap.

use crate::i18n::Locale;

/// Grouping/decimal conventions and currency placement for one locale.
struct Conventions {
    group_separator: char,
    decimal_separator: char,
    /// Symbol placed before the number (e.g., "$" for en-US)
    prefix: &'static str,
    /// Symbol placed after the number (e.g., " $" for de-DE)
    suffix: &'static str,
}

fn conventions_for(locale: Locale) -> Conventions {
    match locale.code() {
        "de" => Conventions {
            group_separator: '.',
            decimal_separator: ',',
            prefix: "",
            suffix: "\u{a0}$",
        },
        "fr" => Conventions {
            // fr-FR groups with narrow no-break spaces
            group_separator: '\u{202f}',
            decimal_separator: ',',
            prefix: "",
            suffix: "\u{a0}$",
        },
        _ => Conventions {
            group_separator: ',',
            decimal_separator: '.',
            prefix: "$",
            suffix: "",
        },
    }
}

/// Format `value` as a price under `locale`'s conventions.
///
/// Always renders two decimal places. The currency unit is USD regardless
/// of locale.
///
/// # Examples
/// `format_currency(Locale::ENGLISH, 18.5)` -> `"$18.50"`
/// `format_currency(Locale::GERMAN, 18.5)` -> `"18,50 $"` (no-break space)
pub fn format_currency(locale: Locale, value: f64) -> String {
    let conventions = conventions_for(locale);

    // Round to cents first so grouping operates on the final digits.
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let grouped = group_digits(whole, conventions.group_separator);
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };

    format!(
        "{}{}{}{}{:02}{}",
        sign, conventions.prefix, grouped, conventions.decimal_separator, fraction, conventions.suffix
    )
}

/// Insert `separator` between each group of three digits, right to left.
fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Per-Locale Conventions ====================

    #[test]
    fn test_format_currency_english() {
        assert_eq!(format_currency(Locale::ENGLISH, 18.5), "$18.50");
    }

    #[test]
    fn test_format_currency_german() {
        assert_eq!(format_currency(Locale::GERMAN, 18.5), "18,50\u{a0}$");
    }

    #[test]
    fn test_format_currency_french() {
        assert_eq!(format_currency(Locale::FRENCH, 18.5), "18,50\u{a0}$");
    }

    #[test]
    fn test_same_currency_unit_across_locales() {
        for locale in Locale::all() {
            assert!(
                format_currency(locale, 18.5).contains('$'),
                "locale '{}' dropped the fixed USD unit",
                locale
            );
        }
    }

    // ==================== Grouping ====================

    #[test]
    fn test_grouping_english() {
        assert_eq!(format_currency(Locale::ENGLISH, 1234.5), "$1,234.50");
        assert_eq!(format_currency(Locale::ENGLISH, 1234567.89), "$1,234,567.89");
    }

    #[test]
    fn test_grouping_german() {
        assert_eq!(format_currency(Locale::GERMAN, 1234.5), "1.234,50\u{a0}$");
    }

    #[test]
    fn test_grouping_french_uses_narrow_space() {
        assert_eq!(
            format_currency(Locale::FRENCH, 1234.5),
            "1\u{202f}234,50\u{a0}$"
        );
    }

    #[test]
    fn test_no_grouping_below_thousand() {
        assert_eq!(format_currency(Locale::ENGLISH, 999.99), "$999.99");
    }

    // ==================== Rounding & Edge Cases ====================

    #[test]
    fn test_rounds_to_cents() {
        assert_eq!(format_currency(Locale::ENGLISH, 19.759), "$19.76");
        assert_eq!(format_currency(Locale::ENGLISH, 16.0), "$16.00");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_currency(Locale::ENGLISH, 0.0), "$0.00");
    }

    #[test]
    fn test_negative_value() {
        assert_eq!(format_currency(Locale::ENGLISH, -18.5), "-$18.50");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(format_currency(Locale::ENGLISH, -0.001), "$0.00");
    }
}
