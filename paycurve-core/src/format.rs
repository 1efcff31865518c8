//! Locale-aware number formatting for reports and chart labels.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display locale for grouped numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Narrow no-break space grouping, comma decimal: `28 000`, `12,0 %`.
    #[default]
    Fr,
    /// Comma grouping, dot decimal: `28,000`, `12.0%`.
    En,
}

impl Locale {
    fn group_separator(self) -> char {
        match self {
            Locale::Fr => '\u{202F}',
            Locale::En => ',',
        }
    }

    fn decimal_separator(self) -> char {
        match self {
            Locale::Fr => ',',
            Locale::En => '.',
        }
    }

    fn percent_suffix(self) -> &'static str {
        match self {
            Locale::Fr => "\u{202F}%",
            Locale::En => "%",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fr" | "fr-fr" => Ok(Locale::Fr),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(format!("unsupported locale '{other}' (expected fr or en)")),
        }
    }
}

/// Whole currency amount with thousands grouping, no decimals.
pub fn format_amount(value: f64, locale: Locale) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let rounded = value.round();
    let digits = group_digits(&format!("{:.0}", rounded.abs()), locale.group_separator());
    if rounded < 0.0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Signed percentage with one decimal: `+12.0%`, `-6.7%`.
pub fn format_percent(value: f64, locale: Locale) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let body = format!("{:.1}", value.abs()).replace('.', &locale.decimal_separator().to_string());
    let rounds_to_zero = body.chars().all(|c| c == '0' || !c.is_ascii_digit());
    let sign = match value {
        _ if rounds_to_zero => "",
        v if v > 0.0 => "+",
        _ => "-",
    };
    format!("{sign}{body}{}", locale.percent_suffix())
}

/// Unsigned share with one decimal, for percentiles: `37.4%`.
pub fn format_share(value: f64, locale: Locale) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let body = format!("{value:.1}").replace('.', &locale.decimal_separator().to_string());
    format!("{body}{}", locale.percent_suffix())
}

/// Axis label in thousands: `62500` -> `62k`.
pub fn format_compact_thousands(value: f64) -> String {
    format!("{:.0}k", value / 1000.0)
}

/// Scaled density with two decimals.
pub fn format_density(value: f64) -> String {
    format!("{value:.2}")
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len_utf8());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
