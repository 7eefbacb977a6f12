//! Numeric values carried inside display text.
//!
//! Both parsers are total: text without a number degrades to a fallback
//! instead of failing, so one malformed catalog record never breaks a query.

use std::sync::LazyLock;

use regex::Regex;

static FEE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\d+(?:\.\d+)?)").expect("valid fee pattern"));

static RATING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\+?").expect("valid rating pattern"));

/// Extracts the first `$<number>` amount, e.g. `2.5` from `$2.5 Delivery Fee`.
///
/// Returns `f64::INFINITY` when there is no such amount, which makes the item
/// maximally expensive for fee filters and fee sorting.
pub fn parse_delivery_fee(text: &str) -> f64 {
    FEE_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(f64::INFINITY)
}

/// Extracts the leading number of a rating option such as `4.5+` or `5`.
///
/// Returns `0.0` for text without a number (no effective floor).
pub fn parse_rating_floor(text: &str) -> f64 {
    RATING_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}
