//! Display prices and lenient amount parsing.
//!
//! Catalog prices are authored as display strings (e.g. `"$2,400"`) so the
//! storefront renders them verbatim. Cart math needs the numeric amount, so
//! [`DisplayPrice::amount`] strips everything except digits and the decimal
//! point and parses the remainder as a [`Decimal`]. A string with no usable
//! number contributes zero rather than failing; totals must never abort a
//! page render over a malformed catalog entry.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A price as authored for display, e.g. `"$2,400"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayPrice(String);

impl DisplayPrice {
    /// Create a display price from any string-like value.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Get the display string exactly as authored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the numeric amount out of the display string.
    ///
    /// Strips every character except ASCII digits and `.`, then parses the
    /// remainder as a decimal. Returns [`Decimal::ZERO`] when nothing
    /// parseable remains.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        let numeric: String = self
            .0
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        numeric.parse().unwrap_or(Decimal::ZERO)
    }
}

impl std::fmt::Display for DisplayPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DisplayPrice {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// Format a decimal amount as a USD display string.
///
/// Whole amounts render without cents (`"$4,100"`); fractional amounts are
/// rounded to two decimal places (`"$4,457.36"`). Matches how the storefront
/// renders subtotals and order totals.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let total_cents = (rounded.abs() * Decimal::from(100))
        .round()
        .to_i128()
        .unwrap_or(0);
    let dollars = group_thousands(total_cents / 100);
    let cents = total_cents % 100;

    if cents == 0 {
        format!("{sign}${dollars}")
    } else {
        format!("{sign}${dollars}.{cents:02}")
    }
}

/// Group a non-negative integer with comma thousands separators.
fn group_thousands(mut value: i128) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut groups = Vec::new();
    while value > 0 {
        groups.push((value % 1000, value >= 1000));
        value /= 1000;
    }

    groups
        .iter()
        .rev()
        .map(|&(group, padded)| {
            if padded {
                format!("{group:03}")
            } else {
                group.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}
