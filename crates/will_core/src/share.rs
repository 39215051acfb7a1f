//! Per-asset beneficiary share bookkeeping.

use std::fmt;

use serde::Serialize;
use shared::domain::SHARE_PERCENTAGE_FIELD;

use crate::collection::Collection;

pub const FULL_SHARE: f64 = 100.0;
pub const OVER_ALLOCATION_WARNING: &str =
    "Total share exceeds 100%. Please adjust the percentages.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareStatus {
    Under,
    Exact,
    Over,
}

impl ShareStatus {
    /// `Exact` only when the total is bit-for-bit 100.0. Totals that merely
    /// print as 100 after float rounding land in `Under` or `Over`.
    pub fn classify(total: f64) -> Self {
        if total == FULL_SHARE {
            Self::Exact
        } else if total > FULL_SHARE {
            Self::Over
        } else {
            Self::Under
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShareAllocation {
    total: f64,
    status: ShareStatus,
}

impl ShareAllocation {
    pub fn from_collection(beneficiaries: &Collection) -> Self {
        Self::from_values(
            beneficiaries
                .iter()
                .map(|record| record.get(SHARE_PERCENTAGE_FIELD)),
        )
    }

    pub fn from_values<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let total = values
            .into_iter()
            .fold(0.0_f64, |total, raw| total + parse_share(raw));
        Self {
            total,
            status: ShareStatus::classify(total),
        }
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn status(&self) -> ShareStatus {
        self.status
    }

    pub fn is_over_allocated(&self) -> bool {
        self.status == ShareStatus::Over
    }

    /// Fill level for a progress bar, capped at 100.
    pub fn progress_percent(&self) -> f64 {
        self.total.min(FULL_SHARE)
    }

    pub fn warning(&self) -> Option<&'static str> {
        self.is_over_allocated().then_some(OVER_ALLOCATION_WARNING)
    }
}

impl fmt::Display for ShareAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% / 100%", self.total)
    }
}

/// Parses the longest leading decimal number in `raw`, ignoring leading
/// whitespace and any trailing garbage (`"40%"` is 40). Anything without a
/// leading number, and negative values, count as 0.
pub fn parse_share(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let prefix = &trimmed[..numeric_prefix_len(trimmed)];
    match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut idx = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        idx += 1;
    }

    let int_start = idx;
    while bytes.get(idx).is_some_and(u8::is_ascii_digit) {
        idx += 1;
    }
    let mut digits = idx - int_start;

    if bytes.get(idx) == Some(&b'.') {
        let frac_start = idx + 1;
        let mut end = frac_start;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if digits > 0 || end > frac_start {
            digits += end - frac_start;
            idx = end;
        }
    }

    if digits == 0 {
        return 0;
    }

    if matches!(bytes.get(idx), Some(b'e' | b'E')) {
        let mut end = idx + 1;
        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let exp_start = end;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if end > exp_start {
            idx = end;
        }
    }

    idx
}

#[cfg(test)]
#[path = "tests/share_tests.rs"]
mod tests;
