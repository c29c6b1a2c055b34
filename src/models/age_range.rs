//! Age-range interval parsing and display.
//!
//! The service encodes program age ranges as a half-open interval string,
//! e.g. `"[3,6)"` meaning ages 3 through 5 inclusive. Parsing is lenient:
//! anything that does not match the interval shape yields `None`, which the
//! view layer renders as "no age badge" rather than an error.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn interval_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // "[min,max)" with optional internal whitespace.
        Regex::new(r"^\s*\[\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)\s*$").expect("static pattern")
    })
}

/// A parsed half-open age interval `[min, max_exclusive)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u32,
    pub max_exclusive: u32,
}

impl AgeRange {
    /// Parse an encoded interval string. Returns `None` for anything
    /// malformed (empty string, missing brackets, reversed bounds).
    pub fn parse(raw: &str) -> Option<Self> {
        let caps = interval_pattern().captures(raw)?;
        let min: u32 = caps.get(1)?.as_str().parse().ok()?;
        let max_exclusive: u32 = caps.get(2)?.as_str().parse().ok()?;
        if max_exclusive <= min {
            return None;
        }
        Some(Self { min, max_exclusive })
    }

    /// Inclusive upper bound, `max_exclusive - 1`.
    pub fn max_inclusive(&self) -> u32 {
        self.max_exclusive - 1
    }

    /// Display label with the inclusive upper bound: `[3,6)` → "Ages 3-5".
    /// Single-year ranges collapse: `[5,6)` → "Age 5".
    pub fn label(&self) -> String {
        let max = self.max_inclusive();
        if max == self.min {
            format!("Age {}", self.min)
        } else {
            format!("Ages {}-{}", self.min, max)
        }
    }

    /// Parse-and-label in one step; the common path for view mapping.
    pub fn label_for(raw: &str) -> Option<String> {
        Self::parse(raw).map(|r| r.label())
    }
}
