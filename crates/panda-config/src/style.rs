//! Style value types.
//!
//! A global style object maps a selector to an ordered set of declarations.
//! Insertion order is preserved end to end, so rules serialize in the order
//! they were written.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Declarations of a single rule: property name → value.
pub type Declarations = IndexMap<String, StyleValue>;

/// Selector → declarations, e.g. `{ ":root": { "--x": 0 } }`.
pub type GlobalStyleObject = IndexMap<String, Declarations>;

/// A declaration value.
///
/// Numbers and strings are kept apart: the engine prints numbers unit-less,
/// while strings are emitted verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    String(String),
}

impl StyleValue {
    pub fn is_number(&self) -> bool {
        matches!(self, StyleValue::Number(_))
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::String(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::String(s)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => f.write_str(&format_number(*n)),
            StyleValue::String(s) => f.write_str(s),
        }
    }
}

/// Largest magnitude where every whole `f64` converts to `i64` exactly.
const EXACT_INT_BOUND: f64 = 1e15;

/// Format a number, removing `.0` for integers.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < EXACT_INT_BOUND {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
