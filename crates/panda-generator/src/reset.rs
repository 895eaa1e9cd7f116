//! Built-in global resets.
//!
//! Filter and transform utilities compose their shorthands from these custom
//! properties, so every element needs a neutral value for each of them. The
//! `/*!*/ /*!*/` value is a cascade breaker: it is valid inside `filter` and
//! `backdrop-filter` but contributes nothing until a utility sets it.

use panda_config::{Declarations, GlobalStyleObject, StyleValue};

/// Cascade breaker placeholder.
pub const CASCADE_BREAKER: &str = "/*!*/ /*!*/";

/// Selector matching every element, its generated content and `::backdrop`.
pub const UNIVERSAL_SELECTOR: &str = "*, *::before, *::after, ::backdrop";

/// A reset value. Numbers stay numbers so the engine prints them unit-less.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResetValue {
    Str(&'static str),
    Num(f64),
}

impl From<ResetValue> for StyleValue {
    fn from(value: ResetValue) -> Self {
        match value {
            ResetValue::Str(s) => StyleValue::String(s.to_string()),
            ResetValue::Num(n) => StyleValue::Number(n),
        }
    }
}

type ResetRule = (&'static str, &'static [(&'static str, ResetValue)]);

const BREAK: ResetValue = ResetValue::Str(CASCADE_BREAKER);

/// The reset table, in emission order.
pub const RESET_RULES: &[ResetRule] = &[
    (
        ":root",
        &[("--made-with-panda", ResetValue::Str("'🐼'"))],
    ),
    (
        UNIVERSAL_SELECTOR,
        &[
            ("--blur", BREAK),
            ("--brightness", BREAK),
            ("--contrast", BREAK),
            ("--grayscale", BREAK),
            ("--hue-rotate", BREAK),
            ("--invert", BREAK),
            ("--saturate", BREAK),
            ("--sepia", BREAK),
            ("--drop-shadow", BREAK),
            ("--backdrop-blur", BREAK),
            ("--backdrop-brightness", BREAK),
            ("--backdrop-contrast", BREAK),
            ("--backdrop-grayscale", BREAK),
            ("--backdrop-hue-rotate", BREAK),
            ("--backdrop-invert", BREAK),
            ("--backdrop-opacity", BREAK),
            ("--backdrop-saturate", BREAK),
            ("--backdrop-sepia", BREAK),
            ("--scroll-snap-strictness", ResetValue::Str("proximity")),
            ("--border-spacing-x", ResetValue::Num(0.0)),
            ("--border-spacing-y", ResetValue::Num(0.0)),
            ("--translate-x", ResetValue::Num(0.0)),
            ("--translate-y", ResetValue::Num(0.0)),
            ("--rotate", ResetValue::Num(0.0)),
            ("--skew-x", ResetValue::Num(0.0)),
            ("--skew-y", ResetValue::Num(0.0)),
            ("--scale-x", ResetValue::Num(1.0)),
            ("--scale-y", ResetValue::Num(1.0)),
        ],
    ),
];

/// Build a fresh copy of the reset rule set.
pub fn reset_rule_set() -> GlobalStyleObject {
    RESET_RULES
        .iter()
        .map(|(selector, decls)| {
            let decls: Declarations = decls
                .iter()
                .map(|(property, value)| (property.to_string(), StyleValue::from(*value)))
                .collect();
            (selector.to_string(), decls)
        })
        .collect()
}

/// The reset table spelled out by hand, independent of `RESET_RULES`.
#[cfg(test)]
pub(crate) fn literal_reset_rules() -> GlobalStyleObject {
    let breaker = || StyleValue::String("/*!*/ /*!*/".to_string());

    let mut root = Declarations::new();
    root.insert("--made-with-panda".into(), StyleValue::String("'🐼'".into()));

    let mut universal = Declarations::new();
    universal.insert("--blur".into(), breaker());
    universal.insert("--brightness".into(), breaker());
    universal.insert("--contrast".into(), breaker());
    universal.insert("--grayscale".into(), breaker());
    universal.insert("--hue-rotate".into(), breaker());
    universal.insert("--invert".into(), breaker());
    universal.insert("--saturate".into(), breaker());
    universal.insert("--sepia".into(), breaker());
    universal.insert("--drop-shadow".into(), breaker());
    universal.insert("--backdrop-blur".into(), breaker());
    universal.insert("--backdrop-brightness".into(), breaker());
    universal.insert("--backdrop-contrast".into(), breaker());
    universal.insert("--backdrop-grayscale".into(), breaker());
    universal.insert("--backdrop-hue-rotate".into(), breaker());
    universal.insert("--backdrop-invert".into(), breaker());
    universal.insert("--backdrop-opacity".into(), breaker());
    universal.insert("--backdrop-saturate".into(), breaker());
    universal.insert("--backdrop-sepia".into(), breaker());
    universal.insert(
        "--scroll-snap-strictness".into(),
        StyleValue::String("proximity".into()),
    );
    universal.insert("--border-spacing-x".into(), StyleValue::Number(0.0));
    universal.insert("--border-spacing-y".into(), StyleValue::Number(0.0));
    universal.insert("--translate-x".into(), StyleValue::Number(0.0));
    universal.insert("--translate-y".into(), StyleValue::Number(0.0));
    universal.insert("--rotate".into(), StyleValue::Number(0.0));
    universal.insert("--skew-x".into(), StyleValue::Number(0.0));
    universal.insert("--skew-y".into(), StyleValue::Number(0.0));
    universal.insert("--scale-x".into(), StyleValue::Number(1.0));
    universal.insert("--scale-y".into(), StyleValue::Number(1.0));

    let mut rules = GlobalStyleObject::new();
    rules.insert(":root".into(), root);
    rules.insert("*, *::before, *::after, ::backdrop".into(), universal);
    rules
}
