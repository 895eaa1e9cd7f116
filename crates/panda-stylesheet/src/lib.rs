//! Panda Style-sheet Engine
//!
//! Accepts global CSS rule sets, keeps them layered by origin, and serializes
//! them into the `base` cascade layer.
//!
//! ```text
//! process_global_css(Defaults, resets)  ─┐
//! process_global_css(User, overrides)   ─┴→ Stylesheet → to_css()
//! ```
//!
//! # Example
//!
//! ```
//! use panda_config::GlobalStyleObject;
//! use panda_stylesheet::{GlobalOrigin, Stylesheet, StylesheetEngine};
//!
//! let mut sheet = Stylesheet::new();
//! sheet.process_global_css(GlobalOrigin::User, &GlobalStyleObject::new()).unwrap();
//! assert_eq!(sheet.to_css(), "");
//! ```

pub mod sheet;

use panda_config::GlobalStyleObject;

pub use sheet::Stylesheet;

/// Where a global rule set comes from.
///
/// Origins are ordered: every `Defaults` rule is emitted before any `User`
/// rule, so user rules can override the resets at equal specificity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GlobalOrigin {
    /// Built-in resets shipped with the toolchain.
    Defaults,
    /// `globalCss` from the user configuration.
    User,
}

impl GlobalOrigin {
    /// All origins in emission order.
    pub const ALL: [GlobalOrigin; 2] = [GlobalOrigin::Defaults, GlobalOrigin::User];
}

/// Rule ingestion contract of a style-sheet engine.
pub trait StylesheetEngine {
    /// Accumulate a global rule set for later serialization.
    fn process_global_css(
        &mut self,
        origin: GlobalOrigin,
        rules: &GlobalStyleObject,
    ) -> Result<(), StylesheetError>;
}

/// Rule ingestion error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StylesheetError {
    #[error("Empty selector in {origin:?} global css")]
    EmptySelector { origin: GlobalOrigin },

    #[error("Empty property name in rule `{selector}`")]
    EmptyProperty { selector: String },
}
