//! In-memory style-sheet.
//!
//! Collects global rules per origin and renders them as CSS inside
//! `@layer base`. Rules with the same selector and origin are merged: a later
//! declaration replaces the value but keeps its original position.

use indexmap::IndexMap;
use panda_config::GlobalStyleObject;
use tracing::debug;

use crate::{GlobalOrigin, StylesheetEngine, StylesheetError};

/// Cascade layer that receives global CSS.
pub const GLOBAL_LAYER: &str = "base";

/// Reference style-sheet engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    global: IndexMap<GlobalOrigin, GlobalStyleObject>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules accumulated for one origin.
    pub fn rules(&self, origin: GlobalOrigin) -> Option<&GlobalStyleObject> {
        self.global.get(&origin)
    }

    /// `true` when no declaration has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.global
            .values()
            .all(|rules| rules.values().all(|decls| decls.is_empty()))
    }

    /// Serialize all global rules.
    pub fn to_css(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut blocks = Vec::new();
        for origin in GlobalOrigin::ALL {
            let Some(rules) = self.global.get(&origin) else {
                continue;
            };
            for (selector, decls) in rules {
                if decls.is_empty() {
                    continue;
                }
                let mut block = format!("  {selector} {{\n");
                for (property, value) in decls {
                    block.push_str(&format!("    {property}: {value};\n"));
                }
                block.push_str("  }\n");
                blocks.push(block);
            }
        }

        format!("@layer {GLOBAL_LAYER} {{\n{}}}\n", blocks.join("\n"))
    }
}

impl StylesheetEngine for Stylesheet {
    fn process_global_css(
        &mut self,
        origin: GlobalOrigin,
        rules: &GlobalStyleObject,
    ) -> Result<(), StylesheetError> {
        validate(origin, rules)?;

        let target = self.global.entry(origin).or_default();
        for (selector, decls) in rules {
            let merged = target.entry(selector.clone()).or_default();
            for (property, value) in decls {
                merged.insert(property.clone(), value.clone());
            }
        }

        debug!(?origin, selectors = rules.len(), "global css processed");
        Ok(())
    }
}

/// Reject the whole rule set before anything is accumulated.
fn validate(origin: GlobalOrigin, rules: &GlobalStyleObject) -> Result<(), StylesheetError> {
    for (selector, decls) in rules {
        if selector.trim().is_empty() {
            return Err(StylesheetError::EmptySelector { origin });
        }
        if decls.keys().any(|property| property.trim().is_empty()) {
            return Err(StylesheetError::EmptyProperty {
                selector: selector.clone(),
            });
        }
    }
    Ok(())
}
