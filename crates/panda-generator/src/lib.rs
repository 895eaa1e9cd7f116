//! Panda Generator
//!
//! Produces the `global.css` artifact: built-in custom-property resets
//! followed by the user's `globalCss` overrides, both handed to the
//! style-sheet engine, then announced on the hook bus.
//!
//! ```text
//! Context { config, stylesheet, hooks } → generate_global_css() → Artifact
//! ```

pub mod global_css;
pub mod hooks;
pub mod reset;

use panda_config::UserConfig;
use panda_stylesheet::{StylesheetEngine, StylesheetError};

pub use global_css::{generate_global_css, GLOBAL_CSS_ARTIFACT};
pub use hooks::{
    ChannelHookBus, HookBus, HookDispatcher, HookError, HookEvent, GENERATOR_CSS_HOOK,
};
pub use reset::reset_rule_set;

/// Collaborators a generator works against.
pub struct Context<'a> {
    pub config: &'a UserConfig,
    pub stylesheet: &'a mut dyn StylesheetEngine,
    pub hooks: &'a dyn HookBus,
}

impl<'a> Context<'a> {
    pub fn new(
        config: &'a UserConfig,
        stylesheet: &'a mut dyn StylesheetEngine,
        hooks: &'a dyn HookBus,
    ) -> Self {
        Self {
            config,
            stylesheet,
            hooks,
        }
    }
}

/// A generated artifact, as announced on the hook bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub content: String,
}

/// Code generation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Stylesheet(#[from] StylesheetError),
}
