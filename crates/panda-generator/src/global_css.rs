//! Global CSS generator.
//!
//! Submits the reset table, then the user's `globalCss`, to the style-sheet
//! engine. The two sets are never merged here; the engine layers user rules
//! after the resets.

use panda_stylesheet::GlobalOrigin;
use tracing::debug;

use crate::hooks::GENERATOR_CSS_HOOK;
use crate::reset::reset_rule_set;
use crate::{Artifact, Context, GeneratorError};

/// Name of the emitted artifact.
pub const GLOBAL_CSS_ARTIFACT: &str = "global.css";

/// Generate global CSS into the context's style-sheet.
///
/// The hook content is empty: the engine assembles the real CSS text when the
/// sheet is serialized.
pub fn generate_global_css(ctx: &mut Context<'_>) -> Result<Artifact, GeneratorError> {
    let global_css = ctx.config.global_css();

    ctx.stylesheet
        .process_global_css(GlobalOrigin::Defaults, &reset_rule_set())?;
    ctx.stylesheet
        .process_global_css(GlobalOrigin::User, &global_css)?;
    debug!(user_selectors = global_css.len(), "global css submitted");

    ctx.hooks.call_hook(GENERATOR_CSS_HOOK, GLOBAL_CSS_ARTIFACT, "");

    Ok(Artifact {
        name: GLOBAL_CSS_ARTIFACT.to_string(),
        content: String::new(),
    })
}
