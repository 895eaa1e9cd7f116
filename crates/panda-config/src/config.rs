//! User configuration loading.
//!
//! Reads a JSON config file (`panda.config.json` by convention). Only the keys
//! the generator needs are modelled; anything else in the file is ignored.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::style::GlobalStyleObject;
use crate::ConfigError;

/// Output directory used when the config does not set `outdir`.
pub const DEFAULT_OUTDIR: &str = "styled-system";

/// The merged user configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConfig {
    /// Global style overrides, layered after the built-in resets.
    pub global_css: Option<GlobalStyleObject>,
    /// Directory generated artifacts are written to.
    pub outdir: Option<String>,
}

impl UserConfig {
    /// Parse a config from JSON source.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// The `globalCss` overrides, or an empty map when none are configured.
    pub fn global_css(&self) -> GlobalStyleObject {
        self.global_css.clone().unwrap_or_default()
    }

    pub fn outdir(&self) -> &str {
        self.outdir.as_deref().unwrap_or(DEFAULT_OUTDIR)
    }
}

/// Load a config file from disk.
pub fn load_config(path: impl AsRef<Path>) -> Result<UserConfig, ConfigError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    UserConfig::from_json(&source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Declarations, StyleValue};
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_empty_object() {
        let config = UserConfig::from_json("{}").unwrap();
        assert_eq!(config, UserConfig::default());
        assert!(config.global_css().is_empty());
        assert_eq!(config.outdir(), DEFAULT_OUTDIR);
    }

    #[test]
    fn test_global_css() {
        let config =
            UserConfig::from_json(r#"{ "globalCss": { "body": { "margin": 0 } } }"#).unwrap();

        let mut body = Declarations::new();
        body.insert("margin".into(), StyleValue::Number(0.0));
        let mut expected = GlobalStyleObject::new();
        expected.insert("body".into(), body);

        assert_eq!(config.global_css(), expected);
    }

    #[test]
    fn test_explicit_empty_global_css() {
        let config = UserConfig::from_json(r#"{ "globalCss": {} }"#).unwrap();
        assert_eq!(config.global_css, Some(GlobalStyleObject::new()));
        assert!(config.global_css().is_empty());
    }

    #[test]
    fn test_null_global_css_is_absent() {
        let config = UserConfig::from_json(r#"{ "globalCss": null }"#).unwrap();
        assert_eq!(config.global_css, None);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config =
            UserConfig::from_json(r#"{ "preflight": true, "outdir": "out", "theme": {} }"#)
                .unwrap();
        assert_eq!(config.outdir(), "out");
    }

    #[test]
    fn test_malformed_global_css() {
        let err = UserConfig::from_json(r#"{ "globalCss": ["body"] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("Invalid config"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "globalCss": {{ "html": {{ "color": "red" }} }} }}"#).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(
            config.global_css()["html"]["color"],
            StyleValue::String("red".into())
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panda.config.json");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("panda.config.json"));
    }
}
