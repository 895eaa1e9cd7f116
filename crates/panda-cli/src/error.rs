use std::path::PathBuf;

use panda_config::ConfigError;
use panda_generator::GeneratorError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Codegen error: {0}")]
    Generator(#[from] GeneratorError),

    #[error("Error writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {0}")]
    Logger(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use panda_stylesheet::{GlobalOrigin, StylesheetError};

    #[test]
    fn test_generator_error_display() {
        let e: CliError = GeneratorError::from(StylesheetError::EmptySelector {
            origin: GlobalOrigin::User,
        })
        .into();
        assert_eq!(
            e.to_string(),
            "Codegen error: Empty selector in User global css"
        );
    }

    #[test]
    fn test_write_error_display() {
        let e = CliError::Write {
            path: PathBuf::from("out/global.css"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(e.to_string(), "Error writing out/global.css: denied");
    }
}
