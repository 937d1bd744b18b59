use log::{debug, warn};

use crate::config::Config;
use crate::utils::error::{BoxResult, ConversioError};

/// Validate the configuration
pub fn validate_config(config: &Config) -> BoxResult<()> {
    validate_files(config)?;
    validate_markdown_ext(config)?;

    if !config.toc && config.unique_anchors {
        warn!("unique_anchors has no effect while the table of contents is disabled");
    }

    Ok(())
}

/// Template and style files must exist when they are configured
fn validate_files(config: &Config) -> BoxResult<()> {
    let files = [("Template", &config.template), ("Style", &config.style)];

    for (name, path) in files {
        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConversioError::Config(format!(
                    "{} file does not exist: {}", name, path.display()
                )).into());
            }
            debug!("{} file: {}", name, path.display());
        }
    }

    Ok(())
}

fn validate_markdown_ext(config: &Config) -> BoxResult<()> {
    if config.markdown_ext.iter().all(|ext| ext.trim_start_matches('.').is_empty()) {
        return Err(ConversioError::Config(
            "markdown_ext must name at least one extension".to_string()
        ).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_missing_template() {
        let config = Config {
            template: Some(PathBuf::from("/no/such/template.erb")),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("Template file does not exist"));
    }

    #[test]
    fn test_empty_extensions() {
        let config = Config {
            markdown_ext: vec![".".to_string()],
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }
}
