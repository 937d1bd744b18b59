use std::path::{Path, PathBuf};
use std::fs;
use log::debug;
use serde_yaml::Value;

use crate::config::defaults::CONFIG_FILES;
use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{BoxResult, ConversioError};

/// Load configuration from config files.
///
/// Explicit files are merged in order; without them the default file names
/// are looked up in `source_dir`. Keys of later files win.
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>
) -> BoxResult<Config> {
    let config_paths = match config_files {
        Some(paths) if !paths.is_empty() => paths,
        _ => find_default_config_files(&source_dir),
    };

    let mut merged = serde_yaml::to_value(Config::default())?;

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            let file_value = read_config_file(&path)?;
            merge_values(&mut merged, file_value);
        }
    }

    let config: Config = serde_yaml::from_value(merged)
        .map_err(|e| ConversioError::Config(format!("Invalid configuration: {}", e)))?;

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(source_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Read a configuration file into a generic value, choosing the parser by extension
fn read_config_file(config_path: &Path) -> BoxResult<Value> {
    if !config_path.exists() {
        return Err(ConversioError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )).into());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| ConversioError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    let ext = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| "yml".to_string());

    let value = match ext.as_str() {
        "yml" | "yaml" => serde_yaml::from_str::<Value>(&content)
            .map_err(|e| parse_error(config_path, "YAML", e))?,
        "toml" => toml::from_str::<Value>(&content)
            .map_err(|e| parse_error(config_path, "TOML", e))?,
        "json" => serde_json::from_str::<Value>(&content)
            .map_err(|e| parse_error(config_path, "JSON", e))?,
        other => {
            return Err(ConversioError::Config(format!(
                "Unsupported configuration file format: {}", other
            )).into());
        }
    };

    // An empty YAML file parses as null
    match value {
        Value::Null => Ok(Value::Mapping(Default::default())),
        Value::Mapping(_) => Ok(value),
        _ => Err(ConversioError::Config(format!(
            "Configuration file {} must contain a mapping", config_path.display()
        )).into()),
    }
}

fn parse_error(path: &Path, format: &str, err: impl std::fmt::Display) -> ConversioError {
    ConversioError::Config(format!(
        "Failed to parse {} configuration ({}): {}", format, path.display(), err
    ))
}

/// Overlay the top-level keys of `source` onto `target`
fn merge_values(target: &mut Value, source: Value) {
    if let (Value::Mapping(target_map), Value::Mapping(source_map)) = (target, source) {
        for (key, value) in source_map {
            target_map.insert(key, value);
        }
    }
}
