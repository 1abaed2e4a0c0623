//! Diff configuration file loading

#![allow(clippy::result_large_err)]

use std::fs;
use std::path::Path;

use abel_core::DiffConfig;

use crate::errors::{config_validation, invalid_entry, io_error, Result, OP_CONFIG_PARSE};

/// Load and validate a [`DiffConfig`] from a YAML file
///
/// Missing keys take their defaults, so an empty mapping is a valid file.
///
/// # Errors
///
/// `Io` if the file cannot be read, otherwise as [`parse_diff_config_str`].
pub fn load_diff_config(path: &Path) -> Result<DiffConfig> {
    let content = fs::read_to_string(path).map_err(|e| io_error(OP_CONFIG_PARSE, e))?;
    parse_diff_config_str(&content)
}

/// Parse and validate a [`DiffConfig`] from a YAML string
///
/// # Errors
///
/// `InvalidInput` on malformed YAML or an out-of-range threshold.
pub fn parse_diff_config_str(content: &str) -> Result<DiffConfig> {
    let config: DiffConfig = serde_yaml::from_str(content)
        .map_err(|e| config_validation(&format!("YAML parse error: {}", e)))?;
    config
        .validate()
        .map_err(|e| invalid_entry(OP_CONFIG_PARSE, e))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use abel_core::errors::ExErrorKind;

    #[test]
    fn test_empty_mapping_uses_defaults() {
        let config = parse_diff_config_str("{}").unwrap();
        assert_eq!(config, DiffConfig::default());
    }

    #[test]
    fn test_out_of_range_threshold_is_rejected() {
        let err = parse_diff_config_str("link_similarity_threshold: 2.0").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert_eq!(err.op(), Some(OP_CONFIG_PARSE));
        assert_eq!(
            err.source_error().map(|e| e.kind()),
            Some(ExErrorKind::InvalidConfig)
        );
    }
}
