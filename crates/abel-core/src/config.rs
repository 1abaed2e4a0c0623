//! Diff engine configuration
//!
//! All fields have defaults, so an empty YAML/JSON document deserializes to
//! [`DiffConfig::default`].

use serde::{Deserialize, Serialize};

use crate::errors::{AbelError, Result};

/// Default minimum link similarity below which LINKS is flagged
pub const DEFAULT_LINK_SIMILARITY_THRESHOLD: f64 = 0.9;

/// Options controlling change detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// A virtual entity whose link score falls strictly below this value
    /// gets LINKS in its update mask
    pub link_similarity_threshold: f64,

    /// Emit debug events with the per-entity translation/link sets whenever
    /// TRANSLATION or LINKS is flagged
    pub trace_mask_details: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            link_similarity_threshold: DEFAULT_LINK_SIMILARITY_THRESHOLD,
            trace_mask_details: false,
        }
    }
}

impl DiffConfig {
    pub fn with_link_similarity_threshold(mut self, threshold: f64) -> Self {
        self.link_similarity_threshold = threshold;
        self
    }

    pub fn with_trace_mask_details(mut self, enabled: bool) -> Self {
        self.trace_mask_details = enabled;
        self
    }

    /// Check that the threshold is a ratio
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the threshold is NaN or outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let threshold = self.link_similarity_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(AbelError::InvalidConfig {
                reason: format!(
                    "link_similarity_threshold must be within [0, 1], got {}",
                    threshold
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        let config = DiffConfig::default();
        assert_eq!(config.link_similarity_threshold, 0.9);
        assert!(!config.trace_mask_details);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        assert!(DiffConfig::default()
            .with_link_similarity_threshold(1.5)
            .validate()
            .is_err());
        assert!(DiffConfig::default()
            .with_link_similarity_threshold(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config: DiffConfig = serde_json::from_str(r#"{"trace_mask_details": true}"#).unwrap();
        assert!(config.trace_mask_details);
        assert_eq!(config.link_similarity_threshold, 0.9);
    }
}
