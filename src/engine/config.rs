//! Generator configuration types

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::engine::constants::*;

/// Labels, sentinels and thresholds used by the global feature generator.
///
/// Every field has a default, so a YAML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub default_trigger_label: String,
    pub default_role_label: String,
    pub trigger_word_sentinel: String,
    pub time_role_prefix: String,
    pub time_bucket: String,
    pub title_mention_type: String,
    pub max_path_distance: usize,
    pub max_between_gap: usize,
    /// Counts above the cap are reported as `cap + 1`
    pub role_count_cap: usize,
    pub related_roles: Vec<(String, String)>,
    pub enable_related_roles: bool,
    /// Trigger labels that never take arguments
    pub non_argument_labels: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_trigger_label: DEFAULT_TRIGGER_LABEL.to_string(),
            default_role_label: DEFAULT_ROLE_LABEL.to_string(),
            trigger_word_sentinel: TRIGGER_WORD_SENTINEL.to_string(),
            time_role_prefix: TIME_ROLE_PREFIX.to_string(),
            time_bucket: TIME_ROLE_PREFIX.to_string(),
            title_mention_type: TITLE_MENTION_TYPE.to_string(),
            max_path_distance: MAX_PATH_DISTANCE,
            max_between_gap: MAX_BETWEEN_GAP,
            role_count_cap: ROLE_COUNT_CAP,
            related_roles: RELATED_ROLE_PAIRS
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
            enable_related_roles: false,
            non_argument_labels: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(anyhow!("Config file not found: {}", path.display()));
        }
        let yaml_str = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        let config = Self::from_yaml_str(&yaml_str)
            .map_err(|e| anyhow!("Invalid YAML config in {}: {}", path.display(), e))?;
        log::info!("Loaded generator config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_trigger_label.is_empty() || self.default_role_label.is_empty() {
            return Err(anyhow!("Default trigger and role labels must be non-empty"));
        }
        if self.time_role_prefix.is_empty() {
            return Err(anyhow!("time_role_prefix must be non-empty"));
        }
        Ok(())
    }

    pub fn is_time_role(&self, role: &str) -> bool {
        role.starts_with(&self.time_role_prefix)
    }

    /// Whether a trigger carrying `label` can take arguments
    pub fn is_argumentable(&self, label: &str) -> bool {
        label != self.default_trigger_label
            && !self.non_argument_labels.iter().any(|l| l == label)
    }

    /// `role_a` and `role_b` form one of the configured related pairs, in
    /// either order
    pub fn are_related_roles(&self, role_a: &str, role_b: &str) -> bool {
        self.related_roles
            .iter()
            .any(|(x, y)| (x == role_a && y == role_b) || (x == role_b && y == role_a))
    }

    /// Report value for a role count
    pub fn bucket_count(&self, count: usize) -> usize {
        if count > self.role_count_cap {
            self.role_count_cap + 1
        } else {
            count
        }
    }
}
