//! Trigger label -> allowed argument roles

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::error::FeatureError;

const ACE2005_CONSTRAINTS: &str = include_str!("../../configs/type_constraints.yaml");

/// Which roles each event type admits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeConstraints {
    pub argument_roles: BTreeMap<String, BTreeSet<String>>,
}

impl TypeConstraints {
    /// ACE 2005 event subtypes and their roles, bundled with the crate
    pub fn ace2005() -> Result<Self> {
        Self::from_yaml_str(ACE2005_CONSTRAINTS)
    }

    /// Load constraints from a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(anyhow!("Constraints file not found: {}", path.display()));
        }
        let yaml_str = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read constraints file {}: {}", path.display(), e))?;
        let constraints = Self::from_yaml_str(&yaml_str)
            .map_err(|e| anyhow!("Invalid YAML constraints in {}: {}", path.display(), e))?;
        log::info!(
            "Loaded role constraints for {} trigger labels from {}",
            constraints.len(),
            path.display()
        );
        Ok(constraints)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let constraints: Self = serde_yaml::from_str(yaml)?;
        if let Some((label, _)) = constraints.argument_roles.iter().find(|(_, roles)| roles.is_empty()) {
            return Err(anyhow!("Trigger label '{}' lists no roles", label));
        }
        Ok(constraints)
    }

    /// Allowed roles of `label`; an unlisted label is a data error
    pub fn roles_for(&self, label: &str) -> Result<&BTreeSet<String>, FeatureError> {
        self.argument_roles
            .get(label)
            .ok_or_else(|| FeatureError::UnknownTriggerLabel(label.to_string()))
    }

    pub fn len(&self) -> usize {
        self.argument_roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.argument_roles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_lookup() {
        let yaml = "argument_roles:\n  End-Position: [Person, Entity, Position, Time-Within]\n  Die: [Victim, Agent]\n";
        let constraints = TypeConstraints::from_yaml_str(yaml).unwrap();

        assert!(constraints.roles_for("End-Position").unwrap().contains("Person"));
        assert!(!constraints.roles_for("Die").unwrap().contains("Person"));
        assert_eq!(constraints.roles_for("Die").unwrap().len(), 2);
        assert!(matches!(
            constraints.roles_for("Attack"),
            Err(FeatureError::UnknownTriggerLabel(label)) if label == "Attack"
        ));
    }

    #[test]
    fn test_bundled_ace2005() {
        let constraints = TypeConstraints::ace2005().unwrap();
        assert_eq!(constraints.len(), 33);
        assert!(constraints.roles_for("Attack").unwrap().contains("Attacker"));
        assert!(constraints.roles_for("Transport").unwrap().contains("Destination"));
        assert!(constraints.roles_for("End-Position").unwrap().contains("Time-Within"));
    }

    #[test]
    fn test_rejects_empty_role_list() {
        let yaml = "argument_roles:\n  Attack: []\n";
        assert!(TypeConstraints::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_yaml_file_round_trip() {
        let constraints =
            TypeConstraints::from_yaml_str("argument_roles:\n  Meet: [Entity, Place]\n").unwrap();
        let path = std::env::temp_dir().join("rustie_events_constraints_test.yaml");
        fs::write(&path, serde_yaml::to_string(&constraints).unwrap()).unwrap();

        let loaded = TypeConstraints::from_yaml_file(&path).unwrap();
        assert_eq!(loaded, constraints);

        let _ = fs::remove_file(path);
    }
}
