//! Generator settings and label inventories
//!
//! - `constants`: feature family prefixes and default labels
//! - `config`: `GeneratorConfig`, loaded from YAML
//! - `constraints`: `TypeConstraints`, the roles each trigger label admits

pub mod config;
pub mod constants;
pub mod constraints;

pub use config::GeneratorConfig;
pub use constants::*;
pub use constraints::TypeConstraints;
