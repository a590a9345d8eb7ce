pub mod canonical;
pub mod completion;
pub mod generator;
pub mod node;
pub(crate) mod paths;
pub mod sentence;
pub mod table;
pub mod trigger;

#[cfg(test)]
mod tests;

pub use canonical::{role_with_label, sorted_pair};
pub use generator::GlobalFeatureGenerator;
pub use table::{FeatureTableStats, FeatureTableWriter};
