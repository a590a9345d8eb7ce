//! Training-table output.
//!
//! One line per token: `Trigger<i> <label> <feature>:1 <feature>:1 ...`.

use std::collections::BTreeSet;
use std::io::Write;

use anyhow::{anyhow, Context, Result};

use crate::data::SentenceInstance;
use crate::types::{Alphabets, SentenceAssignment};

/// Counters accumulated while writing a table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureTableStats {
    pub lines: usize,
    pub trigger_lines: usize,
    pub features: usize,
    /// Family name of a feature: its text up to the first `=` or `:`
    pub families: BTreeSet<String>,
}

impl FeatureTableStats {
    pub fn trigger_rate(&self) -> f64 {
        if self.lines == 0 {
            0.0
        } else {
            self.trigger_lines as f64 / self.lines as f64
        }
    }

    fn record(&mut self, is_trigger: bool, features: &[String]) {
        self.lines += 1;
        if is_trigger {
            self.trigger_lines += 1;
        }
        self.features += features.len();
        for feature in features {
            let family = feature
                .find(['=', ':'])
                .map_or(feature.as_str(), |end| &feature[..end]);
            if !self.families.contains(family) {
                self.families.insert(family.to_string());
            }
        }
    }
}

pub struct FeatureTableWriter<W: Write> {
    writer: W,
    stats: FeatureTableStats,
}

impl<W: Write> FeatureTableWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, stats: FeatureTableStats::default() }
    }

    /// Write the lines of one sentence. `features[i]` belongs to token `i`.
    pub fn write_sentence(
        &mut self,
        inst: &SentenceInstance,
        assn: &SentenceAssignment,
        alphabets: &Alphabets,
        features: &[Vec<String>],
    ) -> Result<()> {
        if features.len() != inst.len() {
            return Err(anyhow!(
                "Sentence '{}' has {} tokens but {} feature lines",
                inst.id,
                inst.len(),
                features.len()
            ));
        }
        for (index, token_features) in features.iter().enumerate() {
            let label = alphabets.triggers.label(assn.label_index_at(index)?)?;
            write!(self.writer, "Trigger{} {}", index, label)?;
            for feature in token_features {
                write!(self.writer, " {}:1", feature)?;
            }
            writeln!(self.writer)?;
            self.stats.record(assn.is_trigger(index), token_features);
        }
        Ok(())
    }

    pub fn stats(&self) -> &FeatureTableStats {
        &self.stats
    }

    /// Flush the writer and hand back the accumulated stats
    pub fn finish(mut self) -> Result<FeatureTableStats> {
        self.writer.flush().context("Failed to flush feature table")?;
        Ok(self.stats)
    }
}
