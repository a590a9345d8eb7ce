use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use flate2::read::GzDecoder;

use crate::data::document::Document;
use crate::data::SentenceInstance;
use crate::engine::GeneratorConfig;
use crate::types::{Alphabets, SentenceAssignment};

/// A sentence ready for feature generation, with its gold assignment
#[derive(Debug, Clone)]
pub struct LabeledSentence {
    pub instance: SentenceInstance,
    pub assignment: SentenceAssignment,
}

/// Parser for JSON and gzipped JSON documents
#[derive(Debug)]
pub struct DocumentParser {
    /// Keep sentences without any annotated event
    pub keep_non_event_sentences: bool,
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser {
    pub fn new() -> Self {
        Self { keep_non_event_sentences: true }
    }

    /// Drop sentences without events, as done when building training tables
    pub fn skip_non_event_sentences(mut self) -> Self {
        self.keep_non_event_sentences = false;
        self
    }

    /// Parse a JSON file (regular or gzipped)
    pub fn parse_file<P: AsRef<Path>>(&self, file_path: P) -> Result<Vec<Document>> {
        let path = file_path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open document file {}", path.display()))?;

        // Check if file is gzipped by looking at magic bytes
        let mut reader = BufReader::new(file);
        let mut magic = [0u8; 2];
        reader
            .read_exact(&mut magic)
            .with_context(|| format!("Document file {} is too short to hold JSON", path.display()))?;

        let file = File::open(path)?;
        let documents = if magic == [0x1f, 0x8b] {
            self.parse_reader(BufReader::new(GzDecoder::new(file)))?
        } else {
            self.parse_reader(BufReader::new(file))?
        };
        log::info!("Parsed {} documents from {}", documents.len(), path.display());
        Ok(documents)
    }

    /// Parse from a reader (single document, array of documents, or JSONL)
    pub fn parse_reader<R: Read>(&self, mut reader: BufReader<R>) -> Result<Vec<Document>> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        if let Ok(docs) = self.parse_json(&content) {
            return Ok(docs);
        }

        let mut documents = Vec::new();
        for (line_no, line) in content.lines().enumerate() {
            if !line.trim().is_empty() {
                let doc: Document = serde_json::from_str(line)
                    .map_err(|e| anyhow!("Invalid document on line {}: {}", line_no + 1, e))?;
                documents.push(doc);
            }
        }
        Ok(documents)
    }

    /// Parse a JSON string holding one document or an array of documents
    pub fn parse_json(&self, json_str: &str) -> Result<Vec<Document>> {
        if let Ok(doc) = serde_json::from_str::<Document>(json_str) {
            return Ok(vec![doc]);
        }
        if let Ok(docs) = serde_json::from_str::<Vec<Document>>(json_str) {
            return Ok(docs);
        }
        Err(anyhow!("Failed to parse JSON as single document or array of documents"))
    }

    /// Parse a gzipped JSON buffer
    pub fn parse_gzipped_json(&self, gzipped_data: &[u8]) -> Result<Vec<Document>> {
        let mut decoder = GzDecoder::new(gzipped_data);
        let mut json_str = String::new();
        decoder.read_to_string(&mut json_str)?;
        self.parse_json(&json_str)
    }

    /// Convert a document into instances with gold assignments. Malformed
    /// sentences abort the whole document.
    pub fn to_labeled_sentences(
        &self,
        doc: &Document,
        alphabets: &Alphabets,
        config: &GeneratorConfig,
    ) -> Result<Vec<LabeledSentence>> {
        let mut sentences = Vec::with_capacity(doc.sentence_count());
        for (sentence_idx, record) in doc.sentences.iter().enumerate() {
            if !self.keep_non_event_sentences && record.events.is_empty() {
                log::debug!("Skipping sentence {} of '{}': no events", sentence_idx, doc.id);
                continue;
            }
            if record.dependencies.is_none() {
                log::warn!(
                    "Document '{}' sentence {}: no dependency parse, path features disabled",
                    doc.id, sentence_idx
                );
            }
            let id = format!("{}_{}", doc.id, sentence_idx);
            let instance = record
                .to_instance(id.as_str())
                .map_err(|e| anyhow!("Document '{}' sentence {}: {}", doc.id, sentence_idx, e))?;
            let assignment = record
                .to_assignment(alphabets, config)
                .map_err(|e| anyhow!("Document '{}' sentence {}: {}", doc.id, sentence_idx, e))?;
            sentences.push(LabeledSentence { instance, assignment });
        }
        Ok(sentences)
    }
}
