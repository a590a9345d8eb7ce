pub mod document;
pub mod parser;
pub mod sentence;

pub use document::{ArgumentRecord, Document, EventRecord, SentenceRecord};
pub use parser::{DocumentParser, LabeledSentence};
pub use sentence::SentenceInstance;
