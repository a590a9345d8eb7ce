pub mod alphabet;
pub mod assignment;
pub mod mention;
pub mod span;
pub mod token;

pub use alphabet::{Alphabet, Alphabets};
pub use assignment::SentenceAssignment;
pub use mention::{CorefId, Mention};
pub use span::Span;
pub use token::Token;
