pub mod document;
pub mod highlight;
pub mod index;
pub mod query;
pub mod result;
pub mod stem;
pub mod tokenizer;

pub use document::{Document, DocumentError};
pub use highlight::{merge_spans, render, HighlightStyle};
pub use index::{DocId, InvertedIndex, Location, Posting};
pub use query::{search, SearchMode};
pub use result::{LineMatch, ResultEntry, Span};
