use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::document::{Document, DocumentError};
use crate::result::ResultEntry;
use crate::stem::normalize;
use crate::tokenizer::tokenize;

pub type DocId = u32;

/// Where a posting sits inside its document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    Title,
    Line(usize),
}

/// One recorded occurrence of a token. `start` and `len` are byte offsets
/// into the original title or line string, sized to the surface token as
/// tokenized, never to the stemmed key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub location: Location,
    pub start: usize,
    pub len: usize,
}

/// Positional inverted index over a fixed document set: canonical token key
/// to per-document posting lists, plus the documents themselves for result
/// construction. Built once; queries only read.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, HashMap<DocId, Vec<Posting>>>,
    docs: HashMap<DocId, Document>,
}

impl InvertedIndex {
    /// Index every token of every document: the title first, then the lines
    /// in order. Tokens whose normalized key is empty are skipped entirely.
    /// Document ids are the per-token map key, so a duplicate id is a
    /// construction error.
    pub fn build(documents: Vec<Document>) -> Result<Self, DocumentError> {
        let mut index = Self::default();
        for doc in documents {
            if index.docs.contains_key(&doc.id) {
                return Err(DocumentError::DuplicateId(doc.id));
            }
            for (surface, start) in tokenize(&doc.title) {
                index.record(doc.id, Location::Title, surface, start);
            }
            for (line_no, line) in doc.lines.iter().enumerate() {
                for (surface, start) in tokenize(line) {
                    index.record(doc.id, Location::Line(line_no), surface, start);
                }
            }
            index.docs.insert(doc.id, doc);
        }
        debug!(terms = index.postings.len(), docs = index.docs.len(), "index built");
        Ok(index)
    }

    fn record(&mut self, doc_id: DocId, location: Location, surface: &str, start: usize) {
        let key = normalize(surface);
        if key.is_empty() {
            return;
        }
        self.postings.entry(key).or_default().entry(doc_id).or_default().push(Posting {
            location,
            start,
            len: surface.len(),
        });
    }

    /// Number of indexed documents.
    pub fn doc_count(&self) -> usize {
        self.docs.len()
    }

    /// Number of distinct canonical keys.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Look up a single raw token. The token is normalized with the same
    /// pipeline used at build time; a token that normalizes to empty, or a
    /// key with no postings, yields an empty map. Otherwise every posting
    /// becomes a single-occurrence entry and postings of the same document
    /// are folded together in recorded order.
    pub fn lookup(&self, raw_token: &str) -> HashMap<DocId, ResultEntry> {
        let mut results = HashMap::new();
        let key = normalize(raw_token);
        if key.is_empty() {
            return results;
        }
        let Some(by_doc) = self.postings.get(&key) else {
            return results;
        };
        for (&doc_id, postings) in by_doc {
            let doc = &self.docs[&doc_id];
            let mut folded: Option<ResultEntry> = None;
            for posting in postings {
                let single = ResultEntry::from_posting(doc, posting);
                folded = Some(match folded {
                    Some(acc) => acc.combine(single),
                    None => single,
                });
            }
            if let Some(entry) = folded {
                results.insert(doc_id, entry);
            }
        }
        results
    }
}
