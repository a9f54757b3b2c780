use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::document::Document;
use crate::index::{Location, Posting};

/// Half-open byte range into a specific surface string.
pub type Span = (usize, usize);

/// One matching line: its original text and the spans matched in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineMatch {
    pub text: String,
    pub spans: Vec<Span>,
}

/// Per-document aggregate of everything a query matched: spans in the title,
/// spans per line (keyed and ordered by line index), and the total number of
/// postings folded in. Values are combined, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub title: String,
    pub title_spans: Vec<Span>,
    pub line_matches: BTreeMap<usize, LineMatch>,
    pub occurrences: usize,
}

impl ResultEntry {
    /// Single-occurrence entry for one posting of `doc`.
    pub fn from_posting(doc: &Document, posting: &Posting) -> Self {
        let span = (posting.start, posting.start + posting.len);
        let mut entry = Self {
            title: doc.title.clone(),
            title_spans: Vec::new(),
            line_matches: BTreeMap::new(),
            occurrences: 1,
        };
        match posting.location {
            Location::Title => entry.title_spans.push(span),
            Location::Line(i) => {
                entry.line_matches.insert(
                    i,
                    LineMatch {
                        text: doc.lines[i].clone(),
                        spans: vec![span],
                    },
                );
            }
        }
        entry
    }

    /// Fold another entry for the same document into this one, producing a
    /// fresh value. Occurrence counts add; title spans union, kept sorted by
    /// start with duplicates preserved (each is a distinct occurrence); line
    /// matches union per line index with their spans concatenated and sorted.
    /// Commutative and associative, so fold order never shows in the output.
    pub fn combine(self, other: ResultEntry) -> ResultEntry {
        debug_assert_eq!(self.title, other.title);

        let mut title_spans = self.title_spans;
        title_spans.extend(other.title_spans);
        title_spans.sort_unstable();

        let mut line_matches = self.line_matches;
        for (line_no, incoming) in other.line_matches {
            match line_matches.entry(line_no) {
                Entry::Occupied(mut e) => {
                    debug_assert_eq!(e.get().text, incoming.text);
                    let existing = e.get_mut();
                    existing.spans.extend(incoming.spans);
                    existing.spans.sort_unstable();
                }
                Entry::Vacant(e) => {
                    e.insert(incoming);
                }
            }
        }

        ResultEntry {
            title: self.title,
            title_spans,
            line_matches,
            occurrences: self.occurrences + other.occurrences,
        }
    }
}
