use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use crate::index::{DocId, InvertedIndex};
use crate::result::ResultEntry;

/// How per-word match sets combine across a multi-word query: conjunctive
/// (every word must match) or disjunctive (any word may match).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SearchMode {
    And,
    Or,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchMode::And => "AND",
            SearchMode::Or => "OR",
        })
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AND" => Ok(SearchMode::And),
            "OR" => Ok(SearchMode::Or),
            other => Err(format!("unknown search mode {other:?}")),
        }
    }
}

/// Evaluate a whitespace-separated query against the index. Each word is
/// looked up independently (lookup normalizes), the per-word maps are folded
/// under `mode`, and the surviving entries come back sorted by raw title
/// string. That ordering is lexicographic, so "Sonnet 10" sorts before
/// "Sonnet 2"; this is long-standing surface behavior, not a ranking.
pub fn search(index: &InvertedIndex, query: &str, mode: SearchMode) -> Vec<ResultEntry> {
    let mut words = query.split_whitespace();
    let Some(first) = words.next() else {
        return Vec::new();
    };
    let mut running = index.lookup(first);
    for word in words {
        let next = index.lookup(word);
        running = match mode {
            SearchMode::And => intersect(running, next),
            SearchMode::Or => union(running, next),
        };
    }
    trace!(%mode, hits = running.len(), "query evaluated");

    let mut results: Vec<ResultEntry> = running.into_values().collect();
    results.sort_by(|a, b| a.title.cmp(&b.title));
    results
}

fn intersect(
    mut left: HashMap<DocId, ResultEntry>,
    right: HashMap<DocId, ResultEntry>,
) -> HashMap<DocId, ResultEntry> {
    let mut out = HashMap::new();
    for (doc_id, entry) in right {
        if let Some(existing) = left.remove(&doc_id) {
            out.insert(doc_id, existing.combine(entry));
        }
    }
    out
}

fn union(
    mut left: HashMap<DocId, ResultEntry>,
    right: HashMap<DocId, ResultEntry>,
) -> HashMap<DocId, ResultEntry> {
    for (doc_id, entry) in right {
        let merged = match left.remove(&doc_id) {
            Some(existing) => existing.combine(entry),
            None => entry,
        };
        left.insert(doc_id, merged);
    }
    left
}
