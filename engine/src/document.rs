use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

lazy_static! {
    // "Sonnet <N>: ..." or a bare "Sonnet <N>"
    static ref TITLE_RE: Regex = Regex::new(r"^Sonnet (\d+)(:|$)").expect("valid regex");
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("title {0:?} does not match the \"Sonnet <N>\" pattern")]
    MalformedTitle(String),
    #[error("duplicate sonnet id {0}")]
    DuplicateId(u32),
}

/// One sonnet: a numeric id derived from the title, the raw title string, and
/// the poem's lines in order. Constructed once from loader output and
/// immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: u32,
    pub title: String,
    pub lines: Vec<String>,
}

impl Document {
    /// Build a document from a raw title and its lines. The id comes from the
    /// `"Sonnet <N>"` title prefix; a title without that pattern is a
    /// construction-time error, not something the engine recovers from.
    pub fn new(title: String, lines: Vec<String>) -> Result<Self, DocumentError> {
        let id = parse_id(&title)?;
        Ok(Self { id, title, lines })
    }
}

fn parse_id(title: &str) -> Result<u32, DocumentError> {
    let caps = TITLE_RE
        .captures(title)
        .ok_or_else(|| DocumentError::MalformedTitle(title.to_string()))?;
    caps[1]
        .parse()
        .map_err(|_| DocumentError::MalformedTitle(title.to_string()))
}
