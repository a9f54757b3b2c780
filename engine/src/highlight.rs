use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::result::Span;

/// Terminal presentation for matched spans. Purely presentational; has no
/// effect on matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HighlightStyle {
    Default,
    Green,
}

impl HighlightStyle {
    fn markers(self) -> (&'static str, &'static str) {
        match self {
            HighlightStyle::Default => ("\x1b[1m", "\x1b[0m"),
            HighlightStyle::Green => ("\x1b[32m", "\x1b[0m"),
        }
    }
}

impl fmt::Display for HighlightStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HighlightStyle::Default => "DEFAULT",
            HighlightStyle::Green => "GREEN",
        })
    }
}

impl FromStr for HighlightStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEFAULT" => Ok(HighlightStyle::Default),
            "GREEN" => Ok(HighlightStyle::Green),
            other => Err(format!("unknown highlight style {other:?}")),
        }
    }
}

/// Merge overlapping and adjacent spans into a minimal sorted cover.
pub fn merge_spans(mut spans: Vec<Span>) -> Vec<Span> {
    spans.sort_unstable();
    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for (s, e) in spans {
        match merged.last_mut() {
            Some((_, ce)) if s <= *ce => *ce = (*ce).max(e),
            _ => merged.push((s, e)),
        }
    }
    merged
}

/// Rebuild `text` with every merged span wrapped in the style's marker pair.
/// An empty span set returns the text unchanged.
pub fn render(text: &str, spans: &[Span], style: HighlightStyle) -> String {
    if spans.is_empty() {
        return text.to_string();
    }
    let (open, close) = style.markers();
    let merged = merge_spans(spans.to_vec());
    let mut out = String::with_capacity(text.len() + merged.len() * (open.len() + close.len()));
    let mut cursor = 0;
    for (s, e) in merged {
        out.push_str(&text[cursor..s]);
        out.push_str(open);
        out.push_str(&text[s..e]);
        out.push_str(close);
        cursor = e;
    }
    out.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_and_adjacent_spans_merge() {
        assert_eq!(merge_spans(vec![(0, 3), (2, 5), (10, 12)]), vec![(0, 5), (10, 12)]);
        // adjacent: end of one equals start of the next
        assert_eq!(merge_spans(vec![(0, 3), (3, 5)]), vec![(0, 5)]);
    }

    #[test]
    fn merge_is_order_insensitive() {
        assert_eq!(merge_spans(vec![(10, 12), (2, 5), (0, 3)]), vec![(0, 5), (10, 12)]);
    }

    #[test]
    fn render_wraps_merged_spans() {
        let out = render("the cat sat", &[(4, 7)], HighlightStyle::Green);
        assert_eq!(out, "the \x1b[32mcat\x1b[0m sat");
    }

    #[test]
    fn render_without_spans_is_identity() {
        assert_eq!(render("the cat sat", &[], HighlightStyle::Default), "the cat sat");
    }
}
