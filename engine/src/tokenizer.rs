/// Split text into whitespace-delimited surface tokens with byte offsets.
///
/// A token is a maximal run of non-whitespace characters. Offsets point into
/// `text` and stay valid for slicing it; no normalization happens here. The
/// same split is applied to titles and lines at build time and to the query
/// string at search time.
pub fn tokenize(text: &str) -> Vec<(&str, usize)> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    for (i, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push((&text[s..i], s));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push((&text[s..], s));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
    }

    #[test]
    fn offsets_point_at_surface_tokens() {
        assert_eq!(tokenize("ab  cd"), vec![("ab", 0), ("cd", 4)]);
    }

    #[test]
    fn leading_and_trailing_whitespace() {
        assert_eq!(tokenize("  thy "), vec![("thy", 2)]);
    }

    #[test]
    fn punctuation_stays_attached() {
        assert_eq!(tokenize("love's fire,"), vec![("love's", 0), ("fire,", 7)]);
    }
}
