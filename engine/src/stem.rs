//! Token normalization: case folding, punctuation stripping, and a small
//! deterministic suffix stemmer. The same function keys the index at build
//! time and the lookup at query time, so linguistically equivalent surface
//! forms land on the same canonical key.

fn has_vowel(s: &str) -> bool {
    s.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
}

/// Map a surface token to its canonical index key: lowercase, strip `'`, `,`
/// and `.` anywhere in the token, then stem. An empty result means nothing
/// survived stripping; empty keys are never indexed and never match.
pub fn normalize(token: &str) -> String {
    let stripped: String = token
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '\'' | ',' | '.'))
        .collect();
    if stripped.is_empty() {
        return stripped;
    }
    stem(&stripped)
}

/// Simplified Porter stem: one plural rule, one vowel-guarded verb rule, then
/// terminal y -> i. Words of two characters or fewer pass through untouched.
fn stem(word: &str) -> String {
    if word.chars().count() <= 2 {
        return word.to_string();
    }
    let mut w = word.to_string();

    // Plural suffixes, first match wins. "ss" is deliberately a no-op so that
    // e.g. "caress" is not clipped by the bare "s" rule.
    for (suffix, replacement) in [("sses", "ss"), ("ies", "i"), ("ss", "ss"), ("s", "")] {
        if w.ends_with(suffix) {
            let cut = w.len() - suffix.len();
            w.truncate(cut);
            w.push_str(replacement);
            break;
        }
    }

    // Verb suffixes: only rewrite when the base keeps a vowel ("walking" ->
    // "walk", but "sing" stays). "eed" keeps its double e ("agreed" -> "agree").
    for suffix in ["eed", "ed", "ing"] {
        if let Some(base) = w.strip_suffix(suffix) {
            if has_vowel(base) {
                let keep = if suffix == "eed" { w.len() - 1 } else { base.len() };
                w.truncate(keep);
            }
            break;
        }
    }

    if w.ends_with('y') && has_vowel(&w[..w.len() - 1]) {
        w.pop();
        w.push('i');
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_case_and_punctuation() {
        assert_eq!(normalize("Love's"), "love");
        assert_eq!(normalize("fire,"), "fire");
        assert_eq!(normalize("end."), "end");
    }

    #[test]
    fn all_punctuation_normalizes_to_empty() {
        assert_eq!(normalize("',."), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn plural_suffixes() {
        assert_eq!(normalize("caresses"), "caress");
        assert_eq!(normalize("ponies"), "poni");
        assert_eq!(normalize("caress"), "caress");
        assert_eq!(normalize("cats"), "cat");
    }

    #[test]
    fn verb_suffixes_need_a_vowel_in_the_base() {
        assert_eq!(normalize("walking"), "walk");
        assert_eq!(normalize("sing"), "sing");
        assert_eq!(normalize("agreed"), "agree");
        assert_eq!(normalize("plastered"), "plaster");
    }

    #[test]
    fn terminal_y_becomes_i() {
        assert_eq!(normalize("happy"), "happi");
        // "by" is short enough to skip stemming entirely
        assert_eq!(normalize("by"), "by");
        // "dry": no vowel before the y, so it stays
        assert_eq!(normalize("dry"), "dry");
    }

    #[test]
    fn rules_chain_in_order() {
        // plural strip exposes the verb suffix
        assert_eq!(normalize("walkings"), "walk");
    }
}
