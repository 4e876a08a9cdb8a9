//! Ordered keyword rules

/// A single `(keyword set, outcome)` row of a rule table.
///
/// Keywords are lower-case fragments matched by substring containment, so
/// `"книжк"` matches `"книжката"` as well as `"книжка"`.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T: 'static> {
    pub keywords: &'static [&'static str],
    pub outcome: T,
}

impl<T> KeywordRule<T> {
    pub const fn new(keywords: &'static [&'static str], outcome: T) -> Self {
        Self { keywords, outcome }
    }

    /// Whether any keyword occurs in already-normalized `text`.
    pub fn matches(&self, text: &str) -> bool {
        contains_any(text, self.keywords)
    }
}

/// Lower-case the question the same way for every table.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Return the outcome of the first rule matching `text`.
///
/// `text` is normalized here; callers pass the raw question.
pub fn first_match<T: Copy>(rules: &[KeywordRule<T>], text: &str) -> Option<T> {
    let text = normalize(text);
    rules
        .iter()
        .find(|rule| rule.matches(&text))
        .map(|rule| rule.outcome)
}

pub(crate) fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &[KeywordRule<u8>] = &[
        KeywordRule::new(&["alpha", "beta"], 1),
        KeywordRule::new(&["beta", "gamma"], 2),
    ];

    #[test]
    fn test_first_match_wins() {
        // "beta" is in both rules; the first one decides
        assert_eq!(first_match(RULES, "only beta here"), Some(1));
        assert_eq!(first_match(RULES, "gamma ray"), Some(2));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(first_match(RULES, "delta"), None);
        assert_eq!(first_match(RULES, ""), None);
    }

    #[test]
    fn test_substring_and_case() {
        assert_eq!(first_match(RULES, "ALPHABET"), Some(1));
        assert_eq!(normalize("КАТ Пловдив"), "кат пловдив");
    }
}
