//! Hardcoded-credential heuristic.

/// Substring that marks a probable secret-key literal.
const KEY_PREFIX: &str = "sk-";

/// Case-insensitive marker for an API key assignment.
const KEY_NAME: &str = "api_key";

/// Heuristic test for a hardcoded API key in script text.
///
/// Fires on the literal substring `sk-` (case-sensitive) or on
/// `api_key` anywhere in the lowercased content. Blunt by intent: no
/// understanding of string literals, comments, or escaping, so prose
/// mentioning either marker triggers it and a key split across lines
/// escapes it. Kept behind this one predicate so a stricter detector
/// can replace it without touching the rest of the analyzer.
#[must_use]
pub fn looks_like_hardcoded_key(content: &str) -> bool {
    content.contains(KEY_PREFIX) || content.to_lowercase().contains(KEY_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_prefix_hits() {
        assert!(looks_like_hardcoded_key("token = \"sk-test123\""));
        assert!(looks_like_hardcoded_key("prefix sk- inside prose"));
    }

    #[test]
    fn key_prefix_is_case_sensitive() {
        assert!(!looks_like_hardcoded_key("token = \"SK-TEST123\""));
    }

    #[test]
    fn key_name_is_case_insensitive() {
        assert!(looks_like_hardcoded_key("API_KEY = os.environ"));
        assert!(looks_like_hardcoded_key("Api_Key: value"));
        assert!(looks_like_hardcoded_key("api_key=abc"));
    }

    #[test]
    fn clean_content_passes() {
        assert!(!looks_like_hardcoded_key("import os\nprint('hello')\n"));
        assert!(!looks_like_hardcoded_key("apikey without underscore"));
    }
}
