//! Topic lookup. Never fails: unknown topics get the generic prompt.

use crate::table::{topics, ANALYSIS_PROMPTS, FALLBACK_PROMPT};
use crate::types::ResolvedPrompt;

/// Prompt text for `topic`, or [`FALLBACK_PROMPT`].
///
/// # Example
/// ```
/// use analyze_prompt::{get_prompt, FALLBACK_PROMPT};
///
/// assert!(get_prompt("btree").starts_with("Analyze this B+ tree"));
/// assert_eq!(get_prompt("nonsense_topic"), FALLBACK_PROMPT);
/// ```
pub fn get_prompt(topic: &str) -> &'static str {
    resolve_prompt(topic).prompt
}

/// Look up `topic` and record whether the fallback was used.
pub fn resolve_prompt(topic: &str) -> ResolvedPrompt {
    let (prompt, fallback) = match ANALYSIS_PROMPTS.get(topic) {
        Some(text) => (*text, false),
        None => {
            tracing::debug!(topic, known = ?topics(), "No prompt registered, using generic prompt");
            (FALLBACK_PROMPT, true)
        }
    };

    ResolvedPrompt {
        topic: topic.to_string(),
        prompt,
        fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_btree_prompt_verbatim() {
        let expected = "Analyze this B+ tree implementation and explain:
1. The B+ tree structure and node types
2. Search, insert, and delete algorithms
3. Page split and merge operations
4. Pessimistic vs optimistic operations
5. Cursor types and their use cases
6. Performance characteristics";
        assert_eq!(get_prompt("btree"), expected);
    }

    #[test]
    fn test_unknown_topic_falls_back() {
        assert_eq!(
            get_prompt("nonsense_topic"),
            "Analyze this code and explain its key concepts, algorithms, and implementation details."
        );

        let resolved = resolve_prompt("nonsense_topic");
        assert!(resolved.fallback);
        assert_eq!(resolved.topic, "nonsense_topic");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(resolve_prompt("BTREE").fallback);
        assert!(resolve_prompt("").fallback);
        assert!(!resolve_prompt("buffer_pool").fallback);
    }
}
