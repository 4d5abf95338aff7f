//! Prompt types for the component helper.

use serde::Serialize;

/// Result of looking up a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPrompt {
    /// Topic key as requested
    pub topic: String,

    /// Prompt text, verbatim
    pub prompt: &'static str,

    /// True when the topic is unknown and the generic prompt was used
    pub fallback: bool,
}
