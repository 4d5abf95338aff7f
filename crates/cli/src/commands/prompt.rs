//! Prompt command handler.

use analyze_catalog::format::section_header;
use analyze_core::AppResult;
use analyze_prompt::resolve_prompt;

/// Print the analysis prompt registered for a topic
#[derive(Debug)]
pub struct PromptCommand {
    /// Topic key (e.g. "btree")
    pub topic: String,

    /// Output as JSON
    pub json: bool,
}

impl PromptCommand {
    pub fn execute(&self) -> AppResult<String> {
        tracing::info!("Executing prompt command for topic '{}'", self.topic);

        let resolved = resolve_prompt(&self.topic);

        if self.json {
            let mut out = serde_json::to_string_pretty(&resolved)?;
            out.push('\n');
            return Ok(out);
        }

        Ok(format!(
            "{}{}\n",
            section_header(&format!("ANALYSIS PROMPT FOR: {}", resolved.topic)),
            resolved.prompt
        ))
    }
}
