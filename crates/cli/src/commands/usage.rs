//! Help text printed when no command is given.

/// Binary name as shown in the usage text.
pub const PROGRAM: &str = "analyze-components";

pub fn usage_text() -> String {
    format!(
        "\nUsage:
  {PROGRAM} list           - List all components
  {PROGRAM} show <index>   - Show component content
  {PROGRAM} prompt <type>  - Get analysis prompt

Example:
  {PROGRAM} list
  {PROGRAM} show 3
  {PROGRAM} prompt btree
"
    )
}
