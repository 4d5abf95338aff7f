//! Command handlers for the component analysis helper.
//!
//! Each handler returns the text destined for stdout. User-facing failures come
//! back as `AppError`s and are printed by the caller.

pub mod list;
pub mod prompt;
pub mod show;
pub mod usage;

// Re-export command types for convenience
pub use list::ListCommand;
pub use prompt::PromptCommand;
pub use show::ShowCommand;

use analyze_core::{AppConfig, AppError, AppResult};

use crate::dispatch::Invocation;

/// Run an invocation and return its stdout text.
pub fn execute(invocation: &Invocation, config: &AppConfig, json: bool) -> AppResult<String> {
    match invocation {
        Invocation::NoArgs => Ok(usage::usage_text()),
        Invocation::List => ListCommand { json }.execute(config),
        Invocation::Show(index) => ShowCommand {
            index: index.clone(),
        }
        .execute(config),
        Invocation::Prompt(topic) => PromptCommand {
            topic: topic.clone(),
            json,
        }
        .execute(),
        Invocation::Unknown(token) => Err(AppError::UnrecognizedCommand(token.clone())),
    }
}
