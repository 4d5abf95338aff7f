//! Analysis prompts for the component helper.
//!
//! This crate provides the canned prompt texts handed to a separate analysis
//! process:
//! - A fixed topic → prompt table
//! - Lookup with a generic fallback for unknown topics

pub mod retriever;
pub mod table;
pub mod types;

// Re-export main types
pub use retriever::{get_prompt, resolve_prompt};
pub use table::{topics, FALLBACK_PROMPT};
pub use types::ResolvedPrompt;
