//! Bounded preview of a single component.

use std::path::Path;

use analyze_core::{AppError, AppResult};

use crate::format::{group_thousands, section_header};
use crate::registry::component;

/// The leading part of a component file plus its full size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub filename: &'static str,

    /// First `max_chars` characters of the content
    pub text: String,

    /// Length of the whole file in bytes
    pub total_bytes: usize,

    /// Whether `text` is shorter than the content
    pub truncated: bool,
}

/// Read the component at `index` from `workspace` and keep its first `max_chars` characters.
///
/// An out-of-range index fails with `AppError::InvalidIndex` before touching
/// the filesystem. A missing file fails with `AppError::ComponentNotFound`.
/// Content that is not valid UTF-8 is decoded lossily.
pub fn show_component(workspace: &Path, index: i64, max_chars: usize) -> AppResult<Preview> {
    let entry = component(index).ok_or(AppError::InvalidIndex(index))?;
    let path = workspace.join(entry.filename);

    if !path.exists() {
        tracing::debug!(path = ?path, "Component file missing");
        return Err(AppError::ComponentNotFound(entry.filename.to_string()));
    }

    let bytes = std::fs::read(&path)?;
    let content = String::from_utf8_lossy(&bytes);

    let mut chars = content.chars();
    let text: String = chars.by_ref().take(max_chars).collect();
    let truncated = chars.next().is_some();

    tracing::info!(
        filename = entry.filename,
        total_bytes = bytes.len(),
        truncated,
        "Loaded component preview"
    );

    Ok(Preview {
        filename: entry.filename,
        text,
        total_bytes: bytes.len(),
        truncated,
    })
}

/// Render a preview for the console.
///
/// The closing size line always says "truncated", whether or not the preview
/// actually cut anything off.
pub fn render_preview(preview: &Preview) -> String {
    format!(
        "{}{}\n\n... (truncated, total size: {} bytes)\n",
        section_header(&format!("COMPONENT: {}", preview.filename)),
        preview.text,
        group_thousands(preview.total_bytes as u64)
    )
}
