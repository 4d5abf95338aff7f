//! Catalog listing with on-disk sizes.
//!
//! Sizes are read fresh on every call. A missing file is not an error; its
//! entry is listed without a size.

use std::fmt::Write;
use std::path::Path;

use serde::Serialize;

use crate::format::{banner, group_thousands, section_header};
use crate::registry::components;

/// Title printed above the listing.
pub const LISTING_TITLE: &str = "INNODB COMPONENTS FOR ANALYSIS";

/// Column width of the filename field.
const FILENAME_WIDTH: usize = 35;

/// One listed component with its current size on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentListing {
    pub index: usize,
    pub filename: &'static str,
    pub description: &'static str,

    /// Size in bytes, or `None` when the file does not exist
    pub size_bytes: Option<u64>,
}

/// Enumerate the catalog in order, probing each file under `workspace`.
pub fn list_components(workspace: &Path) -> Vec<ComponentListing> {
    components()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let path = workspace.join(entry.filename);
            let size_bytes = std::fs::metadata(&path).ok().map(|meta| meta.len());
            tracing::debug!(index, path = ?path, ?size_bytes, "Probed component");

            ComponentListing {
                index,
                filename: entry.filename,
                description: entry.description,
                size_bytes,
            }
        })
        .collect()
}

/// Render the framed, human-readable listing.
///
/// Empty files get no size line, the same as missing ones.
pub fn render_listing(listings: &[ComponentListing]) -> String {
    let mut out = section_header(LISTING_TITLE);

    for item in listings {
        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            "{:>2}. {:<width$} - {}",
            item.index,
            item.filename,
            item.description,
            width = FILENAME_WIDTH
        );
        if let Some(size) = item.size_bytes.filter(|&s| s > 0) {
            let _ = writeln!(
                out,
                "    Size: {} bytes ({}KB)",
                group_thousands(size),
                size / 1024
            );
        }
    }

    out.push_str(&banner());
    out.push('\n');
    out
}
