//! Component catalog for the analysis helper.
//!
//! This crate owns the static registry of extracted InnoDB component
//! write-ups and the two read-only operations over it:
//! - Listing every entry with its on-disk size
//! - Previewing a single entry by index

pub mod format;
pub mod lister;
pub mod registry;
pub mod viewer;

// Re-export main types
pub use lister::{list_components, render_listing, ComponentListing};
pub use registry::{component, components, ComponentEntry, COMPONENT_FILES};
pub use viewer::{render_preview, show_component, Preview};
