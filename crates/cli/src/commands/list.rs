//! List command handler.

use analyze_catalog::{list_components, render_listing};
use analyze_core::{AppConfig, AppResult};

/// List every registered component with its size on disk
#[derive(Debug)]
pub struct ListCommand {
    /// Output as JSON
    pub json: bool,
}

impl ListCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<String> {
        tracing::info!("Executing list command");
        tracing::debug!("Workspace: {:?}", config.workspace);

        let listings = list_components(&config.workspace);
        let present = listings.iter().filter(|l| l.size_bytes.is_some()).count();
        tracing::debug!(present, total = listings.len(), "Components on disk");

        if self.json {
            let mut out = serde_json::to_string_pretty(&listings)?;
            out.push('\n');
            Ok(out)
        } else {
            Ok(render_listing(&listings))
        }
    }
}
