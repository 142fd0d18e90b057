//! Output Rendering
//!
//! Presents a [`Dashboard`] as a text report or as JSON.

mod table;

pub use table::render_table;

use clap::ValueEnum;
use thiserror::Error;

use crate::metrics::Dashboard;

/// Output format for dashboards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Rendering failures
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to format table: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Failed to serialize dashboard: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render a dashboard in the requested format
pub fn render(dashboard: &Dashboard, format: OutputFormat) -> Result<String, RenderError> {
    let text = match format {
        OutputFormat::Table => render_table(dashboard)?,
        OutputFormat::Json => serde_json::to_string_pretty(dashboard)?,
    };
    Ok(text)
}
