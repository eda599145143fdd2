//! JSON renderer — structured output for custom page pipelines.
//!
//! Serializes the [`Page`] model directly.

use crate::model::Page;
use crate::render::PageRenderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl PageRenderer for JsonRenderer {
    fn render(&self, page: &Page) -> Result<String> {
        let mut out = serde_json::to_string_pretty(page).context("failed to serialize page")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
