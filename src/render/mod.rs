//! Renderer module — trait-based page format dispatch.

pub mod html;
pub mod json;
pub mod markdown;

use crate::model::Page;
use anyhow::{anyhow, Result};

/// Turns a documented page into its final text form. This is the one point
/// where a host site generator plugs in its own page layout.
pub trait PageRenderer {
    fn render(&self, page: &Page) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, template: Option<String>) -> Result<Box<dyn PageRenderer>> {
    match format {
        "html" => Ok(Box::new(html::HtmlRenderer::new(template))),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use html or json", format)),
    }
}
