//! Renderer module — trait-based format dispatch.

pub mod markdown;
pub mod table;

use crate::model::Document;
use crate::settings::Settings;
use anyhow::{anyhow, Result};

/// Trait for rendering a Document into a specific output format.
///
/// Sorting options reorder the document's record sequences in place, so the
/// document is taken mutably. The error channel exists for uniformity across
/// formats; the table renderer never fails on well-formed input.
pub trait Renderer: std::fmt::Debug {
    fn render(&self, doc: &mut Document, settings: &Settings) -> Result<String>;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(table::TableRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use markdown", format)),
    }
}
