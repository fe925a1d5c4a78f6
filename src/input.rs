//! Loading and saving render input documents.
//!
//! A document is a YAML or JSON serialization of [`RenderInput`]. The
//! format is picked from the file extension: `.json` is JSON, everything
//! else is YAML.
//!
//! ```yaml
//! lead_bold_text: Explore Our Collection
//! description: Visit our **premium collection** at [our store](https://example.com).
//! faqs:
//!   - question: Do you ship abroad?
//!     answer: Yes, worldwide.
//! ```

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::form::INITIAL_FAQS;
use crate::types::{FaqEntry, RenderInput};

/// Serialization format of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Format implied by `path`'s extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

/// Read and parse the document at `path`.
pub fn load(path: &Path) -> Result<RenderInput> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = Format::from_path(path);
    debug!(path = %path.display(), ?format, "loading input document");
    parse(&content, format)
}

/// Serialize `input` and write it to `path`.
pub fn save(path: &Path, input: &RenderInput) -> Result<()> {
    let content = match Format::from_path(path) {
        Format::Json => to_json(input)?,
        Format::Yaml => to_yaml(input)?,
    };
    std::fs::write(path, content).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse(content: &str, format: Format) -> Result<RenderInput> {
    match format {
        Format::Yaml => parse_yaml(content),
        Format::Json => parse_json(content),
    }
}

pub fn parse_yaml(content: &str) -> Result<RenderInput> {
    // An empty YAML file deserializes as null rather than an empty mapping.
    if content.trim().is_empty() {
        return Ok(RenderInput::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

pub fn parse_json(content: &str) -> Result<RenderInput> {
    Ok(serde_json::from_str(content)?)
}

pub fn to_yaml(input: &RenderInput) -> Result<String> {
    Ok(serde_yaml::to_string(input)?)
}

pub fn to_json(input: &RenderInput) -> Result<String> {
    let mut out = serde_json::to_string_pretty(input)?;
    out.push('\n');
    Ok(out)
}

/// The starter document: blank fields and four empty FAQ entries.
pub fn starter() -> RenderInput {
    RenderInput {
        lead_bold_text: Some(String::new()),
        description: String::new(),
        faqs: vec![FaqEntry::default(); INITIAL_FAQS],
    }
}
