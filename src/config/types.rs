//! Configuration type definitions.
//!
//! These types are pure data - no I/O or complex logic.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// =============================================================================
// Top-level config
// =============================================================================

/// Configuration for a single conversion.
///
/// YAML format (every field is optional):
/// ```yaml
/// input: prd.md
/// output: prd.html
/// document:
///   title: Product Requirements Document
///   lang: en
/// markdown:
///   extensions: [tables, fenced_code, codehilite]
///   highlight_theme: github_light
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// The markdown file to read
    #[serde(default = "default_input")]
    pub input: PathBuf,
    /// Where the HTML page is written
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub document: DocumentConfig,
    #[serde(default)]
    pub markdown: MarkdownConfig,
}

fn default_input() -> PathBuf {
    PathBuf::from("prd.md")
}

fn default_output() -> PathBuf {
    PathBuf::from("prd.html")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            document: DocumentConfig::default(),
            markdown: MarkdownConfig::default(),
        }
    }
}

// =============================================================================
// Document configuration
// =============================================================================

/// Metadata written into the page head.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_title() -> String {
    "Product Requirements Document - San Diego BJJ Academy".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            lang: default_lang(),
        }
    }
}

// =============================================================================
// Markdown configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownConfig {
    /// Extensions to enable for markdown processing
    #[serde(default = "default_markdown_extensions")]
    pub extensions: Vec<String>,
    /// Highlight theme whose CSS is embedded in the page (none by default,
    /// code blocks then only carry class annotations)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_theme: Option<String>,
}

fn default_markdown_extensions() -> Vec<String> {
    vec![
        "tables".to_string(),
        "fenced_code".to_string(),
        "codehilite".to_string(),
    ]
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            extensions: default_markdown_extensions(),
            highlight_theme: None,
        }
    }
}

impl MarkdownConfig {
    /// Check whether an extension is enabled by name.
    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.iter().any(|e| e == name)
    }
}
