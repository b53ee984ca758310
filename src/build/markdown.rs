//! Markdown rendering with syntax highlighting and heading ids.

use std::collections::HashSet;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};

use super::highlight::SyntaxHighlighter;
use crate::config::MarkdownConfig;

#[derive(thiserror::Error, Debug)]
pub enum MarkdownError {
    #[error("invalid markdown extension: {0}")]
    InvalidExtension(String),
}

/// Render markdown to an HTML fragment using pulldown-cmark.
pub fn render_markdown(
    markdown: &str,
    highlighter: &SyntaxHighlighter,
    markdown_config: &MarkdownConfig,
) -> Result<String, MarkdownError> {
    let mut options = Options::empty();
    let mut highlight_code = false;
    let mut heading_ids = false;
    for extension in &markdown_config.extensions {
        match extension.as_str() {
            "codehilite" => highlight_code = true,
            "definition_lists" => options.insert(Options::ENABLE_DEFINITION_LIST),
            // Fenced code is core CommonMark, nothing to switch on
            "fenced_code" => {}
            "footnotes" => options.insert(Options::ENABLE_FOOTNOTES),
            "gfm" => options.insert(Options::ENABLE_GFM),
            "heading_attributes" => options.insert(Options::ENABLE_HEADING_ATTRIBUTES),
            "strikethrough" => options.insert(Options::ENABLE_STRIKETHROUGH),
            "tables" => options.insert(Options::ENABLE_TABLES),
            "tasklists" => options.insert(Options::ENABLE_TASKLISTS),
            "toc" => heading_ids = true,
            other => return Err(MarkdownError::InvalidExtension(other.to_string())),
        }
    }

    let parser = Parser::new_ext(markdown, options);

    let mut events: Vec<Event> = if highlight_code {
        highlight_code_blocks(parser, highlighter)
    } else {
        parser.collect()
    };

    if heading_ids {
        assign_heading_ids(&mut events);
    }

    let mut html_output = String::new();
    html::push_html(&mut html_output, events.into_iter());

    Ok(html_output)
}

/// Replace code blocks with highlighted HTML.
fn highlight_code_blocks<'a>(
    parser: Parser<'a>,
    highlighter: &SyntaxHighlighter,
) -> Vec<Event<'a>> {
    let mut in_code_block = false;
    let mut code_language = String::new();
    let mut code_content = String::new();

    parser
        .flat_map(|event| match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                in_code_block = true;
                code_language = match kind {
                    CodeBlockKind::Fenced(lang) => {
                        // Only the first word of the info string names the language
                        lang.split_whitespace().next().unwrap_or("").to_string()
                    }
                    CodeBlockKind::Indented => String::new(),
                };
                code_content.clear();
                vec![]
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                let highlighted = highlighter.highlight(&code_content, &code_language);
                vec![Event::Html(highlighted.into())]
            }
            Event::Text(text) if in_code_block => {
                code_content.push_str(&text);
                vec![]
            }
            _ => vec![event],
        })
        .collect()
}

/// Give every heading without an explicit id a unique slug id.
fn assign_heading_ids(events: &mut [Event<'_>]) {
    let mut used_ids: HashSet<String> = events
        .iter()
        .filter_map(|event| match event {
            Event::Start(Tag::Heading { id: Some(id), .. }) => Some(id.to_string()),
            _ => None,
        })
        .collect();

    for i in 0..events.len() {
        if !matches!(events[i], Event::Start(Tag::Heading { id: None, .. })) {
            continue;
        }

        let mut base_id = slugify(&heading_text(&events[i + 1..]));
        if base_id.is_empty() {
            base_id = "section".to_string();
        }
        let mut id = base_id.clone();
        let mut suffix = 1;
        while used_ids.contains(&id) {
            id = format!("{}-{}", base_id, suffix);
            suffix += 1;
        }
        used_ids.insert(id.clone());

        if let Event::Start(Tag::Heading { id: slot, .. }) = &mut events[i] {
            *slot = Some(id.into());
        }
    }
}

/// Collect the plain text of a heading up to its end tag.
fn heading_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            _ => {}
        }
    }
    text
}

/// Convert a string to a slug suitable for use as an HTML id.
fn slugify(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .replace(' ', "-")
        .replace(|c: char| !c.is_alphanumeric() && c != '-', "")
}
