use serde::Serialize;
use tera::{Context, Tera};

/// Name under which the built-in page template is registered.
const PAGE_TEMPLATE: &str = "page.html";

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

/// The template renderer, wrapping Tera.
///
/// The page template is compiled into the binary, so every output shares the
/// same head, stylesheet and print rules.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Create a new renderer with the built-in page template.
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_TEMPLATE, include_str!("../../templates/page.html"))?;

        Ok(Self { tera })
    }

    /// Render a page with the given context.
    pub fn render_page(&self, context: &PageContext) -> Result<String, RenderError> {
        let mut tera_context = Context::new();
        tera_context.insert("page", &context.page);
        tera_context.insert("content", &context.content);
        tera_context.insert("highlight_css", &context.highlight_css);

        Ok(self.tera.render(PAGE_TEMPLATE, &tera_context)?)
    }
}

/// Context passed to the page template.
#[derive(Debug, Serialize)]
pub struct PageContext {
    pub page: PageInfo,
    /// Rendered HTML fragment, inserted without escaping
    pub content: String,
    /// Highlight theme stylesheet appended to the style block
    pub highlight_css: Option<String>,
}

/// Information about the page.
#[derive(Debug, Clone, Serialize)]
pub struct PageInfo {
    pub title: String,
    pub lang: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(content: &str) -> PageContext {
        PageContext {
            page: PageInfo {
                title: "Product Requirements".to_string(),
                lang: "en".to_string(),
            },
            content: content.to_string(),
            highlight_css: None,
        }
    }

    #[test]
    fn test_render_page_structure() {
        let renderer = Renderer::new().unwrap();
        let html = renderer.render_page(&page("<h1>Title</h1>")).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("<meta charset=\"UTF-8\">"));
        assert_eq!(html.matches("<title>").count(), 1);
        assert!(html.contains("<title>Product Requirements</title>"));
        assert_eq!(html.matches("<style>").count(), 1);
        assert!(html.contains("@media print"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_content_inside_body_unescaped() {
        let renderer = Renderer::new().unwrap();
        let html = renderer
            .render_page(&page("<p>Hello <strong>world</strong></p>"))
            .unwrap();

        let body_start = html.find("<body>").unwrap();
        let body_end = html.find("</body>").unwrap();
        let body = &html[body_start..body_end];
        assert!(body.contains("<p>Hello <strong>world</strong></p>"));
    }

    #[test]
    fn test_empty_content() {
        let renderer = Renderer::new().unwrap();
        let html = renderer.render_page(&page("")).unwrap();

        let body_start = html.find("<body>").unwrap() + "<body>".len();
        let body_end = html.find("</body>").unwrap();
        assert!(html[body_start..body_end].trim().is_empty());
    }

    #[test]
    fn test_title_is_escaped() {
        let renderer = Renderer::new().unwrap();
        let mut context = page("");
        context.page.title = "Q&A <draft>".to_string();

        let html = renderer.render_page(&context).unwrap();
        assert!(html.contains("<title>Q&amp;A &lt;draft&gt;</title>"));
    }

    #[test]
    fn test_highlight_css_in_style_block() {
        let renderer = Renderer::new().unwrap();
        let mut context = page("");
        context.highlight_css = Some(".athl-keyword { color: red; }".to_string());

        let html = renderer.render_page(&context).unwrap();
        let style_start = html.find("<style>").unwrap();
        let style_end = html.find("</style>").unwrap();
        assert!(html[style_start..style_end].contains(".athl-keyword { color: red; }"));
        assert_eq!(html.matches("<style>").count(), 1);
    }
}
