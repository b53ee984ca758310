use autumnus::{HtmlLinkedBuilder, formatter::Formatter, languages::Language, themes};

#[derive(thiserror::Error, Debug)]
pub enum HighlightError {
    #[error("unknown highlight theme: {0}")]
    UnknownTheme(String),
}

/// A syntax highlighter using autumnus (tree-sitter based).
///
/// Code is annotated with CSS classes; colors come from an optional theme
/// stylesheet.
pub struct SyntaxHighlighter {
    theme_name: Option<String>,
}

impl SyntaxHighlighter {
    /// Create a new syntax highlighter, optionally bound to a theme.
    pub fn new(theme_name: Option<&str>) -> Self {
        Self {
            theme_name: theme_name.map(str::to_string),
        }
    }

    /// Highlight code and return HTML with CSS classes.
    /// Returns the original code wrapped in a plain `<code>` if the language is not supported.
    pub fn highlight(&self, code: &str, language: &str) -> String {
        let lang = Language::guess(language, code);

        if matches!(lang, Language::PlainText)
            && !language.is_empty()
            && language != "plaintext"
            && language != "text"
        {
            log::debug!("no grammar for '{}', emitting plain code block", language);
            return plain_code_block(code, language);
        }

        let formatter = HtmlLinkedBuilder::new().source(code).lang(lang).build();

        match formatter {
            Ok(f) => {
                let mut output: Vec<u8> = Vec::new();
                if f.format(&mut output).is_ok() {
                    String::from_utf8(output).unwrap_or_else(|_| plain_code_block(code, language))
                } else {
                    plain_code_block(code, language)
                }
            }
            Err(_) => plain_code_block(code, language),
        }
    }

    /// Stylesheet for the configured theme, if any.
    pub fn theme_css(&self) -> Result<Option<String>, HighlightError> {
        let Some(name) = &self.theme_name else {
            return Ok(None);
        };
        let theme = themes::get(name).map_err(|_| HighlightError::UnknownTheme(name.clone()))?;
        Ok(Some(theme.css(false)))
    }
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Create a plain code block without highlighting.
fn plain_code_block(code: &str, language: &str) -> String {
    let escaped = html_escape(code);
    if language.is_empty() {
        format!("<pre><code>{}</code></pre>", escaped)
    } else {
        format!(
            "<pre><code class=\"language-{}\">{}</code></pre>",
            html_escape(language),
            escaped
        )
    }
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_rust() {
        let highlighter = SyntaxHighlighter::default();
        let result = highlighter.highlight("fn main() {}", "rust");
        assert!(result.contains("<pre"));
        assert!(result.contains("<code"));
        assert!(result.contains("</pre>"));
    }

    #[test]
    fn test_highlight_unknown_language() {
        let highlighter = SyntaxHighlighter::default();
        let result = highlighter.highlight("a < b", "unknown_lang_xyz");
        assert_eq!(
            result,
            "<pre><code class=\"language-unknown_lang_xyz\">a &lt; b</code></pre>"
        );
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<div>&</div>"), "&lt;div&gt;&amp;&lt;/div&gt;");
    }

    #[test]
    fn test_theme_css() {
        let highlighter = SyntaxHighlighter::new(Some("dracula"));
        let css = highlighter.theme_css().unwrap();
        assert!(css.is_some_and(|css| !css.is_empty()));
    }

    #[test]
    fn test_no_theme_means_no_css() {
        let highlighter = SyntaxHighlighter::default();
        assert!(highlighter.theme_css().unwrap().is_none());
    }

    #[test]
    fn test_unknown_theme() {
        let highlighter = SyntaxHighlighter::new(Some("no-such-theme"));
        assert!(matches!(
            highlighter.theme_css(),
            Err(HighlightError::UnknownTheme(_))
        ));
    }
}
