//! HTML helpers: escaping and the document wrapper around each page.

/// Escape text for use in element content and quoted attributes.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Head content plus body for a full HTML document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Page title.
    pub title: String,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Stylesheet hrefs.
    pub stylesheets: Vec<String>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add a stylesheet link.
    pub fn with_stylesheet(mut self, href: &str) -> Self {
        self.stylesheets.push(href.to_string());
        self
    }

    fn render_head(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape(&self.title)));
        for (name, content) in &self.meta {
            html.push_str(&format!(
                "<meta name=\"{}\" content=\"{}\">\n",
                escape(name),
                escape(content)
            ));
        }
        for href in &self.stylesheets {
            html.push_str(&format!("<link rel=\"stylesheet\" href=\"{}\">\n", escape(href)));
        }
        html
    }

    /// Render the full document around an already-rendered body.
    pub fn render(&self, body: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n{}</head>\n<body>\n{}\n</body>\n</html>",
            self.render_head(),
            body
        )
    }
}
