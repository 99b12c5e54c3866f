//! Renderable fragments produced by column templates.

use std::fmt::Write as _;

/// An opaque piece of markup returned by a column template.
///
/// Fragments are passed to the output untouched; no format specifier is
/// ever applied to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text(String),
    Element {
        tag: String,
        classes: Vec<String>,
        children: Vec<Fragment>,
    },
}

impl Fragment {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element {
            tag: tag.into(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn span() -> Self {
        Self::element("span")
    }

    /// Add a CSS class. Ignored on text fragments.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        if let Self::Element { classes, .. } = &mut self {
            classes.extend(class.into().split_whitespace().map(str::to_string));
        }
        self
    }

    /// Append a child. A text fragment becomes the concatenation.
    pub fn child(mut self, child: Fragment) -> Self {
        match &mut self {
            Self::Element { children, .. } => children.push(child),
            Self::Text(content) => content.push_str(&child.to_plain_text()),
        }
        self
    }

    /// Append a text child.
    pub fn content(self, content: impl ToString) -> Self {
        self.child(Self::Text(content.to_string()))
    }

    /// Text content with all markup stripped.
    pub fn to_plain_text(&self) -> String {
        match self {
            Self::Text(content) => content.clone(),
            Self::Element { children, .. } => children.iter().map(Self::to_plain_text).collect(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(content) => out.push_str(&escape_html(content)),
            Self::Element {
                tag,
                classes,
                children,
            } => {
                let _ = write!(out, "<{tag}");
                if !classes.is_empty() {
                    let _ = write!(out, " class=\"{}\"", escape_html(&classes.join(" ")));
                }
                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{tag}>");
            }
        }
    }
}

impl From<String> for Fragment {
    fn from(content: String) -> Self {
        Self::Text(content)
    }
}

impl From<&str> for Fragment {
    fn from(content: &str) -> Self {
        Self::Text(content.to_string())
    }
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_html() {
        let badge = Fragment::span().class("badge bg-info").content(5);
        assert_eq!(badge.to_html(), "<span class=\"badge bg-info\">5</span>");
        assert_eq!(badge.to_plain_text(), "5");
        assert_eq!(badge, Fragment::span().class("badge").class("bg-info").content("5"));
    }

    #[test]
    fn test_nested_plain_text() {
        let fragment = Fragment::element("div")
            .child(Fragment::span().content("$50,000"))
            .child(Fragment::text(" / yr"));
        assert_eq!(fragment.to_plain_text(), "$50,000 / yr");
    }

    #[test]
    fn test_html_escaping() {
        let fragment = Fragment::span().content("<b>R&D</b>");
        assert_eq!(fragment.to_html(), "<span>&lt;b&gt;R&amp;D&lt;/b&gt;</span>");
    }

    #[test]
    fn test_text_ignores_class() {
        let fragment = Fragment::text("plain").class("fw-bold");
        assert_eq!(fragment, Fragment::text("plain"));
    }
}
