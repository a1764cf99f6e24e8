//! Documents that can hold a style container element.

use thiserror::Error;

/// What happened to the style container on an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleUpdate {
    /// No container with the id existed; one was created and attached.
    Created,
    /// The existing container's text was overwritten.
    Replaced,
    /// The container already held exactly this text.
    Unchanged,
}

/// Errors raised while writing to a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("No document available")]
    NoDocument,
    #[error("Failed to create style element: {0}")]
    CreateFailed(String),
    #[error("Failed to attach style element: {0}")]
    AttachFailed(String),
}

/// A document with id-addressed style elements.
pub trait StyleDocument {
    /// Set the text of the style element `id`, creating and attaching it if
    /// it does not exist yet. Never creates a second element with the same id.
    fn upsert_style(&mut self, id: &str, css: &str) -> Result<StyleUpdate, DocumentError>;

    /// Current text of the style element `id`, if present.
    fn style_text(&self, id: &str) -> Option<String>;
}

/// A style element held by [`MemoryDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleNode {
    pub id: String,
    pub text: String,
}

/// In-memory document for native rendering and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    nodes: Vec<StyleNode>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Style elements in insertion order.
    pub fn nodes(&self) -> &[StyleNode] {
        &self.nodes
    }

    /// Number of style elements carrying `id`.
    pub fn style_count(&self, id: &str) -> usize {
        self.nodes.iter().filter(|node| node.id == id).count()
    }

    /// Serialize every style element as `<style id="...">` markup.
    pub fn to_html(&self) -> String {
        self.nodes
            .iter()
            .map(|node| {
                format!(
                    "<style id=\"{}\">\n{}</style>\n",
                    node.id.replace('"', "&quot;"),
                    // keep the text from closing the element early
                    node.text.replace("</", "<\\/")
                )
            })
            .collect()
    }
}

impl StyleDocument for MemoryDocument {
    fn upsert_style(&mut self, id: &str, css: &str) -> Result<StyleUpdate, DocumentError> {
        match self.nodes.iter_mut().find(|node| node.id == id) {
            Some(node) if node.text == css => Ok(StyleUpdate::Unchanged),
            Some(node) => {
                node.text = css.to_string();
                Ok(StyleUpdate::Replaced)
            }
            None => {
                self.nodes.push(StyleNode {
                    id: id.to_string(),
                    text: css.to_string(),
                });
                Ok(StyleUpdate::Created)
            }
        }
    }

    fn style_text(&self, id: &str) -> Option<String> {
        self.nodes
            .iter()
            .find(|node| node.id == id)
            .map(|node| node.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_creates_then_replaces() {
        let mut doc = MemoryDocument::new();

        assert_eq!(doc.upsert_style("a", "x {}").unwrap(), StyleUpdate::Created);
        assert_eq!(doc.upsert_style("a", "y {}").unwrap(), StyleUpdate::Replaced);
        assert_eq!(doc.upsert_style("a", "y {}").unwrap(), StyleUpdate::Unchanged);

        assert_eq!(doc.style_count("a"), 1);
        assert_eq!(doc.style_text("a").as_deref(), Some("y {}"));
    }

    #[test]
    fn test_ids_are_independent() {
        let mut doc = MemoryDocument::new();
        doc.upsert_style("a", "1").unwrap();
        doc.upsert_style("b", "2").unwrap();

        assert_eq!(doc.nodes().len(), 2);
        assert_eq!(doc.style_text("b").as_deref(), Some("2"));
        assert!(doc.style_text("c").is_none());
    }

    #[test]
    fn test_to_html() {
        let mut doc = MemoryDocument::new();
        doc.upsert_style("theme", "a { color: red; }\n").unwrap();

        assert_eq!(
            doc.to_html(),
            "<style id=\"theme\">\na { color: red; }\n</style>\n"
        );
    }

    #[test]
    fn test_to_html_escapes_closing_tag() {
        let mut doc = MemoryDocument::new();
        doc.upsert_style("theme", "</style><b>").unwrap();
        assert!(doc.to_html().starts_with("<style id=\"theme\">\n<\\/style><b>"));
    }
}
