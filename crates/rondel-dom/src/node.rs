use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::style::Style;

/// Unique node identifier within a document.
pub type NodeId = Uuid;

/// A single visual element: a tag name, an optional `id` attribute used for
/// lookups, the inline style block, and tree links managed by `Document`.
///
/// A freshly constructed element is unattached: no parent, no children.
/// Attachment only ever happens through `Document`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub id: NodeId,
    pub tag: String,
    /// The `id` attribute, resolved by `Document::element_by_id`.
    pub html_id: Option<String>,
    pub style: Style,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            tag: tag.to_string(),
            html_id: None,
            style: Style::default(),
            children: Vec::new(),
            parent: None,
        }
    }

    pub fn with_html_id(mut self, html_id: &str) -> Self {
        self.html_id = Some(html_id.to_string());
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn is_attached(&self) -> bool {
        self.parent.is_some()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}
