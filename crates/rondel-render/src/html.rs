use std::io::{self, Write};

use thiserror::Error;

use rondel_dom::{Document, NodeId};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("node {0} is not part of the document")]
    NodeMissing(NodeId),
}

/// Writes an element subtree as HTML markup with inline `style` attributes.
///
/// The emitted markup is the observable equivalent of the element tree: a
/// paired tag per element, the `id` attribute when set, and the style block
/// rendered in its fixed declaration order. No whitespace is inserted
/// between elements, so child order is preserved byte for byte.
pub struct HtmlWriter<W: Write> {
    writer: W,
}

impl<W: Write> HtmlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write `node` and everything beneath it.
    pub fn write_subtree(&mut self, doc: &Document, node: NodeId) -> Result<(), RenderError> {
        let el = doc.get(node).ok_or(RenderError::NodeMissing(node))?;

        write!(self.writer, "<{}", el.tag)?;
        if let Some(ref html_id) = el.html_id {
            write!(self.writer, " id=\"{}\"", escape_attr(html_id))?;
        }
        let css = el.style.to_css();
        if !css.is_empty() {
            write!(self.writer, " style=\"{}\"", escape_attr(&css))?;
        }
        write!(self.writer, ">")?;

        for &child in doc.children(node) {
            self.write_subtree(doc, child)?;
        }

        write!(self.writer, "</{}>", el.tag)?;
        Ok(())
    }
}

/// Render a subtree to an owned string.
pub fn to_html_string(doc: &Document, node: NodeId) -> Result<String, RenderError> {
    let mut buf: Vec<u8> = Vec::new();
    HtmlWriter::new(&mut buf).write_subtree(doc, node)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
