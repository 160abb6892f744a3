use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::node::{Element, NodeId};

#[derive(Error, Debug)]
pub enum DomError {
    #[error("no element with id '{0}' exists in the document")]
    ContainerNotFound(String),

    #[error("node {0} is not part of this document")]
    NodeMissing(NodeId),

    #[error("appending {child} under {parent} would create a cycle")]
    CycleDetected { parent: NodeId, child: NodeId },
}

/// The document arena. Owns every element and manages the tree links.
///
/// The first inserted element becomes the document root. Child order is
/// append order and is preserved through serialization.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Document {
    nodes: HashMap<NodeId, Element>,
    pub root: Option<NodeId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Node management ──────────────────────────────────────────────

    /// Take ownership of an unattached element. No attachment happens here.
    pub fn insert(&mut self, element: Element) -> NodeId {
        let id = element.id;
        self.nodes.insert(id, element);
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(&id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(&id)
    }

    /// Children of a node, in append order. Empty for unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&id)
            .map(|el| el.children.as_slice())
            .unwrap_or(&[])
    }

    /// Resolve an element by its `id` attribute.
    pub fn element_by_id(&self, html_id: &str) -> Option<NodeId> {
        self.nodes
            .values()
            .find(|el| el.html_id.as_deref() == Some(html_id))
            .map(|el| el.id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Tree mutation ────────────────────────────────────────────────

    /// Insert an element and append it under `parent` in one step.
    ///
    /// The parent is checked before the element enters the arena, so a
    /// failed append leaves the document untouched and the element is
    /// simply dropped.
    pub fn append(&mut self, parent: NodeId, element: Element) -> Result<NodeId, DomError> {
        if !self.nodes.contains_key(&parent) {
            return Err(DomError::NodeMissing(parent));
        }
        let child = self.insert(element);
        self.append_child(parent, child)?;
        Ok(child)
    }

    /// Attach `child` as the last child of `parent`.
    ///
    /// A node hangs off at most one parent; appending an already attached
    /// node moves it. Appending a node under one of its own descendants
    /// (or under itself) is rejected.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if !self.nodes.contains_key(&parent) {
            return Err(DomError::NodeMissing(parent));
        }
        if !self.nodes.contains_key(&child) {
            return Err(DomError::NodeMissing(child));
        }
        // Walk up from the parent; hitting `child` means `parent` lives
        // inside the subtree being attached.
        let mut ancestor = Some(parent);
        while let Some(current) = ancestor {
            if current == child {
                return Err(DomError::CycleDetected { parent, child });
            }
            ancestor = self.nodes.get(&current).and_then(|el| el.parent);
        }

        self.detach(child);
        if let Some(p) = self.nodes.get_mut(&parent) {
            p.children.push(child);
        }
        if let Some(c) = self.nodes.get_mut(&child) {
            c.parent = Some(parent);
        }
        Ok(())
    }

    /// Remove a node and its whole subtree from the document.
    pub fn remove(&mut self, id: NodeId) -> Option<Element> {
        if !self.nodes.contains_key(&id) {
            return None;
        }
        self.detach(id);

        let mut dropped = 0usize;
        let mut stack = self
            .nodes
            .get(&id)
            .map(|el| el.children.clone())
            .unwrap_or_default();
        while let Some(next) = stack.pop() {
            if let Some(el) = self.nodes.remove(&next) {
                dropped += 1;
                stack.extend(el.children);
            }
        }

        let removed = self.nodes.remove(&id);
        if self.root == Some(id) {
            self.root = None;
        }
        log::debug!("removed node {} and {} descendants", id, dropped);
        removed
    }

    fn detach(&mut self, child: NodeId) {
        let old_parent = match self.nodes.get(&child).and_then(|el| el.parent) {
            Some(p) => p,
            None => return,
        };
        if let Some(p) = self.nodes.get_mut(&old_parent) {
            p.children.retain(|&id| id != child);
        }
        if let Some(c) = self.nodes.get_mut(&child) {
            c.parent = None;
        }
    }

    // ── Serialization ────────────────────────────────────────────────

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
