//! # Rondel DOM
//!
//! Retained element tree for the swatch renderer: styled elements owned by a
//! `Document` arena, with attribute-id lookup and ordered child append.
//!
//! There is no ambient global document. Callers create a `Document`, insert
//! elements into it, and pass node handles around explicitly.

pub mod color;
pub mod document;
pub mod node;
pub mod style;

pub use color::Color;
pub use document::{Document, DomError};
pub use node::{Element, NodeId};
pub use style::{Display, Length, Style};
