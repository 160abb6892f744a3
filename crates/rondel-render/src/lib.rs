//! # Rondel Render
//!
//! Output side of the swatch pipeline: inline-block layout, HTML
//! serialization with inline styles, frontend-consumable render frames, and
//! point-query hit testing over laid-out boxes.

pub mod frame;
pub mod hit;
pub mod html;
pub mod layout;

pub use frame::{Primitive, RenderFrame};
pub use hit::HitIndex;
pub use html::{to_html_string, HtmlWriter, RenderError};
pub use layout::{layout_children, LayoutBox};
