//! # Rondel Swatch
//!
//! The swatch-row widget: a factory producing one styled circular element,
//! and a driver that appends one circle per configured color to a container.

pub mod circle;
pub mod row;

pub use circle::circle;
pub use row::{mount, mount_by_id, SwatchRow};
