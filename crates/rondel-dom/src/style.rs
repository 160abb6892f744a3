use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::Color;

/// A CSS length value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Length {
    /// Absolute length in pixels.
    Px(f64),
    /// Percentage, relative to the property's reference box.
    Percent(f64),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{}px", v),
            Length::Percent(v) => write!(f, "{}%", v),
        }
    }
}

/// The CSS `display` mode of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    Inline,
    Block,
    InlineBlock,
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let keyword = match self {
            Display::Inline => "inline",
            Display::Block => "block",
            Display::InlineBlock => "inline-block",
        };
        f.write_str(keyword)
    }
}

/// The inline style block of an element.
///
/// Only the declarations the swatch widget sets are modeled. Emission order
/// is fixed: width, height, border-radius, display, background-color.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub border_radius: Option<Length>,
    pub display: Option<Display>,
    pub background: Option<Color>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: Length) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: Length) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_border_radius(mut self, radius: Length) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn with_display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.width.is_none()
            && self.height.is_none()
            && self.border_radius.is_none()
            && self.display.is_none()
            && self.background.is_none()
    }

    /// Render the style block as an inline CSS declaration list.
    pub fn to_css(&self) -> String {
        let mut declarations: Vec<String> = Vec::new();
        if let Some(width) = self.width {
            declarations.push(format!("width: {}", width));
        }
        if let Some(height) = self.height {
            declarations.push(format!("height: {}", height));
        }
        if let Some(radius) = self.border_radius {
            declarations.push(format!("border-radius: {}", radius));
        }
        if let Some(display) = self.display {
            declarations.push(format!("display: {}", display));
        }
        if let Some(ref background) = self.background {
            declarations.push(format!("background-color: {}", background));
        }
        declarations.join("; ")
    }
}
