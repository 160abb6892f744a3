use serde::{Deserialize, Serialize};

use rondel_dom::{Color, Document, NodeId};

use crate::layout::{layout_children, LayoutBox};

/// A draw primitive resolved from one laid-out element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Primitive {
    /// A fully rounded square box, painted as a circle.
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        fill: Option<Color>,
    },
    /// Anything else, painted as a (possibly rounded) rectangle.
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        corner_radius: f64,
        fill: Option<Color>,
    },
}

impl Primitive {
    fn from_box(doc: &Document, b: &LayoutBox) -> Self {
        let fill = doc.get(b.node).and_then(|el| el.style.background.clone());
        if b.corner_radius >= 1.0 && (b.width - b.height).abs() < f64::EPSILON {
            Primitive::Circle {
                cx: b.x + b.width / 2.0,
                cy: b.y + b.height / 2.0,
                radius: b.width / 2.0,
                fill,
            }
        } else {
            Primitive::Rect {
                x: b.x,
                y: b.y,
                width: b.width,
                height: b.height,
                corner_radius: b.corner_radius,
                fill,
            }
        }
    }
}

/// Complete draw list for one container's children, ready to be consumed by
/// a painting frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderFrame {
    pub container: NodeId,
    pub primitives: Vec<Primitive>,
}

impl RenderFrame {
    /// Lay out the container's children and resolve each box into a
    /// primitive.
    pub fn build(doc: &Document, container: NodeId) -> Self {
        let primitives: Vec<Primitive> = layout_children(doc, container)
            .iter()
            .map(|b| Primitive::from_box(doc, b))
            .collect();
        log::debug!(
            "built frame with {} primitives for {}",
            primitives.len(),
            container
        );
        Self {
            container,
            primitives,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rondel_dom::{Display, Element, Length, Style};

    fn circle_element(size: f64, color: Color) -> Element {
        Element::new("span").with_style(
            Style::new()
                .with_width(Length::Px(size))
                .with_height(Length::Px(size))
                .with_border_radius(Length::Percent(50.0))
                .with_display(Display::InlineBlock)
                .with_background(color),
        )
    }

    #[test]
    fn test_default_row_resolves_to_three_circles() {
        let mut doc = Document::new();
        let root = doc.insert(Element::new("div"));
        for color in [Color::red(), Color::green(), Color::blue()] {
            doc.append(root, circle_element(50.0, color)).unwrap();
        }

        let frame = RenderFrame::build(&doc, root);
        assert_eq!(frame.primitives.len(), 3);

        let expected_cx = [25.0, 75.0, 125.0];
        let expected_fill = [Color::red(), Color::green(), Color::blue()];
        for (i, primitive) in frame.primitives.iter().enumerate() {
            match primitive {
                Primitive::Circle {
                    cx,
                    cy,
                    radius,
                    fill,
                } => {
                    assert_eq!(*cx, expected_cx[i]);
                    assert_eq!(*cy, 25.0);
                    assert_eq!(*radius, 25.0);
                    assert_eq!(fill.as_ref(), Some(&expected_fill[i]));
                }
                other => panic!("expected a circle, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_unrounded_element_resolves_to_rect() {
        let mut doc = Document::new();
        let root = doc.insert(Element::new("div"));
        doc.append(
            root,
            Element::new("span").with_style(
                Style::new()
                    .with_width(Length::Px(30.0))
                    .with_height(Length::Px(20.0))
                    .with_display(Display::InlineBlock),
            ),
        )
        .unwrap();

        let frame = RenderFrame::build(&doc, root);
        assert!(matches!(frame.primitives[0], Primitive::Rect { .. }));
    }

    #[test]
    fn test_frame_serializes_to_json() {
        let mut doc = Document::new();
        let root = doc.insert(Element::new("div"));
        doc.append(root, circle_element(50.0, Color::green()))
            .unwrap();

        let frame = RenderFrame::build(&doc, root);
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains("\"Circle\""));
        assert!(json.contains("green"));

        let restored: RenderFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.primitives.len(), 1);
    }
}
