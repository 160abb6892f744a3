use serde::{Deserialize, Serialize};

use rondel_dom::{Display, Document, Length, NodeId, Style};

/// The resolved box of one laid-out element, in container coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LayoutBox {
    pub node: NodeId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Corner rounding as a fraction of the half-extent; 1.0 is fully round.
    pub corner_radius: f64,
}

impl LayoutBox {
    /// Point containment, honoring full corner rounding: a fully rounded
    /// square box only contains points inside its inscribed circle.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        let inside = px >= self.x
            && px <= self.x + self.width
            && py >= self.y
            && py <= self.y + self.height;
        if !inside {
            return false;
        }
        if self.corner_radius >= 1.0 && (self.width - self.height).abs() < f64::EPSILON {
            let r = self.width / 2.0;
            let cx = self.x + r;
            let cy = self.y + r;
            (px - cx).powi(2) + (py - cy).powi(2) <= r * r
        } else {
            true
        }
    }
}

/// Flow the container's children into boxes.
///
/// `inline` and `inline-block` children run left to right in child order;
/// any other display claims a full line of its own. This is the flow the
/// original markup got implicitly from its `display` declarations. Lines
/// never wrap (the container is treated as unbounded), and degenerate sizes
/// produce zero-area boxes rather than errors.
pub fn layout_children(doc: &Document, container: NodeId) -> Vec<LayoutBox> {
    let base = doc
        .get(container)
        .map(|el| resolve(el.style.width, 0.0))
        .unwrap_or(0.0);

    let mut boxes = Vec::new();
    let mut x = 0.0f64;
    let mut y = 0.0f64;
    let mut line_height = 0.0f64;

    for &child in doc.children(container) {
        let el = match doc.get(child) {
            Some(el) => el,
            None => continue,
        };
        let width = resolve(el.style.width, base);
        let height = resolve(el.style.height, base);
        let corner_radius = radius_fraction(&el.style, width, height);

        match el.style.display {
            Some(Display::Inline) | Some(Display::InlineBlock) => {
                boxes.push(LayoutBox {
                    node: child,
                    x,
                    y,
                    width,
                    height,
                    corner_radius,
                });
                x += width;
                line_height = line_height.max(height);
            }
            // Block and unstyled children each break the current line.
            _ => {
                if x > 0.0 {
                    y += line_height;
                    x = 0.0;
                    line_height = 0.0;
                }
                boxes.push(LayoutBox {
                    node: child,
                    x: 0.0,
                    y,
                    width,
                    height,
                    corner_radius,
                });
                y += height;
            }
        }
    }

    log::debug!("laid out {} children of {}", boxes.len(), container);
    boxes
}

fn resolve(length: Option<Length>, base: f64) -> f64 {
    match length {
        Some(Length::Px(v)) => v,
        Some(Length::Percent(p)) => base * p / 100.0,
        None => 0.0,
    }
}

/// Normalize `border-radius` to a fraction of the half-extent. `50%` and
/// anything beyond maps to 1.0 (fully round).
fn radius_fraction(style: &Style, width: f64, height: f64) -> f64 {
    match style.border_radius {
        Some(Length::Percent(p)) => (p / 50.0).clamp(0.0, 1.0),
        Some(Length::Px(r)) => {
            let half = width.min(height) / 2.0;
            if half > 0.0 {
                (r / half).clamp(0.0, 1.0)
            } else {
                0.0
            }
        }
        None => 0.0,
    }
}
