use rstar::{PointDistance, RTree, RTreeObject, AABB};

use rondel_dom::NodeId;

use crate::layout::LayoutBox;

/// An entry in the R-tree, wrapping one laid-out box.
#[derive(Debug, Clone)]
pub struct HitEntry {
    pub node: NodeId,
    pub layout: LayoutBox,
}

impl RTreeObject for HitEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.layout.x, self.layout.y],
            [
                self.layout.x + self.layout.width,
                self.layout.y + self.layout.height,
            ],
        )
    }
}

impl PointDistance for HitEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        self.envelope().distance_2(point)
    }
}

/// Point-query index over laid-out elements.
///
/// The envelope query works on bounding boxes; fully rounded boxes are
/// refined by true circle containment, so the corner of a swatch's box does
/// not count as a hit.
pub struct HitIndex {
    tree: RTree<HitEntry>,
}

impl HitIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Build the index from a layout pass.
    pub fn build(boxes: &[LayoutBox]) -> Self {
        let entries = boxes
            .iter()
            .map(|b| HitEntry {
                node: b.node,
                layout: *b,
            })
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// All elements under the given point.
    pub fn query_point(&self, x: f64, y: f64) -> Vec<NodeId> {
        self.tree
            .locate_all_at_point(&[x, y])
            .filter(|entry| entry.layout.contains(x, y))
            .map(|entry| entry.node)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for HitIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout_children;
    use rondel_dom::{Color, Display, Document, Element, Length, Style};

    fn swatch_row_doc() -> (Document, Vec<LayoutBox>) {
        let mut doc = Document::new();
        let root = doc.insert(Element::new("div"));
        for color in [Color::red(), Color::green(), Color::blue()] {
            let style = Style::new()
                .with_width(Length::Px(50.0))
                .with_height(Length::Px(50.0))
                .with_border_radius(Length::Percent(50.0))
                .with_display(Display::InlineBlock)
                .with_background(color);
            doc.append(root, Element::new("span").with_style(style))
                .unwrap();
        }
        let boxes = layout_children(&doc, root);
        (doc, boxes)
    }

    #[test]
    fn test_query_point_finds_the_swatch_under_it() {
        let (doc, boxes) = swatch_row_doc();
        let index = HitIndex::build(&boxes);
        assert_eq!(index.len(), 3);

        // Center of the second circle.
        let hits = index.query_point(75.0, 25.0);
        assert_eq!(hits.len(), 1);
        let el = doc.get(hits[0]).unwrap();
        assert_eq!(
            el.style.background.as_ref().map(|c| c.as_str()),
            Some("green")
        );
    }

    #[test]
    fn test_box_corner_misses_the_circle() {
        let (_doc, boxes) = swatch_row_doc();
        let index = HitIndex::build(&boxes);
        // Inside the first box's corner, outside its inscribed circle.
        assert!(index.query_point(1.0, 1.0).is_empty());
    }

    #[test]
    fn test_point_outside_everything() {
        let (_doc, boxes) = swatch_row_doc();
        let index = HitIndex::build(&boxes);
        assert!(index.query_point(500.0, 500.0).is_empty());
    }

    #[test]
    fn test_empty_index() {
        let index = HitIndex::new();
        assert!(index.is_empty());
        assert!(index.query_point(0.0, 0.0).is_empty());
    }
}
