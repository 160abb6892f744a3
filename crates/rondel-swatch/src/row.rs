use serde::{Deserialize, Serialize};

use rondel_dom::{Color, Document, DomError, NodeId};

use crate::circle::circle;

/// Diameter used when no configuration overrides it.
pub const DEFAULT_SIZE: f64 = 50.0;

/// Container `id` attribute the lookup entry point resolves by default.
pub const DEFAULT_CONTAINER_ID: &str = "root";

/// Configuration for one swatch row.
///
/// `Default` is the classic row: three 50px circles colored red, green,
/// blue, mounted under `#root`. Color order is significant and is the
/// order circles are appended in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwatchRow {
    pub size: f64,
    pub colors: Vec<Color>,
    pub container_id: String,
}

impl Default for SwatchRow {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            colors: vec![Color::red(), Color::green(), Color::blue()],
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        }
    }
}

/// Append one circle per configured color to `container`, in color order.
///
/// Mounting is not idempotent: driving the same container twice doubles its
/// children. Returns the ids of the appended circles.
pub fn mount(
    doc: &mut Document,
    container: NodeId,
    row: &SwatchRow,
) -> Result<Vec<NodeId>, DomError> {
    if doc.get(container).is_none() {
        return Err(DomError::NodeMissing(container));
    }

    let mut mounted = Vec::with_capacity(row.colors.len());
    for color in &row.colors {
        let id = doc.append(container, circle(row.size, color.clone()))?;
        log::debug!("mounted {} swatch as {}", color, id);
        mounted.push(id);
    }
    log::info!("mounted {} swatches under {}", mounted.len(), container);
    Ok(mounted)
}

/// Resolve `row.container_id` in the document and mount the row there.
///
/// A missing container is a reported error, not a fault: the lookup happens
/// before any circle is built, so the document is left untouched.
pub fn mount_by_id(doc: &mut Document, row: &SwatchRow) -> Result<Vec<NodeId>, DomError> {
    let container = doc
        .element_by_id(&row.container_id)
        .ok_or_else(|| DomError::ContainerNotFound(row.container_id.clone()))?;
    mount(doc, container, row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rondel_dom::{Display, Element, Length};

    fn doc_with_root() -> (Document, NodeId) {
        let mut doc = Document::new();
        let root = doc.insert(Element::new("div").with_html_id(DEFAULT_CONTAINER_ID));
        (doc, root)
    }

    #[test]
    fn test_mount_appends_three_circles_in_color_order() {
        let (mut doc, root) = doc_with_root();
        let mounted = mount(&mut doc, root, &SwatchRow::default()).unwrap();

        assert_eq!(mounted.len(), 3);
        assert_eq!(doc.children(root), mounted.as_slice());

        let expected = [Color::red(), Color::green(), Color::blue()];
        for (id, color) in mounted.iter().zip(&expected) {
            let el = doc.get(*id).unwrap();
            assert_eq!(el.style.background.as_ref(), Some(color));
        }
    }

    #[test]
    fn test_mounted_circles_carry_the_five_declarations() {
        let (mut doc, root) = doc_with_root();
        let mounted = mount(&mut doc, root, &SwatchRow::default()).unwrap();

        for id in mounted {
            let style = &doc.get(id).unwrap().style;
            assert_eq!(style.width, Some(Length::Px(50.0)));
            assert_eq!(style.height, Some(Length::Px(50.0)));
            assert_eq!(style.border_radius, Some(Length::Percent(50.0)));
            assert_eq!(style.display, Some(Display::InlineBlock));
        }
    }

    #[test]
    fn test_mounting_twice_doubles_the_children() {
        let (mut doc, root) = doc_with_root();
        let row = SwatchRow::default();
        mount(&mut doc, root, &row).unwrap();
        mount(&mut doc, root, &row).unwrap();
        assert_eq!(doc.children(root).len(), 6);
    }

    #[test]
    fn test_mount_by_id_without_container_reports_and_leaves_doc_unchanged() {
        let mut doc = Document::new();
        doc.insert(Element::new("div").with_html_id("not-root"));

        let err = mount_by_id(&mut doc, &SwatchRow::default()).unwrap_err();
        assert!(matches!(err, DomError::ContainerNotFound(ref id) if id == "root"));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_mount_with_stale_handle() {
        let (mut doc, _root) = doc_with_root();
        let stale = NodeId::new_v4();
        let err = mount(&mut doc, stale, &SwatchRow::default()).unwrap_err();
        assert!(matches!(err, DomError::NodeMissing(id) if id == stale));
    }

    #[test]
    fn test_custom_row_configuration() {
        let (mut doc, root) = doc_with_root();
        let row = SwatchRow {
            size: 12.0,
            colors: vec![Color::named("hotpink")],
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        };
        let mounted = mount_by_id(&mut doc, &row).unwrap();
        assert_eq!(mounted.len(), 1);
        assert_eq!(doc.children(root).len(), 1);
        let style = &doc.get(mounted[0]).unwrap().style;
        assert_eq!(style.width, Some(Length::Px(12.0)));
        assert_eq!(
            style.background.as_ref().map(|c| c.as_str()),
            Some("hotpink")
        );
    }

    #[test]
    fn test_row_config_json_roundtrip() {
        let row = SwatchRow::default();
        let json = serde_json::to_string(&row).unwrap();
        let restored: SwatchRow = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.size, DEFAULT_SIZE);
        assert_eq!(restored.colors, row.colors);
        assert_eq!(restored.container_id, DEFAULT_CONTAINER_ID);
    }
}
