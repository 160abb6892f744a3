use rondel_dom::{Color, Display, Element, Length, Style};

/// Build one swatch circle: an unattached `span` styled as a fixed-size,
/// fully rounded, filled inline block.
///
/// Inputs are passed through unvalidated. A non-positive or non-finite
/// `size` produces a degenerate (invisible) element, and an unknown color
/// identifier is left for the output medium to resolve; neither is an
/// error.
pub fn circle(size: f64, color: Color) -> Element {
    let style = Style::new()
        .with_width(Length::Px(size))
        .with_height(Length::Px(size))
        .with_border_radius(Length::Percent(50.0))
        .with_display(Display::InlineBlock)
        .with_background(color);
    Element::new("span").with_style(style)
}
