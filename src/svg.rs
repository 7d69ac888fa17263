use crate::layout::{Element, LayoutResult};

/// Escape the five reserved markup characters for use in element content or
/// attribute values
pub fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Serialize a layout pass into a self-contained SVG document: a white
/// background rectangle covering the canvas, then one drawing element per
/// primitive in original order. No reordering, no z-index; paint order is
/// document order, so later primitives draw on top at overlapping
/// coordinates.
pub fn render_svg(layout: &LayoutResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = layout.width,
        h = layout.height,
    ));
    out.push_str(r##"<rect width="100%" height="100%" fill="#fff" />"##);

    for element in &layout.elements {
        match element {
            Element::Text {
                x,
                y,
                text,
                font_size,
                font_family,
                font_weight,
                fill,
            } => {
                out.push_str(&format!(
                    r#"<text x="{x}" y="{y}" fill="{fill}" font-family="{family}" font-size="{font_size}" font-weight="{weight}">{text}</text>"#,
                    family = escape_xml(font_family),
                    weight = font_weight.to_number(),
                    text = escape_xml(text),
                ));
            }
            Element::Rect {
                x,
                y,
                width,
                height,
                fill,
            } => {
                out.push_str(&format!(
                    r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{fill}" />"#,
                ));
            }
            Element::Separator {
                x1,
                y1,
                x2,
                y2,
                stroke,
                stroke_width,
            } => {
                out.push_str(&format!(
                    r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{stroke}" stroke-width="{stroke_width}" />"#,
                ));
            }
        }
    }

    out.push_str("</svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::{FontWeight, Px};

    fn text_element(text: &str) -> Element {
        Element::Text {
            x: Px(10.0),
            y: Px(20.0),
            text: text.to_string(),
            font_size: Px(17.0),
            font_family: "Times New Roman, Times, serif".to_string(),
            font_weight: FontWeight::Regular,
            fill: colours::TEXT,
        }
    }

    #[test]
    fn escapes_all_five_reserved_characters() {
        assert_eq!(
            escape_xml(r#"a & b < c > d " e ' f"#),
            "a &amp; b &lt; c &gt; d &quot; e &#39; f"
        );
    }

    #[test]
    fn document_has_background_and_dimensions() {
        let layout = LayoutResult {
            width: Px(760.0),
            height: Px(120.0),
            elements: Vec::new(),
        };
        let svg = render_svg(&layout);
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="760" height="120" viewBox="0 0 760 120">"#
        ));
        assert!(svg.contains(r##"<rect width="100%" height="100%" fill="#fff" />"##));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn text_content_and_attributes_are_escaped() {
        let layout = LayoutResult {
            width: Px(100.0),
            height: Px(50.0),
            elements: vec![text_element(r#"<hello> & "world""#)],
        };
        let svg = render_svg(&layout);
        assert!(svg.contains("&lt;hello&gt; &amp; &quot;world&quot;"));
        assert!(!svg.contains("<hello>"));
    }

    #[test]
    fn elements_appear_in_primitive_order() {
        let layout = LayoutResult {
            width: Px(100.0),
            height: Px(50.0),
            elements: vec![
                text_element("first"),
                Element::Rect {
                    x: Px(0.0),
                    y: Px(0.0),
                    width: Px(10.0),
                    height: Px(10.0),
                    fill: colours::BLACK,
                },
                text_element("second"),
            ],
        };
        let svg = render_svg(&layout);
        let first = svg.find("first").unwrap();
        let rect = svg.find("<rect x=").unwrap();
        let second = svg.find("second").unwrap();
        assert!(first < rect && rect < second);
    }

    #[test]
    fn separator_serializes_stroke_attributes() {
        let layout = LayoutResult {
            width: Px(100.0),
            height: Px(50.0),
            elements: vec![Element::Separator {
                x1: Px(0.0),
                y1: Px(42.0),
                x2: Px(100.0),
                y2: Px(42.0),
                stroke: colours::SEPARATOR,
                stroke_width: Px(2.0),
            }],
        };
        let svg = render_svg(&layout);
        assert!(svg.contains(
            r##"<line x1="0" y1="42" x2="100" y2="42" stroke="#d7d7d7" stroke-width="2" />"##
        ));
    }
}
