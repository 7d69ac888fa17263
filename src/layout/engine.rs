use crate::colour::colours;
use crate::layout::{Element, LayoutConfig, LayoutResult};
use crate::measure::{FontWeight, Measure};
use crate::record::EmailRecord;
use crate::units::Px;
use crate::wrap::{wrap_multiline, wrap_text, Line};

/// Ratio of the redaction rectangle height to the line height; the block
/// covers the glyph zone without filling the full leading
const REDACT_RECT_HEIGHT: f32 = 0.78;
/// Downward shift of the redaction rectangle so it sits on the baseline
const REDACT_RECT_SHIFT: f32 = 0.08;

/// Walk an ordered list of records, emitting absolutely positioned drawing
/// primitives for headers, body, and footer while tracking a running
/// vertical cursor. Records are read, never mutated; the pass is synchronous
/// and infallible (all inputs are already plain strings).
///
/// The returned height is the cursor position after the last record's bottom
/// padding; the width is the configured page width.
pub fn layout_records(
    records: &[EmailRecord],
    config: &LayoutConfig,
    measure: &dyn Measure,
) -> LayoutResult {
    let mut elements: Vec<Element> = Vec::new();
    let mut cursor_y = Px(0.0);
    let body_width = config.body_width();
    let header_value_width = config.header_value_width();

    for (index, record) in records.iter().enumerate() {
        cursor_y += config.padding_top;

        let header_rows = [
            ("From:".to_string(), record.from.as_str()),
            (format!("{}:", record.sent_label_or_default()), record.sent.as_str()),
            ("To:".to_string(), record.to.as_str()),
            ("Subject:".to_string(), record.subject.as_str()),
        ];
        let row_count = header_rows.len();

        for (row_index, (label, value)) in header_rows.into_iter().enumerate() {
            let lines = wrap_text(
                value,
                header_value_width,
                config.font_size,
                FontWeight::Regular,
                config.redact_pad_em,
                measure,
            );
            // an empty value still occupies one line so the label has a row
            let lines = if lines.is_empty() {
                vec![Line::new()]
            } else {
                lines
            };
            let row_height = config.line_height * lines.len() as f32;
            let baseline = cursor_y + config.line_height;

            elements.push(Element::Text {
                x: config.padding_x,
                y: baseline,
                text: label,
                font_size: config.font_size,
                font_family: config.font_family.clone(),
                font_weight: FontWeight::Bold,
                fill: config.text_colour,
            });

            let value_x = config.padding_x + config.header_label_width + config.header_gap_x;
            for (line_index, line) in lines.iter().enumerate() {
                let line_y = cursor_y + config.line_height * (line_index as f32 + 1.0);
                draw_line_pieces(&mut elements, value_x, line_y, line, config);
            }

            cursor_y += row_height;
            if row_index < row_count - 1 {
                cursor_y += config.header_row_gap;
            }
        }

        cursor_y += config.body_top_margin;
        let body_lines = wrap_multiline(
            &record.body,
            body_width,
            config.font_size,
            config.redact_pad_em,
            measure,
        );
        for (line_index, line) in body_lines.iter().enumerate() {
            let line_y = cursor_y + config.line_height * (line_index as f32 + 1.0);
            draw_line_pieces(&mut elements, config.padding_x, line_y, line, config);
        }
        cursor_y += config.line_height * body_lines.len() as f32;

        if !record.footer.is_empty() {
            cursor_y += config.footer_top_margin;
            let footer_lines = wrap_multiline(
                &record.footer,
                body_width,
                config.font_size,
                config.redact_pad_em,
                measure,
            );
            for (line_index, line) in footer_lines.iter().enumerate() {
                let line_y = cursor_y + config.line_height * (line_index as f32 + 1.0);
                draw_line_pieces(&mut elements, config.padding_x, line_y, line, config);
            }
            cursor_y += config.line_height * footer_lines.len() as f32;
        }

        cursor_y += config.padding_bottom;
        if index < records.len() - 1 {
            elements.push(Element::Separator {
                x1: Px(0.0),
                y1: cursor_y,
                x2: config.width,
                y2: cursor_y,
                stroke: config.separator_colour,
                stroke_width: config.separator_width,
            });
        }
    }

    LayoutResult {
        width: config.width,
        height: cursor_y,
        elements,
    }
}

/// Emit the primitives for one line of pieces, walking left to right from
/// `start_x` with the baseline at `baseline_y`. A redacted piece becomes a
/// filled rectangle sized to its padded width; the concealed text itself is
/// never emitted. A non-empty plain piece becomes a text run. The x cursor
/// advances by the piece's full width either way, so redacted and plain runs
/// stay aligned.
fn draw_line_pieces(
    elements: &mut Vec<Element>,
    start_x: Px,
    baseline_y: Px,
    line: &Line,
    config: &LayoutConfig,
) {
    if line.is_empty() {
        return;
    }
    let rect_height = config.line_height * REDACT_RECT_HEIGHT;
    let rect_y = baseline_y - rect_height + config.line_height * REDACT_RECT_SHIFT;

    let mut cursor_x = start_x;
    for piece in line {
        if piece.redacted {
            elements.push(Element::Rect {
                x: cursor_x,
                y: rect_y,
                width: piece.width,
                height: rect_height,
                fill: colours::BLACK,
            });
        } else if !piece.text.is_empty() {
            elements.push(Element::Text {
                x: cursor_x,
                y: baseline_y,
                text: piece.text.clone(),
                font_size: config.font_size,
                font_family: config.font_family.clone(),
                font_weight: FontWeight::Regular,
                fill: config.text_colour,
            });
        }
        cursor_x += piece.width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedMetrics;

    fn metrics() -> FixedMetrics {
        FixedMetrics::new(0.5)
    }

    fn record(body: &str) -> EmailRecord {
        EmailRecord {
            from: "a@example.com".to_string(),
            to: "b@example.com".to_string(),
            subject: "hi".to_string(),
            body: body.to_string(),
            ..EmailRecord::default()
        }
    }

    fn texts(result: &LayoutResult) -> Vec<&str> {
        result
            .elements
            .iter()
            .filter_map(|el| match el {
                Element::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn height_is_positive_and_grows_with_records() {
        let config = LayoutConfig::default();
        let one = layout_records(&[record("hello")], &config, &metrics());
        assert!(one.height > Px(0.0));

        let two = layout_records(&[record("hello"), record("hello")], &config, &metrics());
        assert!(two.height > one.height);
        assert_eq!(one.width, config.width);
    }

    #[test]
    fn redacted_text_is_concealed() {
        let config = LayoutConfig::default();
        let result = layout_records(
            &[record("before <redact>SECRET</redact> after")],
            &config,
            &metrics(),
        );
        assert!(texts(&result).iter().all(|t| !t.contains("SECRET")));
        let rects: Vec<&Element> = result
            .elements
            .iter()
            .filter(|el| matches!(el, Element::Rect { .. }))
            .collect();
        assert_eq!(rects.len(), 1);
    }

    #[test]
    fn redaction_rect_spans_the_padded_width() {
        let config = LayoutConfig {
            redact_pad_em: 0.14,
            ..LayoutConfig::default()
        };
        let result = layout_records(&[record("<redact>SECRET</redact>")], &config, &metrics());
        let Some(Element::Rect { width, height, .. }) = result
            .elements
            .iter()
            .find(|el| matches!(el, Element::Rect { .. }))
        else {
            panic!("expected a redaction rect");
        };
        // 6 chars at half the font size, plus pad_em on each side
        let expected = config.font_size * 3.0 + config.font_size * (0.14 * 2.0);
        assert_eq!(*width, expected);
        assert_eq!(*height, config.line_height * 0.78);
    }

    #[test]
    fn plain_and_redacted_runs_stay_aligned() {
        let config = LayoutConfig::default();
        let result = layout_records(&[record("a <redact>b</redact> c")], &config, &metrics());
        // the body line: text "a", space, rect, space, text "c"; the final
        // text must start exactly at the sum of all prior piece widths
        let body_elements: Vec<&Element> = result
            .elements
            .iter()
            .filter(|el| match el {
                Element::Text { text, .. } => text == "a" || text == "c",
                Element::Rect { .. } => true,
                _ => false,
            })
            .collect();
        let [Element::Text { x: ax, .. }, Element::Rect { x: rx, width: rw, .. }, Element::Text { x: cx, .. }] =
            body_elements.as_slice()
        else {
            panic!("unexpected element shape: {body_elements:?}");
        };
        let space = config.font_size * 0.5;
        assert!(*rx > *ax);
        assert_eq!(*cx, *rx + *rw + space);
    }

    #[test]
    fn four_header_labels_per_record() {
        let config = LayoutConfig::default();
        let result = layout_records(&[record("")], &config, &metrics());
        let labels: Vec<&str> = texts(&result)
            .into_iter()
            .filter(|t| t.ends_with(':'))
            .collect();
        assert_eq!(labels, vec!["From:", "Date:", "To:", "Subject:"]);
    }

    #[test]
    fn sent_label_is_dynamic_with_date_fallback() {
        let config = LayoutConfig::default();
        let mut sent = record("");
        sent.sent_label = "Sent".to_string();
        let mut blank = record("");
        blank.sent_label = String::new();
        let result = layout_records(&[sent, blank], &config, &metrics());
        let labels = texts(&result);
        assert!(labels.contains(&"Sent:"));
        assert!(labels.contains(&"Date:"));
    }

    #[test]
    fn separator_between_records_but_not_after_last() {
        let config = LayoutConfig::default();
        let result = layout_records(
            &[record("a"), record("b"), record("c")],
            &config,
            &metrics(),
        );
        let separators = result
            .elements
            .iter()
            .filter(|el| matches!(el, Element::Separator { .. }))
            .count();
        assert_eq!(separators, 2);
        if let Some(Element::Separator { x1, x2, .. }) = result
            .elements
            .iter()
            .find(|el| matches!(el, Element::Separator { .. }))
        {
            assert_eq!(*x1, Px(0.0));
            assert_eq!(*x2, config.width);
        }
    }

    #[test]
    fn empty_body_still_occupies_one_line() {
        let config = LayoutConfig::default();
        let empty = layout_records(&[record("")], &config, &metrics());
        let filled = layout_records(&[record("x")], &config, &metrics());
        assert_eq!(empty.height, filled.height);
    }

    #[test]
    fn footer_adds_height_only_when_present() {
        let config = LayoutConfig::default();
        let without = layout_records(&[record("x")], &config, &metrics());

        let mut with_footer = record("x");
        with_footer.footer = "sent from somewhere".to_string();
        let with = layout_records(&[with_footer], &config, &metrics());
        assert!(with.height > without.height);
    }

    #[test]
    fn multi_paragraph_body_grows_height_per_line() {
        let config = LayoutConfig::default();
        let one = layout_records(&[record("a")], &config, &metrics());
        let three = layout_records(&[record("a\n\nb")], &config, &metrics());
        let expected = one.height + config.line_height * 2.0;
        assert!((three.height.0 - expected.0).abs() < 1e-3);
    }
}
