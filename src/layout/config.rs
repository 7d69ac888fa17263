use crate::colour::{colours, Colour};
use crate::units::Px;

/// Every knob of the page layout. The defaults reproduce the printable page
/// the editor exports: a 760px-wide sheet set in a serif stack at 17px with
/// a 1.38 line-height ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Overall page width
    pub width: Px,
    /// Left and right page padding
    pub padding_x: Px,
    /// Vertical padding above each record
    pub padding_top: Px,
    /// Vertical padding below each record
    pub padding_bottom: Px,
    /// Width of the header label column (From:, To:, ...)
    pub header_label_width: Px,
    /// Gap between the header label column and the value column
    pub header_gap_x: Px,
    /// Extra gap between consecutive header rows
    pub header_row_gap: Px,
    /// Margin between the last header row and the body
    pub body_top_margin: Px,
    /// Margin between the body and the footer
    pub footer_top_margin: Px,
    /// The CSS font stack written to text elements
    pub font_family: String,
    pub font_size: Px,
    /// Baseline-to-baseline distance; defaults to `font_size × 1.38`
    pub line_height: Px,
    pub text_colour: Colour,
    /// Colour of the separator rule drawn between records
    pub separator_colour: Colour,
    pub separator_width: Px,
    /// Horizontal padding added to each side of a redaction block, in em
    /// units of the font size
    pub redact_pad_em: f32,
}

impl Default for LayoutConfig {
    fn default() -> LayoutConfig {
        LayoutConfig {
            width: Px(760.0),
            padding_x: Px(28.0),
            padding_top: Px(20.0),
            padding_bottom: Px(22.0),
            header_label_width: Px(90.0),
            header_gap_x: Px(10.0),
            header_row_gap: Px(2.0),
            body_top_margin: Px(14.0),
            footer_top_margin: Px(14.0),
            font_family: "Times New Roman, Times, serif".to_string(),
            font_size: Px(17.0),
            line_height: Px(17.0 * 1.38),
            text_colour: colours::TEXT,
            separator_colour: colours::SEPARATOR,
            separator_width: Px(2.0),
            redact_pad_em: 0.14,
        }
    }
}

impl LayoutConfig {
    /// The width available to body and footer text
    pub fn body_width(&self) -> Px {
        self.width - self.padding_x * 2.0
    }

    /// The width available to header values, right of the label column
    pub fn header_value_width(&self) -> Px {
        self.body_width() - self.header_label_width - self.header_gap_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_derived_widths() {
        let config = LayoutConfig::default();
        assert_eq!(config.body_width(), Px(760.0 - 56.0));
        assert_eq!(config.header_value_width(), Px(704.0 - 90.0 - 10.0));
        assert_eq!(config.line_height, Px(17.0 * 1.38));
        assert!((config.line_height.0 - 23.46).abs() < 1e-4);
    }
}
