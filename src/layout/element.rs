use crate::colour::Colour;
use crate::measure::FontWeight;
use crate::units::Px;

/// One atomic drawing instruction. Elements are immutable once created and
/// collected in paint order: later elements draw on top of earlier ones at
/// overlapping coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A text run with its baseline at `(x, y)`
    Text {
        x: Px,
        y: Px,
        text: String,
        font_size: Px,
        font_family: String,
        font_weight: FontWeight,
        fill: Colour,
    },
    /// A filled rectangle with its top-left corner at `(x, y)`
    Rect {
        x: Px,
        y: Px,
        width: Px,
        height: Px,
        fill: Colour,
    },
    /// A stroked line between two endpoints
    Separator {
        x1: Px,
        y1: Px,
        x2: Px,
        y2: Px,
        stroke: Colour,
        stroke_width: Px,
    },
}

/// The outcome of one layout pass: a flat ordered element list plus the
/// overall canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub width: Px,
    pub height: Px,
    pub elements: Vec<Element>,
}
