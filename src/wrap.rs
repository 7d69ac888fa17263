use crate::{split_pieces, tokenize, FontWeight, Measure, Px, Segment};

/// A measured piece placed on a line: a whitespace-atomic chunk of a
/// [Segment], annotated with its effective width (padding included for
/// redacted pieces) and the raw measured advance width.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub text: String,
    pub redacted: bool,
    /// The width the piece occupies on the line; for redacted pieces this
    /// includes the horizontal redaction padding on both sides
    pub width: Px,
    /// The measured advance width of the text alone
    pub base_width: Px,
}

/// One laid-out line of pieces. An empty line represents an explicit blank
/// paragraph and still occupies a full line height.
pub type Line = Vec<Piece>;

/// Greedily pack measured pieces into lines no wider than `max_width`.
///
/// Single pass, no backtracking or hyphenation:
/// - a whitespace piece at the start of a line is dropped entirely;
/// - a non-whitespace piece that would overflow a started line flushes the
///   line first; whitespace pieces never force a break, they ride along;
/// - a single piece wider than `max_width` is still placed, alone,
///   producing an intentionally overflowing line rather than splitting
///   inside a word;
/// - redacted pieces are padded by `size × redact_pad_em` on each side.
pub fn wrap_pieces(
    pieces: Vec<Segment>,
    max_width: Px,
    size: Px,
    weight: FontWeight,
    redact_pad_em: f32,
    measure: &dyn Measure,
) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    let mut line: Line = Vec::new();
    let mut line_width = Px(0.0);

    for piece in pieces {
        let is_whitespace = piece.is_whitespace();
        if is_whitespace && line_width == Px(0.0) {
            continue;
        }
        let base_width = measure.width(&piece.text, size, weight);
        let pad = if piece.redacted {
            size * (redact_pad_em * 2.0)
        } else {
            Px(0.0)
        };
        let width = base_width + pad;
        if line_width + width > max_width && line_width > Px(0.0) && !is_whitespace {
            lines.push(std::mem::take(&mut line));
            line_width = Px(0.0);
        }
        line.push(Piece {
            text: piece.text,
            redacted: piece.redacted,
            width,
            base_width,
        });
        line_width += width;
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Tokenize, split, measure, and wrap a single paragraph of text.
pub fn wrap_text(
    text: &str,
    max_width: Px,
    size: Px,
    weight: FontWeight,
    redact_pad_em: f32,
    measure: &dyn Measure,
) -> Vec<Line> {
    let pieces = split_pieces(&tokenize(text));
    wrap_pieces(pieces, max_width, size, weight, redact_pad_em, measure)
}

/// Wrap multi-paragraph text: each literal-newline-separated paragraph wraps
/// independently, and an empty (or all-whitespace) paragraph contributes one
/// explicit empty [Line] so blank lines survive into the output.
pub fn wrap_multiline(
    text: &str,
    max_width: Px,
    size: Px,
    redact_pad_em: f32,
    measure: &dyn Measure,
) -> Vec<Line> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(Line::new());
            continue;
        }
        let wrapped = wrap_text(
            paragraph,
            max_width,
            size,
            FontWeight::Regular,
            redact_pad_em,
            measure,
        );
        if wrapped.is_empty() {
            lines.push(Line::new());
            continue;
        }
        lines.extend(wrapped);
    }
    lines
}
