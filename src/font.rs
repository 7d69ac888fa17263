use crate::{Px, RedactError};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};

/// A parsed font face. Fonts can be TTF or OTF fonts; the crate only reads
/// metric tables (glyph advances and the vertical metrics), it never
/// rasterizes or embeds glyph outlines.
///
/// The face is used purely as a measurement backend: the SVG output refers to
/// fonts by family name and leaves rendering to the viewer, so the face you
/// measure with should match the first family in the configured font stack if
/// you want the exported image to wrap the way it measures.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if
    /// the font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, RedactError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    fn scaling(&self, size: Px) -> Px {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Px) -> Px {
        self.scaling(size) * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Px) -> Px {
        self.scaling(size) * self.face.as_face_ref().descender() as f32
    }

    /// Calculate the leading (extra space between lines) for the given font size
    pub fn leading(&self, size: Px) -> Px {
        self.scaling(size) * self.face.as_face_ref().line_gap() as f32
    }

    /// Calculate the default line height of the font for the given size. The
    /// returned value is how much to vertically offset a second row of text
    /// below a first row of text. Note that the page layout uses a fixed
    /// multiple of the font size instead (see
    /// [`LayoutConfig`](crate::layout::LayoutConfig)); this is the font's own
    /// preference.
    pub fn line_height(&self, size: Px) -> Px {
        self.leading(size) + self.ascent(size) - self.descent(size)
    }

    /// Obtain the weight of the font. Numerical values generally map as follows:
    ///
    /// * 400: Normal
    /// * 700: Bold
    pub fn weight(&self) -> u16 {
        self.face.as_face_ref().weight().to_number()
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    /// The glyph for `ch`, falling back to the replacement character and then
    /// a question mark for glyphs the face doesn't cover. Returns [None] only
    /// when none of the three are present.
    fn glyph_or_replacement(&self, ch: char) -> Option<GlyphId> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
    }

    /// Calculate the advance width of a string of text at the given font size
    /// by summing glyph advances. Characters with no glyph (and no
    /// replacement glyph) contribute nothing.
    pub fn width_of_text(&self, text: &str, size: Px) -> Px {
        let scaling = self.scaling(size);
        text.chars()
            .filter_map(|ch| self.glyph_or_replacement(ch))
            .map(|gid| {
                scaling
                    * self
                        .face
                        .as_face_ref()
                        .glyph_hor_advance(gid)
                        .unwrap_or_default() as f32
            })
            .sum()
    }
}
