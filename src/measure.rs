use crate::{Font, Px};

/// CSS-style font weight, restricted to the two weights the page layout
/// actually draws: regular body/value text and bold header labels.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    /// The numeric CSS weight (400 or 700), as written to the SVG
    /// `font-weight` attribute
    pub fn to_number(self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Bold => 700,
        }
    }

    /// Classify a numeric CSS weight; 600 and above is considered bold
    pub fn from_number(weight: u16) -> FontWeight {
        if weight >= 600 {
            FontWeight::Bold
        } else {
            FontWeight::Regular
        }
    }
}

/// The text-measurement seam between the wrapping/layout code and whatever
/// font-metrics source backs it.
///
/// Implementations must be pure: the same `(text, size, weight)` always
/// yields the same width, widths are non-negative, and widths are monotonic
/// in `size`. The layout engine calls this once per piece per pass; callers
/// are free to memoize on top if they re-lay-out frequently.
pub trait Measure {
    /// The rendered advance width of `text` at the given size and weight
    fn width(&self, text: &str, size: Px, weight: FontWeight) -> Px;
}

/// A [Measure] backed by real glyph advances from parsed font faces.
///
/// Bold measurement uses the bold face when one was loaded, and falls back to
/// the regular face otherwise (a slight under-measurement for most families,
/// matching what a renderer does when synthesizing bold).
pub struct FaceMetrics {
    regular: Font,
    bold: Option<Font>,
}

impl FaceMetrics {
    pub fn new(regular: Font) -> FaceMetrics {
        FaceMetrics {
            regular,
            bold: None,
        }
    }

    pub fn with_bold(regular: Font, bold: Font) -> FaceMetrics {
        FaceMetrics {
            regular,
            bold: Some(bold),
        }
    }

    pub fn face_for(&self, weight: FontWeight) -> &Font {
        match weight {
            FontWeight::Bold => self.bold.as_ref().unwrap_or(&self.regular),
            FontWeight::Regular => &self.regular,
        }
    }
}

impl Measure for FaceMetrics {
    fn width(&self, text: &str, size: Px, weight: FontWeight) -> Px {
        self.face_for(weight).width_of_text(text, size)
    }
}

/// A deterministic table-free [Measure]: every character advances
/// `advance_em × size`, regardless of weight.
///
/// Useful as a bundled-metrics fallback when no font file is available, and
/// as the measurement stub in tests where exact glyph widths don't matter.
#[derive(Debug, Copy, Clone)]
pub struct FixedMetrics {
    pub advance_em: f32,
}

impl FixedMetrics {
    pub fn new(advance_em: f32) -> FixedMetrics {
        FixedMetrics { advance_em }
    }
}

impl Default for FixedMetrics {
    fn default() -> FixedMetrics {
        // roughly the average advance of a serif text face
        FixedMetrics { advance_em: 0.5 }
    }
}

impl Measure for FixedMetrics {
    fn width(&self, text: &str, size: Px, _weight: FontWeight) -> Px {
        size * (text.chars().count() as f32 * self.advance_em)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_numbers() {
        assert_eq!(FontWeight::Regular.to_number(), 400);
        assert_eq!(FontWeight::Bold.to_number(), 700);
        assert_eq!(FontWeight::from_number(400), FontWeight::Regular);
        assert_eq!(FontWeight::from_number(700), FontWeight::Bold);
        assert_eq!(FontWeight::from_number(600), FontWeight::Bold);
        assert_eq!(FontWeight::from_number(599), FontWeight::Regular);
    }

    #[test]
    fn fixed_metrics_scales_with_size_and_length() {
        let metrics = FixedMetrics::new(0.5);
        assert_eq!(
            metrics.width("abcd", Px(10.0), FontWeight::Regular),
            Px(20.0)
        );
        // monotonic in size
        let narrow = metrics.width("hello", Px(10.0), FontWeight::Regular);
        let wide = metrics.width("hello", Px(20.0), FontWeight::Regular);
        assert!(wide > narrow);
    }

    #[test]
    fn fixed_metrics_counts_chars_not_bytes() {
        let metrics = FixedMetrics::new(1.0);
        assert_eq!(
            metrics.width("é", Px(10.0), FontWeight::Regular),
            metrics.width("e", Px(10.0), FontWeight::Regular)
        );
    }
}
