use derive_more::{Add, AddAssign, Display, From, Into, Sub, Sum};
use std::ops::{Div, Mul};

/// A length in CSS pixel units. All layout coordinates, widths, and heights
/// are expressed in `Px`; the SVG serializer writes the bare numbers out,
/// which SVG interprets as user units (pixels).
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, AddAssign, Sum, Display, From,
    Into,
)]
pub struct Px(pub f32);

impl Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}
