mod colour;
pub use colour::*;

mod error;
pub use error::*;

mod export;
pub use export::*;

mod font;
pub use font::*;

/// Utility functions and structures to lay out records as drawing primitives
pub mod layout;

mod measure;
pub use measure::*;

mod record;
pub use record::*;

mod redact;
pub use redact::*;

mod session;
pub use session::*;

mod svg;
pub use svg::*;

mod units;
pub use units::*;

mod wrap;
pub use wrap::*;
