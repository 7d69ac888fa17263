//! Page layout: turning an ordered list of records into absolutely
//! positioned drawing primitives.
//!
//! The engine walks the record list top to bottom with a running vertical
//! cursor, emitting [`Element`]s for header labels and values, wrapped body
//! and footer lines, redaction rectangles, and the separator rules between
//! records. The result is a flat, paint-ordered primitive list plus the
//! overall canvas size, ready for [`render_svg`](crate::render_svg).
//!
//! # Example
//!
//! ```
//! use redact_gen::layout::{layout_records, LayoutConfig};
//! use redact_gen::{render_svg, EmailRecord, FixedMetrics};
//!
//! let record = EmailRecord {
//!     from: "someone@example.com".into(),
//!     body: "hello <redact>secret</redact> world".into(),
//!     ..EmailRecord::default()
//! };
//!
//! let metrics = FixedMetrics::default();
//! let result = layout_records(&[record], &LayoutConfig::default(), &metrics);
//! let svg = render_svg(&result);
//! assert!(svg.starts_with("<svg"));
//! assert!(!svg.contains("secret"));
//! ```

mod config;
mod element;
mod engine;

pub use config::*;
pub use element::*;
pub use engine::*;
