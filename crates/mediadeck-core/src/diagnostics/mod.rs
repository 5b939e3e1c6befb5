//! Development diagnostics overlay engine.
//!
//! - [`gate`] decides whether the overlay renders at all and owns its
//!   show/expand toggles.
//! - [`format`] turns arbitrary values into display text.
//! - [`netlog`] exposes the trailing window of a request log.

pub mod format;
pub mod gate;
pub mod netlog;

pub use format::{format_optional, format_value, summarize_shape};
pub use gate::{BuildMode, OverlayState};
pub use netlog::{NetworkLogView, StatusClass};
