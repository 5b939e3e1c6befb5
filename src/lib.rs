//! mediadeck: terminal content deck with a development diagnostics overlay.
//!
//! This crate re-exports the workspace layers so integration tests and
//! benches can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! feed JSON ──► normalizer ──► preview / card ──► TUI deck
//!                                                   │
//!      request log + feed state ──► diagnostics ──► overlay
//! ```
//!
//! The core is synchronous. The only asynchronous edge is media probing,
//! which reports back to the render loop over a `tokio` channel.

pub use mediadeck_core::{
    card, config, diagnostics, error, feed, normalizer, preview, types, CanonicalContent,
    DiagnosticSession, MediaType, NetworkRequest,
};
pub use mediadeck_tui as tui;
