//! mediadeck-core: content card and diagnostics logic for mediadeck.
//!
//! This crate holds everything that carries behaviour rather than layout.
//! Renderers (the TUI crate) only draw the view-models produced here.
//!
//! # Architecture
//!
//! ```text
//! raw JSON ──► normalizer ──► CanonicalContent ──► preview ──► card ──► CardView
//!
//! DiagnosticSession ──► diagnostics::{gate, format, netlog} ──► overlay
//! ```
//!
//! Every function on the render path is total: missing or malformed input
//! degrades to a default instead of returning an error.

pub mod card;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod feed;
pub mod normalizer;
pub mod preview;
pub mod types;

pub use types::{CanonicalContent, DiagnosticSession, MediaType, NetworkRequest};
