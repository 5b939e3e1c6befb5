//! Shared test utilities for mediadeck integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. All helpers are deterministic: timestamps are anchored
//! to [`fixed_now`] rather than the wall clock.

pub mod assertions;
pub mod builders;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
