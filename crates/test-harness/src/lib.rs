//! Test harness for STL codec development.
//!
//! Provides hand-built STL inputs that do not go through the codec's own
//! writers, mesh math for checking what comes back, and verification
//! functions that report diagnostics instead of panicking.
//!
//! # Key Components
//!
//! - [`fixtures`] — reference cubes as meshes, ASCII text and binary bytes
//! - [`oracle`] — verification functions returning pass/fail verdicts
//! - [`helpers`] — error type and mesh math
//! - [`assertions`] — rich assertion helpers with diagnostics

pub mod assertions;
pub mod fixtures;
pub mod helpers;
pub mod oracle;

pub use helpers::HarnessError;
pub use oracle::OracleVerdict;
