//! Utilities for vietqr: small, reusable helpers used across the crate.
//!
//! EMVCo lengths count characters, not bytes, so the string helpers here are
//! all char-boundary aware.

pub mod text;

pub use text::*;
