// vietqr-rs/vietqr/src/dispatch/mod.rs

//! Hand-off of an encoded deeplink to the platform.
//!
//! Opening a custom URL scheme gives no reliable success signal and the
//! target app may not be installed, so dispatch is fire-and-forget.

/// Recording opener for tests
pub mod mock;
/// Opener trait and dispatch helper
pub mod traits;

pub use mock::RecordingOpener;
pub use traits::{LinkOpener, dispatch};
