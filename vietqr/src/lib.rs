// vietqr-rs/vietqr/src/lib.rs

//! vietqr
//!
//! EMVCo/VietQR payload decoding and Vietnamese bank app deeplink encoding.
#![warn(missing_docs)]

/// Bank identifier and app scheme registry
pub mod bank;
/// Protocol constants
pub mod constants;
/// Transfer deeplink encoding
pub mod deeplink;
pub mod dispatch;
/// Error type and `Result` alias
pub mod error;
/// Payee extraction from scanned payloads
pub mod payee;
/// Common imports
pub mod prelude;
pub mod test_support;
/// EMVCo TLV decoding and encoding
pub mod tlv;
/// Tag newtype
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and `crate::Tag` are available for consumers and for the `prelude`.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
