// vietqr-rs/vietqr/src/deeplink/mod.rs

/// Deeplink URL construction
pub mod encoder;
/// Transfer form input
pub mod request;

pub use encoder::{build_deeplink, encode, strip_thousands_separators};
pub use request::{TransferRequest, format_amount};
