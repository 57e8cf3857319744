// vietqr-rs/vietqr/src/tlv/mod.rs

/// TLV element encoding
pub mod encoder;
/// Ordered tag -> value mapping
pub mod map;
/// TLV scanning
pub mod parser;

pub use encoder::{encode_element, encode_map};
pub use map::TagMap;
pub use parser::{Decoded, decode, decode_nested, parse};
