// vietqr-rs/vietqr/src/error.rs

use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    /// TLV header whose tag or length is not two decimal digits
    #[error("malformed tlv header at offset {offset}: {header:?}")]
    MalformedHeader { offset: usize, header: String },

    /// Tag that is not two ASCII digits
    #[error("invalid tag: {0:?}")]
    InvalidTag(String),

    /// Element value over 99 characters
    #[error("value too long for tlv element: max {max} characters, got {actual}")]
    ValueTooLong { max: usize, actual: usize },

    /// No strategy produced a payee; rescan
    #[error("no usable payee in scanned payload")]
    NoUsablePayee,

    /// Malformed JSON payee
    #[cfg(feature = "json-fallback")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Amount has no digits
    #[error("transfer amount is missing")]
    MissingAmount,

    /// Amount still has non-digits after separators are removed
    #[error("transfer amount is not a whole number: {0:?}")]
    InvalidAmount(String),

    /// No bank token selected
    #[error("no bank selected for transfer")]
    MissingBank,

    /// Transfer message over 100 characters
    #[error("message too long: max {max} characters, got {actual}")]
    MessageTooLong { max: usize, actual: usize },

    /// Platform could not open the link
    #[error("deeplink dispatch failed: {0}")]
    Dispatch(String),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
