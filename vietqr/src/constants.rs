// vietqr-rs/vietqr/src/constants.rs
//! Common protocol constants used across the crate

use crate::types::Tag;

/// Tag(2) + Len(2) header size of an EMVCo TLV element, in characters
pub const TLV_HEADER_LEN: usize = 4;

/// Largest value length a 2-digit length field can declare
pub const TLV_MAX_VALUE_LEN: usize = 99;

/// Root tag: merchant account information template (VietQR beneficiary)
pub const TAG_MERCHANT_ACCOUNT: Tag = Tag::from_digits(b'3', b'8');

/// Root tag: transaction amount
pub const TAG_AMOUNT: Tag = Tag::from_digits(b'5', b'4');

/// Root tag: merchant name
pub const TAG_MERCHANT_NAME: Tag = Tag::from_digits(b'5', b'9');

/// Root tag: additional data field template
pub const TAG_ADDITIONAL_DATA: Tag = Tag::from_digits(b'6', b'2');

/// Root tag: CRC. Decoded like any other tag but never verified.
pub const TAG_CRC: Tag = Tag::from_digits(b'6', b'3');

/// Sub-tag inside the tag 38 template: bank code (or NAPAS GUID)
pub const SUB_TAG_BANK_CODE: Tag = Tag::from_digits(b'0', b'0');
/// Sub-tag: account number (or nested NAPAS beneficiary)
pub const SUB_TAG_ACCOUNT_NUMBER: Tag = Tag::from_digits(b'0', b'1');
/// Sub-tag: account name (or NAPAS service code)
pub const SUB_TAG_ACCOUNT_NAME: Tag = Tag::from_digits(b'0', b'2');

/// Sub-tag inside the tag 62 template carrying the purpose of transaction
pub const SUB_TAG_MESSAGE: Tag = Tag::from_digits(b'0', b'8');

/// Globally unique identifier NAPAS puts in sub-tag 00 of tag 38
pub const NAPAS_GUID: &str = "A000000727";

/// Label returned for bank identifier codes missing from the registry
pub const UNKNOWN_BANK_LABEL: &str = "Ngân hàng khác";

/// Maximum transfer message length accepted by the transfer form
pub const MESSAGE_MAX_LEN: usize = 100;

/// Path and query introducer shared by every bank deeplink
pub const DEEPLINK_PATH: &str = "://transfer?";
