// vietqr-rs/vietqr/src/prelude.rs

pub use crate::bank::{bank_name_for, resolve_scheme, scheme_for};
pub use crate::deeplink::{TransferRequest, build_deeplink, encode};
pub use crate::dispatch::{LinkOpener, dispatch};
pub use crate::payee::{BankInfo, PayeeRecord, extract, resolve_payee};
pub use crate::tlv::{Decoded, TagMap, decode, parse};
pub use crate::{Error, Result, Tag};
