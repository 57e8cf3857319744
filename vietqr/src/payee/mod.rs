// vietqr-rs/vietqr/src/payee/mod.rs

use crate::bank::bank_name_for;

/// Payload construction
pub mod builder;
/// EMVCo payload extraction
pub mod emvco;
/// Non-EMVCo payload formats
pub mod fallback;
/// Ordered payload strategies
pub mod strategy;

pub use builder::{AccountLayout, PayloadBuilder};
pub use emvco::extract;
#[cfg(feature = "json-fallback")]
pub use fallback::parse_json;
pub use fallback::{parse_pipe_delimited, parse_qr_code};
pub use strategy::{PayeeStrategy, StrategyKind, default_strategies, resolve_payee, resolve_with};

/// Fields pulled out of one scanned payload. Every field except `raw` is
/// optional; nothing is format-checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PayeeRecord {
    /// Tag 38 sub-tag 00, or the nested NAPAS bank code
    pub bank_code: Option<String>,
    /// Tag 38 sub-tag 01
    pub account_number: Option<String>,
    /// Tag 38 sub-tag 02, or root tag 59 for NAPAS payloads
    pub account_name: Option<String>,
    /// Root tag 54, verbatim
    pub amount: Option<String>,
    /// Tag 62 sub-tag 08
    pub message: Option<String>,
    /// Original undecoded input
    pub raw: String,
}

impl PayeeRecord {
    /// Both the bank code and the account number are present and non-empty.
    pub fn is_usable(&self) -> bool {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        filled(&self.bank_code) && filled(&self.account_number)
    }

    /// Registry name for `bank_code`, if one was decoded.
    pub fn bank_name(&self) -> Option<&'static str> {
        self.bank_code.as_deref().map(bank_name_for)
    }

    /// Convert to the payee handed to the transfer form, or `None` when the
    /// record is not usable.
    pub fn to_bank_info(&self) -> Option<BankInfo> {
        if !self.is_usable() {
            return None;
        }
        let bank_code = self.bank_code.clone().unwrap_or_default();
        Some(BankInfo {
            account_number: self.account_number.clone().unwrap_or_default(),
            account_name: self.account_name.clone().unwrap_or_default(),
            bank_name: bank_name_for(&bank_code).to_string(),
            bank_code,
        })
    }
}

/// A usable payee: everything the transfer form needs to show and encode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BankInfo {
    /// Beneficiary account number
    pub account_number: String,
    /// Beneficiary name, possibly empty
    pub account_name: String,
    /// Acquirer identifier code
    pub bank_code: String,
    /// Display name, from the payload or the registry
    pub bank_name: String,
}
