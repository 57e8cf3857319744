// vietqr-rs/vietqr/src/payee/fallback.rs

//! Parsers for QR producers that do not emit EMVCo payloads.
//!
//! Two shapes are accepted: `bankCode|accountNumber|accountName|...` and a
//! JSON object with `accountNumber`/`accountName` (plus optional
//! `bankCode`/`bankName`).

use log::debug;

use crate::bank::bank_name_for;

use super::BankInfo;

/// Parse `code|account|name|...`. Needs at least three fields with a
/// non-empty bank code and account number; extra fields are ignored.
pub fn parse_pipe_delimited(raw: &str) -> Option<BankInfo> {
    if !raw.contains('|') {
        return None;
    }

    let mut parts = raw.split('|');
    let bank_code = parts.next()?;
    let account_number = parts.next()?;
    let account_name = parts.next()?;
    if bank_code.is_empty() || account_number.is_empty() {
        debug!("pipe payload lacks a bank code or account number");
        return None;
    }

    Some(BankInfo {
        account_number: account_number.to_string(),
        account_name: account_name.to_string(),
        bank_code: bank_code.to_string(),
        bank_name: bank_name_for(bank_code).to_string(),
    })
}

#[cfg(feature = "json-fallback")]
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonPayee {
    account_number: Option<String>,
    account_name: Option<String>,
    bank_code: Option<String>,
    bank_name: Option<String>,
}

/// Parse a JSON payee object.
///
/// Malformed JSON is `Error::Json`; well-formed JSON missing a non-empty
/// `accountNumber` or `accountName` is `Error::NoUsablePayee`.
#[cfg(feature = "json-fallback")]
pub fn parse_json(raw: &str) -> crate::Result<BankInfo> {
    let payee: JsonPayee = serde_json::from_str(raw)?;

    let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
    let (Some(account_number), Some(account_name)) = (
        non_empty(payee.account_number),
        non_empty(payee.account_name),
    ) else {
        return Err(crate::Error::NoUsablePayee);
    };

    let bank_code = payee.bank_code.unwrap_or_default();
    let bank_name = non_empty(payee.bank_name)
        .unwrap_or_else(|| bank_name_for(&bank_code).to_string());

    Ok(BankInfo {
        account_number,
        account_name,
        bank_code,
        bank_name,
    })
}

/// Legacy combined parser: pipe-delimited first, then JSON. Any failure is
/// `None`.
pub fn parse_qr_code(raw: &str) -> Option<BankInfo> {
    if let Some(info) = parse_pipe_delimited(raw) {
        return Some(info);
    }

    #[cfg(feature = "json-fallback")]
    match parse_json(raw) {
        Ok(info) => return Some(info),
        Err(e) => debug!("qr payload is not a json payee: {}", e),
    }

    debug!("qr payload matched no fallback format");
    None
}
