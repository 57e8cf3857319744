//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the sample payloads and payees so tests across
//! the crate and tests/ directory agree on the same fixtures.
#![allow(dead_code)]

use crate::payee::{AccountLayout, BankInfo, PayloadBuilder};
use crate::tlv::encode_element;
use crate::{Result, Tag};

/// Flat-layout payload: bank 970415, account 9012345678, NGUYEN VAN A,
/// amount 10000.
#[doc(hidden)]
pub const SAMPLE_FLAT_PAYLOAD: &str = "38400006970415011090123456780212NGUYEN VAN A540510000";

/// Encode one `tag + pad2(len) + value` element from a string tag.
#[doc(hidden)]
pub fn element(tag: &str, value: &str) -> Result<String> {
    encode_element(Tag::try_from(tag)?, value)
}

/// NAPAS-layout payload for Vietcombank account 0123456789 with amount and
/// message.
#[doc(hidden)]
pub fn napas_payload(amount: &str, message: &str) -> Result<String> {
    PayloadBuilder::new()
        .layout(AccountLayout::Napas)
        .bank_code("970436")
        .account_number("0123456789")
        .account_name("NGUYEN VAN A")
        .amount(amount)
        .message(message)
        .build()
}

/// Payee matching the pipe-delimited sample `970436|0123456789|NGUYEN VAN A`.
#[doc(hidden)]
pub fn sample_payee() -> BankInfo {
    BankInfo {
        account_number: "0123456789".to_string(),
        account_name: "NGUYEN VAN A".to_string(),
        bank_code: "970436".to_string(),
        bank_name: "Vietcombank".to_string(),
    }
}
