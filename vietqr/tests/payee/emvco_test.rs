#[path = "../common/mod.rs"]
mod common;

use vietqr::payee::extract;

#[test]
fn scenario_b_extracts_payee() {
    let r = extract(common::fixtures::flat_payload());
    assert_eq!(r.bank_code.as_deref(), Some("970415"));
    assert_eq!(r.account_number.as_deref(), Some("9012345678"));
    assert_eq!(r.account_name.as_deref(), Some("NGUYEN VAN A"));
    assert_eq!(r.amount.as_deref(), Some("10000"));
    assert_eq!(r.bank_name(), Some("Vietinbank"));
    assert!(r.is_usable());
}

#[test]
fn message_from_additional_data() {
    let additional = common::fixtures::block(&[("01", "INV42"), ("08", "Chuyển tiền")]);
    let account = common::fixtures::block(&[("00", "970422"), ("01", "0001")]);
    let raw = common::fixtures::block(&[
        ("38", account.as_str()),
        ("62", additional.as_str()),
    ]);

    let r = extract(&raw);
    assert_eq!(r.message.as_deref(), Some("Chuyển tiền"));
    assert_eq!(r.amount, None);
    assert_eq!(r.account_name, None);
    assert!(r.is_usable());
}

#[test]
fn napas_layout_extracts_nested_beneficiary() {
    let raw = common::fixtures::napas_payload();
    let r = extract(&raw);
    assert_eq!(r.bank_code.as_deref(), Some("970436"));
    assert_eq!(r.account_number.as_deref(), Some("0123456789"));
    assert_eq!(r.account_name.as_deref(), Some("NGUYEN VAN A"));
    assert_eq!(r.amount.as_deref(), Some("50000"));
    assert_eq!(r.message.as_deref(), Some("tra tien"));
    assert_eq!(r.raw, raw);
}

#[test]
fn missing_account_number_is_not_usable() {
    let account = common::fixtures::block(&[("00", "970436"), ("02", "NGUYEN VAN A")]);
    let raw = common::fixtures::block(&[("38", account.as_str())]);
    let r = extract(&raw);
    assert!(!r.is_usable());
    assert_eq!(r.to_bank_info(), None);
}

#[test]
fn pipe_payload_is_not_emvco() {
    let r = extract(common::fixtures::PIPE_PAYLOAD);
    assert!(!r.is_usable());
    assert_eq!(r.raw, common::fixtures::PIPE_PAYLOAD);
}
