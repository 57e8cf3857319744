#[path = "../common/mod.rs"]
mod common;

use vietqr::constants::{TAG_AMOUNT, TAG_CRC, TAG_MERCHANT_ACCOUNT};
use vietqr::tlv::{decode, decode_nested, parse};
use vietqr::{Error, Tag};

fn tag(s: &str) -> Tag {
    s.parse().unwrap()
}

#[test]
fn short_inputs_decode_to_empty_mapping() {
    for input in ["", "3", "38", "384"] {
        let d = parse(input);
        assert!(d.tags.is_empty(), "input {:?}", input);
        assert!(d.error.is_none());
        assert!(!d.truncated);
    }
}

#[test]
fn scenario_b_root_and_nested() {
    common::init_logger();
    let root = decode(common::fixtures::flat_payload());
    assert_eq!(root.get(TAG_MERCHANT_ACCOUNT).map(str::len), Some(40));
    assert_eq!(root.get(TAG_AMOUNT), Some("10000"));

    let account = decode_nested(&root, TAG_MERCHANT_ACCOUNT).unwrap();
    assert_eq!(account.get(tag("00")), Some("970415"));
    assert_eq!(account.get(tag("01")), Some("9012345678"));
    assert_eq!(account.get(tag("02")), Some("NGUYEN VAN A"));
}

#[test]
fn repeated_root_tag_last_write_wins() {
    let raw = common::fixtures::block(&[("54", "100"), ("58", "VN"), ("54", "200")]);
    let m = decode(&raw);
    assert_eq!(m.len(), 2);
    assert_eq!(m.get(TAG_AMOUNT), Some("200"));
}

#[test]
fn crc_tag_is_decoded_but_not_checked() {
    let raw = format!("{}6304FFFF", common::fixtures::flat_payload());
    let d = parse(&raw);
    assert!(d.is_complete());
    assert_eq!(d.tags.get(TAG_CRC), Some("FFFF"));
}

#[test]
fn malformed_header_returns_partial_result() {
    common::init_logger();
    let raw = format!("{}54ab", common::fixtures::flat_payload());
    let d = parse(&raw);
    assert!(d.tags.contains(TAG_MERCHANT_ACCOUNT));
    assert!(matches!(d.error, Some(Error::MalformedHeader { .. })));
}

#[test]
fn truncated_tail_is_not_an_error() {
    let raw = format!("{}6220abc", common::fixtures::flat_payload());
    let d = parse(&raw);
    assert!(d.truncated);
    assert!(d.error.is_none());
    assert_eq!(d.tags.get(TAG_AMOUNT), Some("10000"));
    assert_eq!(d.tags.len(), 2);
}
