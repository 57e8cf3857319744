// fixtures.rs — provides commonly used test payloads

use vietqr::test_support::{self, element};

pub const PIPE_PAYLOAD: &str = "970436|0123456789|NGUYEN VAN A";

pub const JSON_PAYLOAD: &str =
    r#"{"accountNumber":"0123456789","accountName":"NGUYEN VAN A","bankCode":"970436"}"#;

pub fn flat_payload() -> &'static str {
    test_support::SAMPLE_FLAT_PAYLOAD
}

/// TLV block assembled from (tag, value) pairs in the given order. Used for
/// both root payloads and nested templates.
pub fn block(entries: &[(&str, &str)]) -> String {
    entries
        .iter()
        .map(|(tag, value)| element(tag, value).unwrap())
        .collect()
}

pub fn napas_payload() -> String {
    test_support::napas_payload("50000", "tra tien").unwrap()
}
