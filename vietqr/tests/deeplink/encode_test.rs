#[path = "../common/mod.rs"]
mod common;

use vietqr::bank::{SCHEMES, resolve_scheme};
use vietqr::deeplink::{encode, format_amount};

#[test]
fn scenario_c_vietcombank() {
    let url = encode("vietcombank", "0123456789", "1,000,000", "tra tien", "NGUYEN VAN A");
    assert!(url.starts_with("vcbdigibank://transfer?"));
    assert!(url.contains("amount=1000000"));
    assert!(url.contains("content=tra+tien"));
    assert!(url.contains("beneficiary=NGUYEN+VAN+A"));
    assert!(url.contains("account=0123456789"));
}

#[test]
fn scenario_d_unknown_scheme() {
    let url = encode("unknownbank99", "0123456789", "10000", "", "NGUYEN VAN A");
    assert!(url.starts_with("unknownbank99://transfer?"));
}

#[test]
fn every_registered_token_uses_its_prefix() {
    for scheme in SCHEMES {
        let url = encode(scheme.token, "1", "1", "", "");
        assert!(
            url.starts_with(&format!("{}://transfer?", scheme.url_scheme)),
            "token {} produced {}",
            scheme.token,
            url
        );
        assert_eq!(resolve_scheme(scheme.token), scheme.url_scheme);
    }
}

#[test]
fn query_parameter_order_is_fixed() {
    let url = encode("mbbank", "a", "b", "c", "d");
    assert_eq!(url, "mbbank://transfer?account=a&amount=b&content=c&beneficiary=d");
}

#[test]
fn form_formatting_is_undone_by_encoder() {
    let shown = format_amount("2500000");
    assert_eq!(shown, "2,500,000");
    let url = encode("sacombank", "1", &shown, "", "");
    assert!(url.contains("amount=2500000&"));
}
