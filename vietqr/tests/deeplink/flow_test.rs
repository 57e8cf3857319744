#[path = "../common/mod.rs"]
mod common;

use vietqr::deeplink::{TransferRequest, build_deeplink};
use vietqr::dispatch::{RecordingOpener, dispatch};
use vietqr::payee::resolve_payee;
use vietqr::test_support::sample_payee;
use vietqr::Error;

#[test]
fn scan_fill_encode_dispatch() -> anyhow::Result<()> {
    common::init_logger();

    let payee = resolve_payee(common::fixtures::PIPE_PAYLOAD)?;
    assert_eq!(payee, sample_payee());

    let request = TransferRequest::new("1,000,000", "tra tien", "vietcombank");
    let url = build_deeplink(&payee, &request)?;

    let mut opener = RecordingOpener::new();
    assert!(dispatch(&mut opener, &url));
    assert_eq!(
        opener.last(),
        Some(
            "vcbdigibank://transfer?account=0123456789&amount=1000000&content=tra+tien&beneficiary=NGUYEN+VAN+A"
        )
    );
    Ok(())
}

#[test]
fn emvco_scan_to_deeplink() -> anyhow::Result<()> {
    let raw = common::fixtures::napas_payload();
    let payee = resolve_payee(&raw)?;
    let url = build_deeplink(&payee, &TransferRequest::new("50,000", "", "techcombank"))?;
    assert_eq!(
        url,
        "techcombank://transfer?account=0123456789&amount=50000&content=&beneficiary=NGUYEN+VAN+A"
    );
    Ok(())
}

#[test]
fn missing_app_is_silent() {
    let mut opener = RecordingOpener::new();
    opener.set_failures(1);
    assert!(!dispatch(&mut opener, "unknownbank99://transfer?account=1"));
    assert!(opener.opened.is_empty());
}

#[test]
fn incomplete_form_is_rejected_before_encoding() {
    let payee = sample_payee();
    assert!(matches!(
        build_deeplink(&payee, &TransferRequest::new("100", "", "")),
        Err(Error::MissingBank)
    ));
}

#[test]
fn form_input_is_normalized_before_encoding() -> anyhow::Result<()> {
    let payee = sample_payee();

    let url = build_deeplink(&payee, &TransferRequest::new("1 000 000", "", "  bidv"))?;
    assert!(url.starts_with("bidvsmart://transfer?"), "{}", url);
    assert!(url.contains("&amount=1000000&"), "{}", url);

    assert!(matches!(
        build_deeplink(&payee, &TransferRequest::new("10,000đ", "", " vietcombank")),
        Err(Error::InvalidAmount(_))
    ));
    Ok(())
}
