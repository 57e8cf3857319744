#[path = "../common/mod.rs"]
mod common;

use vietqr::payee::resolve_payee;
use vietqr::Error;

#[test]
fn emvco_wins_when_usable() -> anyhow::Result<()> {
    common::init_logger();
    let info = resolve_payee(common::fixtures::flat_payload())?;
    assert_eq!(info.bank_code, "970415");
    assert_eq!(info.account_number, "9012345678");
    Ok(())
}

#[test]
fn pipe_used_when_emvco_yields_nothing() -> anyhow::Result<()> {
    common::init_logger();
    let info = resolve_payee(common::fixtures::PIPE_PAYLOAD)?;
    assert_eq!(info.bank_name, "Vietcombank");
    assert_eq!(info.account_number, "0123456789");
    Ok(())
}

#[cfg(feature = "json-fallback")]
#[test]
fn json_used_last() -> anyhow::Result<()> {
    let info = resolve_payee(common::fixtures::JSON_PAYLOAD)?;
    assert_eq!(info.account_name, "NGUYEN VAN A");
    Ok(())
}

#[test]
fn unusable_payload_asks_for_rescan() {
    for raw in ["", "hello", "{\"accountNumber\":1", "5802VN"] {
        assert!(
            matches!(resolve_payee(raw), Err(Error::NoUsablePayee)),
            "payload {:?}",
            raw
        );
    }
}

#[test]
fn pipe_payload_without_account_is_rejected() {
    for raw in ["970436||NGUYEN VAN A", "|0123456789|NGUYEN VAN A", "||", "|||"] {
        assert!(
            matches!(resolve_payee(raw), Err(Error::NoUsablePayee)),
            "payload {:?}",
            raw
        );
    }
}
