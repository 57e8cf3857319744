// vietqr-rs/vietqr/src/deeplink/encoder.rs

use url::form_urlencoded;

use crate::Result;
use crate::bank::resolve_scheme;
use crate::constants::DEEPLINK_PATH;
use crate::payee::BankInfo;

use super::TransferRequest;

/// Characters the amount field may use to group thousands. VND has no minor
/// unit, so `.` is a separator too.
const THOUSANDS_SEPARATORS: &[char] = &[',', '.', ' ', '_', '\'', '\u{00A0}', '\u{202F}'];

/// Remove thousands separators from a display-formatted amount.
///
/// Example: `"1,000,000"` -> `"1000000"`
pub fn strip_thousands_separators(amount: &str) -> String {
    amount
        .chars()
        .filter(|c| !THOUSANDS_SEPARATORS.contains(c))
        .collect()
}

/// Build a bank app deeplink.
///
/// Format: `<prefix>://transfer?account=..&amount=..&content=..&beneficiary=..`
/// with `application/x-www-form-urlencoded` query values. `scheme` is a form
/// token; unregistered tokens are used verbatim as the URL scheme prefix.
pub fn encode(
    scheme: &str,
    account_number: &str,
    amount: &str,
    message: &str,
    account_name: &str,
) -> String {
    let amount = strip_thousands_separators(amount);
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("account", account_number)
        .append_pair("amount", &amount)
        .append_pair("content", message)
        .append_pair("beneficiary", account_name)
        .finish();

    format!("{}{}{}", resolve_scheme(scheme), DEEPLINK_PATH, query)
}

/// Validate a submitted transfer and encode it against the scanned payee.
///
/// Surrounding whitespace on the selected token is ignored.
pub fn build_deeplink(payee: &BankInfo, request: &TransferRequest) -> Result<String> {
    request.validate()?;
    Ok(encode(
        request.selected_bank.trim(),
        &payee.account_number,
        &request.amount,
        &request.message,
        &payee.account_name,
    ))
}
