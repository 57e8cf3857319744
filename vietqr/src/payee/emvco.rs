// vietqr-rs/vietqr/src/payee/emvco.rs

use log::debug;

use crate::constants::{
    NAPAS_GUID, SUB_TAG_ACCOUNT_NAME, SUB_TAG_ACCOUNT_NUMBER, SUB_TAG_BANK_CODE, SUB_TAG_MESSAGE,
    TAG_ADDITIONAL_DATA, TAG_AMOUNT, TAG_MERCHANT_ACCOUNT, TAG_MERCHANT_NAME,
};
use crate::tlv::{TagMap, decode};

use super::PayeeRecord;

/// Interpret an EMVCo/VietQR payload.
///
/// Root tag 38 carries the beneficiary (00 = bank code, 01 = account number,
/// 02 = account name), root tag 54 the amount and root tag 62 sub-tag 08 the
/// message. A missing tag only leaves the matching field empty; this never
/// fails.
pub fn extract(raw: &str) -> PayeeRecord {
    let root = decode(raw);
    let mut record = PayeeRecord {
        raw: raw.to_string(),
        ..Default::default()
    };

    if let Some(account) = root.nested(TAG_MERCHANT_ACCOUNT) {
        apply_merchant_account(&mut record, &account, &root);
    }

    record.amount = owned(root.get_non_empty(TAG_AMOUNT));

    if let Some(additional) = root.nested(TAG_ADDITIONAL_DATA) {
        record.message = owned(additional.get_non_empty(SUB_TAG_MESSAGE));
    }

    debug!(
        "emvco payload: {} root tags, bank_code={:?}, usable={}",
        root.len(),
        record.bank_code,
        record.is_usable()
    );
    record
}

/// Fill the beneficiary fields from the tag 38 template.
///
/// NAPAS-issued codes put the GUID in sub-tag 00 and nest the bank code and
/// account number one level deeper in sub-tag 01; sub-tag 02 is then a
/// service code, so the name comes from root tag 59 instead.
fn apply_merchant_account(record: &mut PayeeRecord, account: &TagMap, root: &TagMap) {
    if account.get(SUB_TAG_BANK_CODE) == Some(NAPAS_GUID) {
        if let Some(beneficiary) = account.nested(SUB_TAG_ACCOUNT_NUMBER) {
            record.bank_code = owned(beneficiary.get_non_empty(SUB_TAG_BANK_CODE));
            record.account_number = owned(beneficiary.get_non_empty(SUB_TAG_ACCOUNT_NUMBER));
            record.account_name = owned(root.get_non_empty(TAG_MERCHANT_NAME));
            return;
        }
    }

    record.bank_code = owned(account.get_non_empty(SUB_TAG_BANK_CODE));
    record.account_number = owned(account.get_non_empty(SUB_TAG_ACCOUNT_NUMBER));
    record.account_name = owned(account.get_non_empty(SUB_TAG_ACCOUNT_NAME));
}

fn owned(v: Option<&str>) -> Option<String> {
    v.map(str::to_string)
}
