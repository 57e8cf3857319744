// vietqr-rs/vietqr/src/payee/builder.rs

use crate::constants::{
    NAPAS_GUID, SUB_TAG_ACCOUNT_NAME, SUB_TAG_ACCOUNT_NUMBER, SUB_TAG_BANK_CODE, SUB_TAG_MESSAGE,
    TAG_ADDITIONAL_DATA, TAG_AMOUNT, TAG_MERCHANT_ACCOUNT, TAG_MERCHANT_NAME,
};
use crate::tlv::encode_element;
use crate::types::Tag;
use crate::Result;

const TAG_PAYLOAD_FORMAT: Tag = Tag::from_digits(b'0', b'0');
const TAG_CURRENCY: Tag = Tag::from_digits(b'5', b'3');
const TAG_COUNTRY: Tag = Tag::from_digits(b'5', b'8');

/// Where the beneficiary lives inside tag 38.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountLayout {
    /// 00 = bank code, 01 = account number, 02 = account name
    #[default]
    Flat,
    /// 00 = NAPAS GUID, 01 = {00 = bank code, 01 = account number},
    /// 02 = service code; the name goes to root tag 59
    Napas,
}

/// Builds VietQR payload strings. Fields left unset are omitted. The CRC
/// tag is never appended.
#[derive(Debug, Clone, Default)]
pub struct PayloadBuilder {
    layout: AccountLayout,
    bank_code: Option<String>,
    account_number: Option<String>,
    account_name: Option<String>,
    amount: Option<String>,
    message: Option<String>,
}

impl PayloadBuilder {
    /// Flat layout, every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the tag 38 layout.
    pub fn layout(mut self, layout: AccountLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Acquirer identifier code.
    pub fn bank_code(mut self, code: impl Into<String>) -> Self {
        self.bank_code = Some(code.into());
        self
    }

    /// Beneficiary account number.
    pub fn account_number(mut self, number: impl Into<String>) -> Self {
        self.account_number = Some(number.into());
        self
    }

    /// Beneficiary name.
    pub fn account_name(mut self, name: impl Into<String>) -> Self {
        self.account_name = Some(name.into());
        self
    }

    /// Tag 54 amount.
    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Tag 62 sub-tag 08 message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Fails with `ValueTooLong` when any element would exceed 99 characters.
    pub fn build(self) -> Result<String> {
        let mut out = encode_element(TAG_PAYLOAD_FORMAT, "01")?;

        let account = self.merchant_account()?;
        if !account.is_empty() {
            out.push_str(&encode_element(TAG_MERCHANT_ACCOUNT, &account)?);
        }

        out.push_str(&encode_element(TAG_CURRENCY, "704")?);
        if let Some(amount) = &self.amount {
            out.push_str(&encode_element(TAG_AMOUNT, amount)?);
        }
        out.push_str(&encode_element(TAG_COUNTRY, "VN")?);

        if self.layout == AccountLayout::Napas {
            if let Some(name) = &self.account_name {
                out.push_str(&encode_element(TAG_MERCHANT_NAME, name)?);
            }
        }

        if let Some(message) = &self.message {
            let additional = encode_element(SUB_TAG_MESSAGE, message)?;
            out.push_str(&encode_element(TAG_ADDITIONAL_DATA, &additional)?);
        }

        Ok(out)
    }

    fn merchant_account(&self) -> Result<String> {
        let mut account = String::new();
        match self.layout {
            AccountLayout::Flat => {
                push_opt(&mut account, SUB_TAG_BANK_CODE, &self.bank_code)?;
                push_opt(&mut account, SUB_TAG_ACCOUNT_NUMBER, &self.account_number)?;
                push_opt(&mut account, SUB_TAG_ACCOUNT_NAME, &self.account_name)?;
            }
            AccountLayout::Napas => {
                let mut beneficiary = String::new();
                push_opt(&mut beneficiary, SUB_TAG_BANK_CODE, &self.bank_code)?;
                push_opt(&mut beneficiary, SUB_TAG_ACCOUNT_NUMBER, &self.account_number)?;

                account.push_str(&encode_element(SUB_TAG_BANK_CODE, NAPAS_GUID)?);
                account.push_str(&encode_element(SUB_TAG_ACCOUNT_NUMBER, &beneficiary)?);
                account.push_str(&encode_element(SUB_TAG_ACCOUNT_NAME, "QRIBFTTA")?);
            }
        }
        Ok(account)
    }
}

fn push_opt(out: &mut String, tag: Tag, value: &Option<String>) -> Result<()> {
    if let Some(v) = value {
        out.push_str(&encode_element(tag, v)?);
    }
    Ok(())
}
