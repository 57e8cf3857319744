// vietqr-rs/vietqr/src/deeplink/request.rs

use crate::constants::MESSAGE_MAX_LEN;
use crate::utils::{char_len, digits_only, group_thousands};
use crate::{Error, Result};

use super::strip_thousands_separators;

/// Transfer details entered by the user for one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TransferRequest {
    /// May still carry thousands separators
    pub amount: String,
    /// Transfer note, at most 100 characters
    pub message: String,
    /// Scheme token chosen in the bank list
    pub selected_bank: String,
}

impl TransferRequest {
    /// Build a request; `message` is cut to 100 characters like the form
    /// input.
    pub fn new(
        amount: impl Into<String>,
        message: impl Into<String>,
        selected_bank: impl Into<String>,
    ) -> Self {
        let message: String = message.into();
        let message = if char_len(&message) > MESSAGE_MAX_LEN {
            message.chars().take(MESSAGE_MAX_LEN).collect::<String>()
        } else {
            message
        };
        Self {
            amount: amount.into(),
            message,
            selected_bank: selected_bank.into(),
        }
    }

    /// Amount and bank are mandatory; the message is optional but bounded.
    ///
    /// The amount must be ASCII digits once thousands separators are removed,
    /// which is exactly what the deeplink carries.
    pub fn validate(&self) -> Result<()> {
        let amount = strip_thousands_separators(&self.amount);
        if amount.is_empty() {
            return Err(Error::MissingAmount);
        }
        if !amount.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAmount(self.amount.clone()));
        }
        if self.selected_bank.trim().is_empty() {
            return Err(Error::MissingBank);
        }
        let len = char_len(&self.message);
        if len > MESSAGE_MAX_LEN {
            return Err(Error::MessageTooLong {
                max: MESSAGE_MAX_LEN,
                actual: len,
            });
        }
        Ok(())
    }
}

/// Reformat raw amount input for display: drop every non-digit, then group
/// thousands with `,`.
///
/// Example: `"1000000đ"` -> `"1,000,000"`
pub fn format_amount(input: &str) -> String {
    group_thousands(&digits_only(input), ',')
}
