// vietqr-rs/vietqr/src/payee/strategy.rs

use derive_more::Display;
use log::debug;

use crate::{Error, Result};

use super::{BankInfo, emvco, fallback};

/// Identifies a payload format in logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StrategyKind {
    /// EMVCo/VietQR TLV
    #[display(fmt = "emvco")]
    Emvco,
    /// `code|account|name`
    #[display(fmt = "pipe-delimited")]
    PipeDelimited,
    /// JSON payee object
    #[display(fmt = "json")]
    Json,
}

/// One independent way of turning a scanned string into a payee.
pub trait PayeeStrategy: Send + Sync {
    /// Format handled by this strategy.
    fn kind(&self) -> StrategyKind;

    /// Return a usable payee, or `None` when the payload is not in this
    /// strategy's format or lacks mandatory fields.
    fn parse(&self, raw: &str) -> Option<BankInfo>;
}

/// EMVCo/VietQR TLV payloads.
pub struct EmvcoStrategy;

impl PayeeStrategy for EmvcoStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Emvco
    }

    fn parse(&self, raw: &str) -> Option<BankInfo> {
        emvco::extract(raw).to_bank_info()
    }
}

/// `bankCode|accountNumber|accountName|...` payloads.
pub struct PipeDelimitedStrategy;

impl PayeeStrategy for PipeDelimitedStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::PipeDelimited
    }

    fn parse(&self, raw: &str) -> Option<BankInfo> {
        fallback::parse_pipe_delimited(raw)
    }
}

/// JSON payee objects.
#[cfg(feature = "json-fallback")]
pub struct JsonStrategy;

#[cfg(feature = "json-fallback")]
impl PayeeStrategy for JsonStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Json
    }

    fn parse(&self, raw: &str) -> Option<BankInfo> {
        match fallback::parse_json(raw) {
            Ok(info) => Some(info),
            Err(e) => {
                debug!("json strategy rejected payload: {}", e);
                None
            }
        }
    }
}

/// EMVCo first, then the fallback formats.
pub fn default_strategies() -> Vec<Box<dyn PayeeStrategy>> {
    #[cfg_attr(not(feature = "json-fallback"), allow(unused_mut))]
    let mut strategies: Vec<Box<dyn PayeeStrategy>> =
        vec![Box::new(EmvcoStrategy), Box::new(PipeDelimitedStrategy)];
    #[cfg(feature = "json-fallback")]
    strategies.push(Box::new(JsonStrategy));
    strategies
}

/// Run `strategies` in order; the first usable payee wins.
pub fn resolve_with(strategies: &[Box<dyn PayeeStrategy>], raw: &str) -> Result<BankInfo> {
    for strategy in strategies {
        if let Some(info) = strategy.parse(raw) {
            debug!("payee resolved by {} strategy", strategy.kind());
            return Ok(info);
        }
    }
    Err(Error::NoUsablePayee)
}

/// Resolve a scanned payload with the default strategy order.
///
/// `Err(Error::NoUsablePayee)` means the caller should ask for a rescan.
pub fn resolve_payee(raw: &str) -> Result<BankInfo> {
    resolve_with(&default_strategies(), raw)
}
