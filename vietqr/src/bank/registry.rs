// vietqr-rs/vietqr/src/bank/registry.rs

use std::collections::HashMap;

use derive_more::Display;
use once_cell::sync::Lazy;

use crate::constants::UNKNOWN_BANK_LABEL;

/// Acquirer identifier code -> bank name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "{} ({})", display_name, code)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BankDescriptor {
    /// 6-digit identifier assigned by NAPAS
    pub code: &'static str,
    /// Name shown to the user
    pub display_name: &'static str,
}

/// Form selection token -> banking app URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "{} ({}://)", display_name, url_scheme)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SchemeDescriptor {
    /// Short code the form uses as its list key
    pub form_code: &'static str,
    /// Name shown in the bank list
    pub display_name: &'static str,
    /// Value submitted by the form
    pub token: &'static str,
    /// URL scheme prefix registered by the bank's app
    pub url_scheme: &'static str,
}

/// Known acquirer identifier codes.
pub const BANKS: &[BankDescriptor] = &[
    BankDescriptor { code: "970415", display_name: "Vietinbank" },
    BankDescriptor { code: "970436", display_name: "Vietcombank" },
    BankDescriptor { code: "970418", display_name: "BIDV" },
    BankDescriptor { code: "970407", display_name: "Techcombank" },
    BankDescriptor { code: "970422", display_name: "MBBank" },
    BankDescriptor { code: "970432", display_name: "VPBank" },
    BankDescriptor { code: "970423", display_name: "TPBank" },
    BankDescriptor { code: "970443", display_name: "SHB" },
    BankDescriptor { code: "970405", display_name: "Agribank" },
    BankDescriptor { code: "970403", display_name: "Sacombank" },
    BankDescriptor { code: "970448", display_name: "OCB" },
];

/// Registered app schemes, in the order the transfer form lists them.
pub const SCHEMES: &[SchemeDescriptor] = &[
    SchemeDescriptor { form_code: "VCB", display_name: "Vietcombank", token: "vietcombank", url_scheme: "vcbdigibank" },
    SchemeDescriptor { form_code: "TCB", display_name: "Techcombank", token: "techcombank", url_scheme: "techcombank" },
    SchemeDescriptor { form_code: "BIDV", display_name: "BIDV", token: "bidv", url_scheme: "bidvsmart" },
    SchemeDescriptor { form_code: "VTB", display_name: "Vietinbank", token: "vietinbank", url_scheme: "vietinbank" },
    SchemeDescriptor { form_code: "ACB", display_name: "ACB", token: "acb", url_scheme: "acbapp" },
    SchemeDescriptor { form_code: "TPB", display_name: "TPBank", token: "tpbank", url_scheme: "tpbank" },
    SchemeDescriptor { form_code: "MB", display_name: "MBBank", token: "mbbank", url_scheme: "mbbank" },
    SchemeDescriptor { form_code: "SHB", display_name: "SHB", token: "shb", url_scheme: "shb" },
    SchemeDescriptor { form_code: "VPB", display_name: "VPBank", token: "vpbank", url_scheme: "vpbank" },
    SchemeDescriptor { form_code: "STB", display_name: "Sacombank", token: "sacombank", url_scheme: "sacombank" },
];

static BANK_INDEX: Lazy<HashMap<&'static str, &'static BankDescriptor>> =
    Lazy::new(|| BANKS.iter().map(|b| (b.code, b)).collect());

static SCHEME_INDEX: Lazy<HashMap<&'static str, &'static SchemeDescriptor>> =
    Lazy::new(|| SCHEMES.iter().map(|s| (s.token, s)).collect());

/// Descriptor for an identifier code.
pub fn bank_by_code(code: &str) -> Option<&'static BankDescriptor> {
    BANK_INDEX.get(code).copied()
}

/// Display name for an identifier code, or the generic "other bank" label.
pub fn bank_name_for(code: &str) -> &'static str {
    bank_by_code(code)
        .map(|b| b.display_name)
        .unwrap_or(UNKNOWN_BANK_LABEL)
}

/// Descriptor for an exact form token.
pub fn scheme_by_token(token: &str) -> Option<&'static SchemeDescriptor> {
    SCHEME_INDEX.get(token).copied()
}

/// Registered URL scheme prefix for a form token.
pub fn scheme_for(token: &str) -> Option<&'static str> {
    scheme_by_token(token).map(|s| s.url_scheme)
}

/// Registered URL scheme prefix, or the token itself when it is not
/// registered. Banks whose token already equals their URL scheme work without
/// a table entry.
pub fn resolve_scheme(token: &str) -> &str {
    scheme_for(token).unwrap_or(token)
}

/// Banks offered by the transfer form, in display order.
pub fn selectable_banks() -> &'static [SchemeDescriptor] {
    SCHEMES
}
