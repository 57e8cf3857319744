// vietqr-rs/vietqr/src/bank/mod.rs

//! Static bank tables.
//!
//! Two separate key spaces live here: acquirer identifier codes assigned by
//! the national payment switch (read from the QR), and scheme tokens picked
//! by the user in the transfer form (used to build the deeplink).

/// Static bank and scheme tables
pub mod registry;

pub use registry::{
    BANKS, BankDescriptor, SCHEMES, SchemeDescriptor, bank_by_code, bank_name_for,
    resolve_scheme, scheme_by_token, scheme_for, selectable_banks,
};
