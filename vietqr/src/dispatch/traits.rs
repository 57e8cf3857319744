// vietqr-rs/vietqr/src/dispatch/traits.rs

use log::{debug, warn};

use crate::Result;

/// LinkOpener abstracts the platform's URL-open mechanism away from the
/// encoder.
pub trait LinkOpener {
    /// Ask the platform to open `url`.
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Open `url` and swallow any failure.
///
/// Returns whether the opener reported success; `true` does not mean the
/// banking app actually handled the link.
pub fn dispatch(opener: &mut dyn LinkOpener, url: &str) -> bool {
    match opener.open(url) {
        Ok(()) => {
            debug!("deeplink dispatched: {}", url);
            true
        }
        Err(e) => {
            warn!("deeplink dispatch failed, ignoring: {}", e);
            false
        }
    }
}
