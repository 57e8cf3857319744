// vietqr-rs/vietqr/src/dispatch/mock.rs

use crate::dispatch::traits::LinkOpener;
use crate::{Error, Result};

/// Mock opener for tests. It records opened URLs and can simulate a missing
/// app for a number of calls.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    /// URLs opened successfully, oldest first
    pub opened: Vec<String>,
    /// Testing hook: number of open calls that should fail
    pub failures: usize,
}

impl RecordingOpener {
    /// Opener that never fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many subsequent open calls should fail (for tests).
    pub fn set_failures(&mut self, n: usize) {
        self.failures = n;
    }

    /// Most recently opened URL.
    pub fn last(&self) -> Option<&str> {
        self.opened.last().map(String::as_str)
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        if self.failures > 0 {
            self.failures -= 1;
            let scheme = url.split("://").next().unwrap_or(url);
            return Err(Error::Dispatch(format!("no handler for scheme {:?}", scheme)));
        }
        self.opened.push(url.to_string());
        Ok(())
    }
}
