// vietqr-rs/vietqr/src/types.rs

use crate::Error;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// EMVCo tag - Newtype Pattern (2 ASCII decimal digits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag([u8; 2]);

impl Tag {
    /// Build a tag from two ASCII digits. Panics at compile time when used
    /// in a const with non-digit bytes.
    pub const fn from_digits(hi: u8, lo: u8) -> Self {
        assert!(hi.is_ascii_digit() && lo.is_ascii_digit());
        Self([hi, lo])
    }

    /// Build a tag from its numeric value (0..=99).
    pub fn from_number(n: u8) -> Option<Self> {
        if n > 99 {
            return None;
        }
        Some(Self([b'0' + n / 10, b'0' + n % 10]))
    }

    /// The two ASCII digit bytes.
    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// The tag as written on the wire, e.g. `"38"`.
    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII digits, always valid UTF-8.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }

    /// Numeric value, 0..=99.
    pub fn number(&self) -> u8 {
        (self.0[0] - b'0') * 10 + (self.0[1] - b'0')
    }
}

impl TryFrom<&str> for Tag {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.as_bytes() {
            [hi, lo] if hi.is_ascii_digit() && lo.is_ascii_digit() => Ok(Self([*hi, *lo])),
            _ => Err(Error::InvalidTag(s.to_string())),
        }
    }
}

impl FromStr for Tag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::try_from(s)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
