// vietqr-rs/vietqr/src/tlv/encoder.rs

use crate::constants::{TLV_HEADER_LEN, TLV_MAX_VALUE_LEN};
use crate::types::Tag;
use crate::utils::char_len;
use crate::{Error, Result};

use super::TagMap;

/// Encode a single element as `tag + pad2(len) + value`.
pub fn encode_element(tag: Tag, value: &str) -> Result<String> {
    let len = char_len(value);
    if len > TLV_MAX_VALUE_LEN {
        return Err(Error::ValueTooLong {
            max: TLV_MAX_VALUE_LEN,
            actual: len,
        });
    }

    let mut out = String::with_capacity(TLV_HEADER_LEN + value.len());
    out.push_str(tag.as_str());
    out.push_str(&format!("{:02}", len));
    out.push_str(value);
    Ok(out)
}

/// Encode every element of `map` in order.
pub fn encode_map(map: &TagMap) -> Result<String> {
    let mut out = String::new();
    for (tag, value) in map.iter() {
        out.push_str(&encode_element(tag, value)?);
    }
    Ok(out)
}
