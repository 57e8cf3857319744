// vietqr-rs/vietqr/src/tlv/parser.rs

use log::{debug, warn};

use crate::constants::TLV_HEADER_LEN;
use crate::types::Tag;
use crate::utils::split_chars;
use crate::Error;

use super::TagMap;

/// Result of one TLV scan pass.
///
/// `tags` always holds every element decoded before the scan stopped. A
/// malformed header stops the pass and is reported in `error`; a declared
/// length running past the end of the input stops the pass and sets
/// `truncated`.
#[derive(Debug)]
pub struct Decoded {
    /// Elements decoded before the scan stopped
    pub tags: TagMap,
    /// Malformed header that stopped the scan
    pub error: Option<Error>,
    /// The last element declared more characters than remained
    pub truncated: bool,
}

impl Decoded {
    /// True when the whole input was consumed without a header error or a
    /// truncated tail.
    pub fn is_complete(&self) -> bool {
        self.error.is_none() && !self.truncated
    }
}

/// Decode an EMVCo TLV string into a flat tag -> value mapping.
///
/// Never fails: malformed or truncated input yields whatever was decoded
/// before the problem. Inputs shorter than a 4-character header decode to an
/// empty mapping.
pub fn decode(input: &str) -> TagMap {
    parse(input).tags
}

/// Decode the value of `tag` in `map` as a nested TLV block.
pub fn decode_nested(map: &TagMap, tag: Tag) -> Option<TagMap> {
    map.nested(tag)
}

/// Scan `input` left to right: Tag(2) + Len(2) + Value(Len), repeated until
/// fewer than 4 characters remain.
pub fn parse(input: &str) -> Decoded {
    let mut tags = TagMap::new();
    let mut rest = input;
    // Character offset, used for diagnostics only
    let mut offset = 0usize;

    loop {
        let Some((header, after)) = split_chars(rest, TLV_HEADER_LEN) else {
            break;
        };

        let Some((tag, len)) = parse_header(header) else {
            warn!("malformed tlv header {:?} at offset {}", header, offset);
            return Decoded {
                tags,
                error: Some(Error::MalformedHeader {
                    offset,
                    header: header.to_string(),
                }),
                truncated: false,
            };
        };

        let Some((value, next)) = split_chars(after, len) else {
            debug!(
                "tlv tag {} at offset {} declares {} characters past end of input",
                tag, offset, len
            );
            return Decoded {
                tags,
                error: None,
                truncated: true,
            };
        };

        tags.insert(tag, value);
        rest = next;
        offset += TLV_HEADER_LEN + len;
    }

    Decoded {
        tags,
        error: None,
        truncated: false,
    }
}

/// Split a 4-character header into its tag and decimal length.
fn parse_header(header: &str) -> Option<(Tag, usize)> {
    let (tag_str, len_str) = split_chars(header, 2)?;
    let tag = Tag::try_from(tag_str).ok()?;
    match len_str.as_bytes() {
        [hi, lo] if hi.is_ascii_digit() && lo.is_ascii_digit() => {
            Some((tag, ((hi - b'0') * 10 + (lo - b'0')) as usize))
        }
        _ => None,
    }
}
