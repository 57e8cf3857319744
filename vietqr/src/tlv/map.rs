// vietqr-rs/vietqr/src/tlv/map.rs

use crate::types::Tag;

/// Ordered tag -> value mapping produced by one TLV scan pass.
///
/// Insertion order is preserved. Inserting a tag that is already present
/// replaces its value in place (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMap {
    entries: Vec<(Tag, String)>,
}

impl TagMap {
    /// Empty mapping.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace the value for `tag`, returning the previous value.
    pub fn insert(&mut self, tag: Tag, value: impl Into<String>) -> Option<String> {
        let value = value.into();
        match self.entries.iter_mut().find(|(t, _)| *t == tag) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((tag, value));
                None
            }
        }
    }

    /// Value for `tag`, including empty values.
    pub fn get(&self, tag: Tag) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, v)| v.as_str())
    }

    /// Like `get`, but treats an empty value as absent.
    pub fn get_non_empty(&self, tag: Tag) -> Option<&str> {
        self.get(tag).filter(|v| !v.is_empty())
    }

    /// True when `tag` was decoded, even with an empty value.
    pub fn contains(&self, tag: Tag) -> bool {
        self.get(tag).is_some()
    }

    /// Decode the value of a composite tag as a nested TLV block.
    pub fn nested(&self, tag: Tag) -> Option<TagMap> {
        self.get_non_empty(tag).map(super::parser::decode)
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was decoded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tags in first-seen order.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.entries.iter().map(|(t, _)| *t)
    }

    /// `(tag, value)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (Tag, &str)> + '_ {
        self.entries.iter().map(|(t, v)| (*t, v.as_str()))
    }
}

impl FromIterator<(Tag, String)> for TagMap {
    fn from_iter<I: IntoIterator<Item = (Tag, String)>>(iter: I) -> Self {
        let mut map = TagMap::new();
        for (tag, value) in iter {
            map.insert(tag, value);
        }
        map
    }
}
