//! Key filter applied to consumed messages before they are written.

use crate::Message;

/// Exact-match filter over the message key.
///
/// An absent or empty filter string keeps every message. Otherwise a message
/// is kept only if its key bytes equal the UTF-8 bytes of the filter,
/// case-sensitively. Messages without a key never match a configured filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyFilter {
    key: Option<Vec<u8>>,
}

impl KeyFilter {
    pub fn new(key: Option<String>) -> Self {
        let key = key.filter(|k| !k.is_empty()).map(String::into_bytes);
        Self { key }
    }

    pub fn is_active(&self) -> bool {
        self.key.is_some()
    }

    pub fn matches(&self, message: &Message) -> bool {
        match &self.key {
            None => true,
            Some(expected) => {
                let matched = message.key.as_deref() == Some(expected.as_slice());
                if !matched {
                    tracing::trace!(
                        partition = message.partition,
                        offset = message.offset,
                        "Skipping message with non-matching key"
                    );
                }
                matched
            }
        }
    }
}
