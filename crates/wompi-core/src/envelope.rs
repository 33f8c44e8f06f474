//! Response envelope.

use serde::{Deserialize, Serialize};

/// Body shape of every primary API response: `{ "data": ... }`.
///
/// `data` is optional so that an empty record can be told apart from a
/// transport failure. Sibling keys such as `meta` land in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The wrapped record.
    pub data: Option<T>,
    /// Remaining top-level fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl<T> Envelope<T> {
    /// Wrap a record.
    pub fn new(data: T) -> Self {
        Self {
            data: Some(data),
            extra: serde_json::Map::new(),
        }
    }

    /// Take the record out of the envelope.
    pub fn into_inner(self) -> Option<T> {
        self.data
    }
}
