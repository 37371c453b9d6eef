use serde::{Deserialize, Serialize};

/// One reconstructed wiki page, ready for downstream consumers.
///
/// `url` is derived, not read from the dump: base wiki URL plus the title
/// with spaces replaced by underscores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WikiRecord {
    pub title: String,
    pub content: String,
    pub url: String,
}
