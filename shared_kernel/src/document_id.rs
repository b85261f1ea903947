use serde::{Deserialize, Deserializer, Serialize};

/// Identifier assigned to a document by the content provider.
///
/// Depending on the database adapter backing the provider, ids arrive over
/// the wire either as JSON strings or as JSON numbers. Both forms normalize
/// to the string representation so that ids can be compared regardless of
/// which adapter produced them.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(value: String) -> Self {
        DocumentId(value)
    }

    pub fn inner(&self) -> String {
        self.0.clone()
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Text(id) => Ok(DocumentId(id)),
            RawId::Number(id) => Ok(DocumentId(id.to_string())),
        }
    }
}

impl PartialEq<str> for DocumentId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        DocumentId(id)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        DocumentId(id.to_owned())
    }
}

impl From<i64> for DocumentId {
    fn from(id: i64) -> Self {
        DocumentId(id.to_string())
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.inner()
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
