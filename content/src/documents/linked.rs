use serde::{Deserialize, Serialize};
use shared_kernel::DocumentId;

/// A document that carries its provider-assigned identifier.
pub trait Document {
    fn id(&self) -> &DocumentId;
}

/// A relationship field as the content provider serializes it.
///
/// Below the requested population depth the provider sends only the id of
/// the related document; at or above it the full document is embedded.
/// Readers that need the document itself go through [`Linked::resolved`]
/// and skip the section when the relationship was left unresolved.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Linked<T> {
    Resolved(T),
    Unresolved(DocumentId),
}

impl<T> Linked<T> {
    pub fn resolved(&self) -> Option<&T> {
        match self {
            Linked::Resolved(document) => Some(document),
            Linked::Unresolved(_) => None,
        }
    }

    pub fn into_resolved(self) -> Option<T> {
        match self {
            Linked::Resolved(document) => Some(document),
            Linked::Unresolved(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Linked::Resolved(_))
    }
}

impl<T: Document> Linked<T> {
    /// The identifier of the related document, available at any
    /// population depth.
    pub fn document_id(&self) -> &DocumentId {
        match self {
            Linked::Resolved(document) => document.id(),
            Linked::Unresolved(id) => id,
        }
    }
}
