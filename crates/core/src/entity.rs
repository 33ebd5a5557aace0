//! Entity trait: identity + continuity across state changes.

use crate::id::DocumentId;

/// A persisted document with an optional, store-assigned identifier.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: DocumentId;

    /// Returns the identifier, or `None` if the entity has not been saved yet.
    fn id(&self) -> Option<&Self::Id>;

    /// Assign an identifier (used by stores on first save).
    fn set_id(&mut self, id: Self::Id);
}
