// Entity identity
// Identity is an optional id assigned by whoever owns the entity (a store, a test, a factory).

use crate::attributes::Attributes;
use std::fmt::Debug;

/// An object with an identity and by-name attribute access.
///
/// Fresh entities have no id until one is assigned.
pub trait Entity: Attributes {
    type Id: Clone + PartialEq + Debug;

    fn id(&self) -> Option<&Self::Id>;

    fn set_id(&mut self, id: Self::Id);

    fn has_id(&self) -> bool {
        self.id().is_some()
    }
}
