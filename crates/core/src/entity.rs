//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities with the same id are the same entity, even when their other
/// attributes differ (a customer keeps its identity after paying).
pub trait Entity {
    /// Identifier type (an order id, a customer name).
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Returns `true` if both entities share an identity.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
