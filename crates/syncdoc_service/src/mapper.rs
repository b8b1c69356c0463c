//! Mapping between wire DTOs and persisted entities.

use syncdoc_core::SyncedEntity;

/// Bidirectional, field-preserving conversion between an external
/// representation `A` and the persisted entity `E`.
///
/// Implementations are pure and stateless: no validation, no side
/// effects. The provided collection helpers convert element-wise and
/// preserve input order.
pub trait EntityMapper<A, E: SyncedEntity> {
    /// Converts a persisted entity into its external representation.
    fn api_from_entity(&self, entity: &E) -> A;

    /// Converts an external representation into a persisted entity.
    fn entity_from_api(&self, api: &A) -> E;

    /// Converts a slice of entities, element-wise.
    fn api_from_entities(&self, entities: &[E]) -> Vec<A> {
        entities.iter().map(|e| self.api_from_entity(e)).collect()
    }

    /// Converts a slice of external representations, element-wise.
    fn entities_from_api(&self, api: &[A]) -> Vec<E> {
        api.iter().map(|a| self.entity_from_api(a)).collect()
    }
}
