//! Repository Gateway
//!
//! Abstract, entity-agnostic contract for persistence operations.

use async_trait::async_trait;

use crate::domain::models::operation_result::OperationResult;
use crate::domain::models::predicate::{Entity, Predicate};
use crate::shared::errors::RepositoryError;

/// Generic repository over any [`Entity`]
///
/// `add` and `remove` never fail: store errors are reported through the
/// returned [`OperationResult`].
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Insert one entity
    async fn add(&self, entity: &T) -> OperationResult;

    /// Find an entity by its identifier
    async fn get_by_id(&self, id: T::Id) -> Result<Option<T>, RepositoryError>;

    /// Every stored entity, in store order
    async fn get_all(&self) -> Result<Vec<T>, RepositoryError>;

    /// Entities matching `predicate`; `None` returns every entity
    async fn get_by_filter(&self, predicate: Option<&Predicate<T::Field>>) -> Result<Vec<T>, RepositoryError>;

    /// Delete a persisted entity
    async fn remove(&self, entity: &T) -> OperationResult;
}
