//! Gate storage contract.
//!
//! The [`GateCatalog`] trait is the only way the rest of the system reaches
//! gate and society records.  The in-memory implementation lives in
//! `gatewise-foundation`; a database-backed one would be a separate crate.

use crate::gate::{Gate, GateId, GatePatch, NewGate, NewSociety, Society, SocietyId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("society '{0}' not found")]
    SocietyNotFound(SocietyId),

    #[error("gate '{0}' not found")]
    GateNotFound(GateId),

    /// A record failed a structural check (e.g. empty name).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Read/write access to gates and the societies owning them.
#[async_trait]
pub trait GateCatalog: Send + Sync {
    async fn create_society(&self, society: NewSociety) -> CatalogResult<Society>;

    async fn get_society(&self, id: SocietyId) -> CatalogResult<Society>;

    /// Create a gate. Fails with [`CatalogError::SocietyNotFound`] when the
    /// owning society does not exist.
    async fn create_gate(&self, gate: NewGate) -> CatalogResult<Gate>;

    async fn get_gate(&self, id: GateId) -> CatalogResult<Gate>;

    async fn update_gate(&self, id: GateId, patch: GatePatch) -> CatalogResult<Gate>;

    /// Remove a gate and return the removed record.
    async fn delete_gate(&self, id: GateId) -> CatalogResult<Gate>;

    /// Every gate of an existing society, active or not, in creation order.
    async fn list_gates(&self, society_id: SocietyId) -> CatalogResult<Vec<Gate>>;

    /// Only the `is_active` gates of a society, in creation order.
    ///
    /// An unknown society yields an empty list; callers must handle the empty
    /// case themselves.
    async fn list_active_gates(&self, society_id: SocietyId) -> CatalogResult<Vec<Gate>>;
}
