//! In-memory [`GateCatalog`] implementation.

use async_trait::async_trait;
use chrono::Utc;
use gatewise_kernel::{
    CatalogError, CatalogResult, Gate, GateCatalog, GateId, GatePatch, NewGate, NewSociety,
    Society, SocietyId,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// [`GateCatalog`] backed by process memory.
///
/// Gates are kept in creation order so listings are deterministic. Suitable
/// for single-node deployments and tests; nothing survives a restart.
#[derive(Clone, Default)]
pub struct InMemoryGateCatalog {
    societies: Arc<RwLock<HashMap<SocietyId, Society>>>,
    gates: Arc<RwLock<Vec<Gate>>>,
}

impl InMemoryGateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn gate_count(&self) -> usize {
        self.gates.read().await.len()
    }
}

fn clean_name(name: &str) -> CatalogResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::InvalidInput("name must not be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

#[async_trait]
impl GateCatalog for InMemoryGateCatalog {
    async fn create_society(&self, society: NewSociety) -> CatalogResult<Society> {
        let record = Society {
            id: SocietyId::new(),
            name: clean_name(&society.name)?,
            area: society.area,
            boundary: society.boundary,
            created_at: Utc::now(),
        };
        self.societies.write().await.insert(record.id, record.clone());
        debug!(society_id = %record.id, name = %record.name, "society created");
        Ok(record)
    }

    async fn get_society(&self, id: SocietyId) -> CatalogResult<Society> {
        self.societies
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(CatalogError::SocietyNotFound(id))
    }

    async fn create_gate(&self, gate: NewGate) -> CatalogResult<Gate> {
        if !self.societies.read().await.contains_key(&gate.society_id) {
            return Err(CatalogError::SocietyNotFound(gate.society_id));
        }
        let record = Gate {
            id: GateId::new(),
            name: clean_name(&gate.name)?,
            location: gate.location,
            society_id: gate.society_id,
            is_active: gate.is_active,
            created_at: Utc::now(),
        };
        self.gates.write().await.push(record.clone());
        debug!(gate_id = %record.id, society_id = %record.society_id, "gate created");
        Ok(record)
    }

    async fn get_gate(&self, id: GateId) -> CatalogResult<Gate> {
        self.gates
            .read()
            .await
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or(CatalogError::GateNotFound(id))
    }

    async fn update_gate(&self, id: GateId, mut patch: GatePatch) -> CatalogResult<Gate> {
        if let Some(name) = patch.name.as_deref() {
            patch.name = Some(clean_name(name)?);
        }
        let mut gates = self.gates.write().await;
        let gate = gates
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(CatalogError::GateNotFound(id))?;
        patch.apply_to(gate);
        Ok(gate.clone())
    }

    async fn delete_gate(&self, id: GateId) -> CatalogResult<Gate> {
        let mut gates = self.gates.write().await;
        let pos = gates
            .iter()
            .position(|g| g.id == id)
            .ok_or(CatalogError::GateNotFound(id))?;
        Ok(gates.remove(pos))
    }

    async fn list_gates(&self, society_id: SocietyId) -> CatalogResult<Vec<Gate>> {
        if !self.societies.read().await.contains_key(&society_id) {
            return Err(CatalogError::SocietyNotFound(society_id));
        }
        Ok(self
            .gates
            .read()
            .await
            .iter()
            .filter(|g| g.society_id == society_id)
            .cloned()
            .collect())
    }

    async fn list_active_gates(&self, society_id: SocietyId) -> CatalogResult<Vec<Gate>> {
        Ok(self
            .gates
            .read()
            .await
            .iter()
            .filter(|g| g.society_id == society_id && g.is_active)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatewise_kernel::Coordinate;

    fn society() -> NewSociety {
        NewSociety {
            name: "Manyata Tech Park".into(),
            area: "Nagawara".into(),
            boundary: vec![vec![[77.61, 13.04], [77.63, 13.04], [77.63, 13.05], [77.61, 13.04]]],
        }
    }

    fn at(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    #[tokio::test]
    async fn gate_requires_existing_society() {
        let catalog = InMemoryGateCatalog::new();
        let orphan = NewGate::new("Gate 1", at(13.0, 77.6), SocietyId::new());
        assert!(matches!(
            catalog.create_gate(orphan).await,
            Err(CatalogError::SocietyNotFound(_))
        ));
    }

    #[tokio::test]
    async fn names_are_trimmed_and_required() {
        let catalog = InMemoryGateCatalog::new();
        let s = catalog.create_society(society()).await.unwrap();
        let g = catalog
            .create_gate(NewGate::new("  Gate 5  ", at(13.0, 77.6), s.id))
            .await
            .unwrap();
        assert_eq!(g.name, "Gate 5");
        assert!(g.is_active);

        let blank = NewGate::new("   ", at(13.0, 77.6), s.id);
        assert!(matches!(
            catalog.create_gate(blank).await,
            Err(CatalogError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn active_listing_skips_inactive_and_keeps_order() {
        let catalog = InMemoryGateCatalog::new();
        let s = catalog.create_society(society()).await.unwrap();
        let other = catalog.create_society(society()).await.unwrap();

        let g1 = catalog.create_gate(NewGate::new("G1", at(13.0, 77.6), s.id)).await.unwrap();
        let g2 = catalog
            .create_gate(NewGate::new("G2", at(13.1, 77.6), s.id).with_active(false))
            .await
            .unwrap();
        let g3 = catalog.create_gate(NewGate::new("G3", at(13.2, 77.6), s.id)).await.unwrap();
        catalog.create_gate(NewGate::new("X", at(13.3, 77.6), other.id)).await.unwrap();

        let active: Vec<GateId> = catalog
            .list_active_gates(s.id)
            .await
            .unwrap()
            .into_iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(active, vec![g1.id, g3.id]);

        let all = catalog.list_gates(s.id).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[1].id, g2.id);

        assert!(catalog.list_active_gates(SocietyId::new()).await.unwrap().is_empty());
        assert!(catalog.list_gates(SocietyId::new()).await.is_err());
    }

    #[tokio::test]
    async fn update_and_delete() {
        let catalog = InMemoryGateCatalog::new();
        let s = catalog.create_society(society()).await.unwrap();
        let g = catalog.create_gate(NewGate::new("G1", at(13.0, 77.6), s.id)).await.unwrap();

        let updated = catalog
            .update_gate(
                g.id,
                GatePatch {
                    name: Some("North Gate".into()),
                    location: Some(at(13.05, 77.62)),
                    is_active: Some(false),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "North Gate");
        assert_eq!(updated.location, at(13.05, 77.62));
        assert!(!updated.is_active);
        assert_eq!(catalog.get_gate(g.id).await.unwrap(), updated);

        let removed = catalog.delete_gate(g.id).await.unwrap();
        assert_eq!(removed.id, g.id);
        assert_eq!(catalog.gate_count().await, 0);
        assert!(matches!(
            catalog.delete_gate(g.id).await,
            Err(CatalogError::GateNotFound(_))
        ));
    }
}
