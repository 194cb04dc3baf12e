use std::sync::Arc;

use crate::db::KvStore;
use crate::errors::AppError;
use crate::models::{ServiceCategory, ServiceItem, UpdateOutcome};

use super::seed::default_catalog;
use super::{load_document, save_document};

pub const SERVICES_KEY: &str = "db_services_v1";

pub struct ServiceCatalogStore {
    kv: Arc<dyn KvStore>,
}

impl ServiceCatalogStore {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    /// Writes the default catalog if none has been stored yet.
    pub fn ensure_seeded(&self) -> Result<(), AppError> {
        if self.kv.get(SERVICES_KEY)?.is_some() {
            return Ok(());
        }
        let catalog = default_catalog();
        save_document(self.kv.as_ref(), SERVICES_KEY, &catalog)?;
        tracing::info!(items = catalog.len(), "seeded service catalog");
        Ok(())
    }

    pub fn list_services(&self) -> Result<Vec<ServiceItem>, AppError> {
        Ok(load_document(self.kv.as_ref(), SERVICES_KEY)?.unwrap_or_else(default_catalog))
    }

    pub fn list_by_category(&self, category: ServiceCategory) -> Result<Vec<ServiceItem>, AppError> {
        Ok(self
            .list_services()?
            .into_iter()
            .filter(|s| s.category == category)
            .collect())
    }

    /// Replaces the item with the same id in place. Unknown ids change nothing.
    pub fn update_service(&self, item: ServiceItem) -> Result<UpdateOutcome, AppError> {
        let mut services = self.list_services()?;

        let Some(slot) = services.iter_mut().find(|s| s.id == item.id) else {
            tracing::warn!(service_id = %item.id, "update for unknown service ignored");
            return Ok(UpdateOutcome::NotFound);
        };

        if slot.category != item.category {
            tracing::warn!(
                service_id = %item.id,
                from = slot.category.as_str(),
                to = item.category.as_str(),
                "service category changed"
            );
        }
        let id = item.id.clone();
        *slot = item;

        save_document(self.kv.as_ref(), SERVICES_KEY, &services)?;
        tracing::info!(service_id = %id, "service updated");
        Ok(UpdateOutcome::Updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryKv;

    fn store() -> (ServiceCatalogStore, Arc<MemoryKv>) {
        let kv = Arc::new(MemoryKv::new());
        (ServiceCatalogStore::new(kv.clone()), kv)
    }

    #[test]
    fn test_list_falls_back_to_default_when_unseeded() {
        let (store, kv) = store();
        assert_eq!(store.list_services().unwrap(), default_catalog());
        assert!(kv.get(SERVICES_KEY).unwrap().is_none());
    }

    #[test]
    fn test_ensure_seeded_is_idempotent() {
        let (store, kv) = store();
        store.ensure_seeded().unwrap();
        let once = kv.get(SERVICES_KEY).unwrap();
        store.ensure_seeded().unwrap();
        assert_eq!(kv.get(SERVICES_KEY).unwrap(), once);
        assert_eq!(store.list_services().unwrap(), default_catalog());
    }

    #[test]
    fn test_ensure_seeded_keeps_existing_catalog() {
        let (store, _) = store();
        store.ensure_seeded().unwrap();
        let mut edited = store.list_services().unwrap()[0].clone();
        edited.title = "Edited".to_string();
        store.update_service(edited.clone()).unwrap();

        store.ensure_seeded().unwrap();
        assert_eq!(store.list_services().unwrap()[0], edited);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let (store, _) = store();
        store.ensure_seeded().unwrap();
        let before = store.list_services().unwrap();

        let mut edited = before[2].clone();
        edited.description = "New stage look".to_string();
        edited.images = vec![];
        assert_eq!(store.update_service(edited.clone()).unwrap(), UpdateOutcome::Updated);

        let after = store.list_services().unwrap();
        assert_eq!(after.len(), before.len());
        assert_eq!(after[2], edited);
        for i in [0, 1, 3, 4] {
            assert_eq!(after[i], before[i]);
        }
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let (store, _) = store();
        store.ensure_seeded().unwrap();
        let before = store.list_services().unwrap();

        let mut ghost = before[0].clone();
        ghost.id = "cat-99".to_string();
        assert_eq!(store.update_service(ghost).unwrap(), UpdateOutcome::NotFound);
        assert_eq!(store.list_services().unwrap(), before);
    }

    #[test]
    fn test_list_by_category() {
        let (store, _) = store();
        store.ensure_seeded().unwrap();
        let catering = store.list_by_category(ServiceCategory::Catering).unwrap();
        let decoration = store.list_by_category(ServiceCategory::Decoration).unwrap();
        assert_eq!(catering.len(), 2);
        assert_eq!(decoration.len(), 3);
    }
}
