pub mod bookings;
pub mod seed;
pub mod services;

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::db::KvStore;
use crate::errors::AppError;
use crate::models::{
    Booking, BookingDraft, BookingStatus, ServiceCategory, ServiceItem, UpdateOutcome,
};

pub use bookings::BookingStore;
pub use seed::default_catalog;
pub use services::ServiceCatalogStore;

fn load_document<T: DeserializeOwned>(kv: &dyn KvStore, key: &str) -> Result<Option<T>, AppError> {
    match kv.get(key)? {
        Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        None => Ok(None),
    }
}

fn save_document<T: Serialize + ?Sized>(kv: &dyn KvStore, key: &str, value: &T) -> Result<(), AppError> {
    let bytes = serde_json::to_vec(value)?;
    kv.set(key, &bytes)
}

/// Async entry point to both stores, shared by handle across request handlers.
///
/// `latency` delays every call before it touches storage; zero disables it.
pub struct DataAccess {
    bookings: BookingStore,
    services: ServiceCatalogStore,
    latency: Duration,
}

impl DataAccess {
    /// Opens both stores over `kv` and seeds the service catalog if needed.
    pub fn new(kv: Arc<dyn KvStore>, latency: Duration) -> Result<Self, AppError> {
        let services = ServiceCatalogStore::new(kv.clone());
        services.ensure_seeded()?;
        Ok(Self {
            bookings: BookingStore::new(kv),
            services,
            latency,
        })
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    pub async fn list_bookings(&self) -> Result<Vec<Booking>, AppError> {
        self.simulate_latency().await;
        self.bookings.list_bookings()
    }

    pub async fn get_booking(&self, id: &str) -> Result<Option<Booking>, AppError> {
        self.simulate_latency().await;
        self.bookings.get_booking(id)
    }

    pub async fn create_booking(&self, draft: BookingDraft) -> Result<Booking, AppError> {
        self.simulate_latency().await;
        self.bookings.create_booking(draft)
    }

    pub async fn update_booking_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> Result<UpdateOutcome, AppError> {
        self.simulate_latency().await;
        self.bookings.update_booking_status(id, status)
    }

    pub async fn list_services(&self) -> Result<Vec<ServiceItem>, AppError> {
        self.simulate_latency().await;
        self.services.list_services()
    }

    pub async fn list_services_by_category(
        &self,
        category: ServiceCategory,
    ) -> Result<Vec<ServiceItem>, AppError> {
        self.simulate_latency().await;
        self.services.list_by_category(category)
    }

    pub async fn update_service(&self, item: ServiceItem) -> Result<UpdateOutcome, AppError> {
        self.simulate_latency().await;
        self.services.update_service(item)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::db::{init_db, MemoryKv, SqliteKv};

    #[tokio::test]
    async fn test_new_seeds_catalog() {
        let kv = Arc::new(MemoryKv::new());
        let data = DataAccess::new(kv.clone(), Duration::ZERO).unwrap();
        assert!(kv.get(services::SERVICES_KEY).unwrap().is_some());
        assert_eq!(data.list_services().await.unwrap(), default_catalog());
    }

    #[tokio::test]
    async fn test_round_trip_through_sqlite() {
        let conn = Arc::new(Mutex::new(init_db(":memory:").unwrap()));
        let data = DataAccess::new(Arc::new(SqliteKv::new(conn.clone())), Duration::ZERO).unwrap();

        let created = data
            .create_booking(BookingDraft {
                full_name: "Meena Joshi".to_string(),
                services: vec!["Decoration".to_string(), "Decoration".to_string()],
                guests: 80,
                notes: "मेहमान सुबह आएंगे".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let mut edited = data.list_services().await.unwrap()[1].clone();
        edited.menu = Some(vec!["Aloo ke Gutke".to_string()]);
        data.update_service(edited.clone()).await.unwrap();

        // A second facade over the same connection sees exactly what was written.
        let reopened = DataAccess::new(Arc::new(SqliteKv::new(conn)), Duration::ZERO).unwrap();
        assert_eq!(reopened.list_bookings().await.unwrap(), vec![created]);
        assert_eq!(reopened.list_services().await.unwrap()[1], edited);
    }

    #[tokio::test]
    async fn test_latency_is_applied() {
        let data = DataAccess::new(Arc::new(MemoryKv::new()), Duration::from_millis(30)).unwrap();
        let start = tokio::time::Instant::now();
        data.list_bookings().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
