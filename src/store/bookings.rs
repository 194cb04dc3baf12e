use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::db::KvStore;
use crate::errors::AppError;
use crate::models::{Booking, BookingDraft, BookingStatus, UpdateOutcome};

use super::{load_document, save_document};

pub const BOOKINGS_KEY: &str = "db_bookings_v1";

/// Bookings persisted as one JSON document, newest first.
///
/// Every mutation is read-modify-write over the whole document with no
/// version check, so two interleaved writers lose the earlier delta.
pub struct BookingStore {
    kv: Arc<dyn KvStore>,
}

impl BookingStore {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    pub fn list_bookings(&self) -> Result<Vec<Booking>, AppError> {
        Ok(load_document(self.kv.as_ref(), BOOKINGS_KEY)?.unwrap_or_default())
    }

    pub fn get_booking(&self, id: &str) -> Result<Option<Booking>, AppError> {
        Ok(self.list_bookings()?.into_iter().find(|b| b.id == id))
    }

    pub fn create_booking(&self, draft: BookingDraft) -> Result<Booking, AppError> {
        let mut bookings = self.list_bookings()?;

        let booking = draft.into_booking(new_booking_id(), Utc::now().timestamp_millis());
        bookings.insert(0, booking.clone());

        save_document(self.kv.as_ref(), BOOKINGS_KEY, &bookings)?;

        tracing::info!(
            booking_id = %booking.id,
            event_type = %booking.event_type,
            guests = booking.guests,
            "booking created"
        );
        Ok(booking)
    }

    pub fn update_booking_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> Result<UpdateOutcome, AppError> {
        let mut bookings = self.list_bookings()?;

        let outcome = match bookings.iter_mut().find(|b| b.id == id) {
            Some(booking) => {
                booking.status = status;
                UpdateOutcome::Updated
            }
            None => UpdateOutcome::NotFound,
        };

        save_document(self.kv.as_ref(), BOOKINGS_KEY, &bookings)?;

        match outcome {
            UpdateOutcome::Updated => {
                tracing::info!(booking_id = %id, status = status.as_str(), "booking status updated")
            }
            UpdateOutcome::NotFound => {
                tracing::warn!(booking_id = %id, "status update for unknown booking ignored")
            }
        }
        Ok(outcome)
    }
}

fn new_booking_id() -> String {
    Uuid::new_v4().simple().to_string().to_uppercase()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::db::MemoryKv;

    fn store() -> (BookingStore, Arc<MemoryKv>) {
        let kv = Arc::new(MemoryKv::new());
        (BookingStore::new(kv.clone()), kv)
    }

    fn draft(name: &str) -> BookingDraft {
        BookingDraft {
            full_name: name.to_string(),
            mobile: "9876543210".to_string(),
            event_type: "Wedding".to_string(),
            services: vec!["Catering".to_string()],
            date: "2025-12-10".to_string(),
            location: "Haldwani".to_string(),
            guests: 150,
            notes: String::new(),
        }
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        let (store, _) = store();
        assert!(store.list_bookings().unwrap().is_empty());
    }

    #[test]
    fn test_create_assigns_server_fields() {
        let (store, _) = store();
        let before = Utc::now().timestamp_millis();
        let booking = store.create_booking(draft("Asha Rawat")).unwrap();

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.id.len(), 32);
        assert!(booking.timestamp >= before);
        assert_eq!(booking.full_name, "Asha Rawat");
        assert_eq!(booking.guests, 150);

        let listed = store.list_bookings().unwrap();
        assert_eq!(listed, vec![booking]);
    }

    #[test]
    fn test_ids_are_pairwise_distinct() {
        let (store, _) = store();
        let ids: HashSet<String> = (0..50)
            .map(|i| store.create_booking(draft(&format!("guest {i}"))).unwrap().id)
            .collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_newest_first_and_prior_order_kept() {
        let (store, _) = store();
        let a = store.create_booking(draft("A")).unwrap();
        let b = store.create_booking(draft("B")).unwrap();
        let before = store.list_bookings().unwrap();
        assert_eq!(before, vec![b.clone(), a.clone()]);

        let c = store.create_booking(draft("C")).unwrap();
        let after = store.list_bookings().unwrap();
        assert_eq!(after[0], c);
        assert_eq!(&after[1..], &before[..]);
    }

    #[test]
    fn test_update_status_touches_only_status() {
        let (store, _) = store();
        let a = store.create_booking(draft("A")).unwrap();
        let b = store.create_booking(draft("B")).unwrap();

        let outcome = store
            .update_booking_status(&a.id, BookingStatus::Confirmed)
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Updated);

        let listed = store.list_bookings().unwrap();
        assert_eq!(listed[0], b);
        assert_eq!(
            listed[1],
            Booking {
                status: BookingStatus::Confirmed,
                ..a
            }
        );
    }

    #[test]
    fn test_update_unknown_id_leaves_collection_unchanged() {
        let (store, kv) = store();
        store.create_booking(draft("A")).unwrap();
        let raw_before = kv.get(BOOKINGS_KEY).unwrap();

        let outcome = store
            .update_booking_status("NOPE", BookingStatus::Confirmed)
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::NotFound);
        assert_eq!(kv.get(BOOKINGS_KEY).unwrap(), raw_before);
    }

    #[test]
    fn test_toggle_keeps_last_state() {
        let (store, _) = store();
        let a = store.create_booking(draft("A")).unwrap();
        store.update_booking_status(&a.id, BookingStatus::Confirmed).unwrap();
        store.update_booking_status(&a.id, BookingStatus::Pending).unwrap();
        assert_eq!(
            store.get_booking(&a.id).unwrap().unwrap().status,
            BookingStatus::Pending
        );
    }

    #[test]
    fn test_create_fails_when_persistence_fails() {
        let (store, kv) = store();
        let kept = store.create_booking(draft("A")).unwrap();
        kv.fail_writes(true);

        assert!(store.create_booking(draft("B")).is_err());
        kv.fail_writes(false);
        assert_eq!(store.list_bookings().unwrap(), vec![kept]);
    }

    #[test]
    fn test_corrupt_document_is_an_error() {
        let (store, kv) = store();
        kv.set(BOOKINGS_KEY, b"not json").unwrap();
        assert!(store.list_bookings().is_err());
    }
}
