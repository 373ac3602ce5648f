//! Booking lifecycle: creating bookings, moving them to a terminal state, and
//! listing them per user.
//!
//! Names and prices always come from the catalog. Whatever the client quoted
//! is only compared against the authoritative values and logged on mismatch.

use std::sync::{Mutex, MutexGuard};

use jiff::{Timestamp, civil::Date};
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::cost::{self, CostError};
use crate::model::{
    Availability, Booking, BookingKind, BookingStatus, BookingSummary, DurationType, Labour,
    PastBookingSummary, PaymentStatus,
};
use crate::storage::{BookingRepository, StorageError, UserRepository};

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("{0}")]
    Validation(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("{name} is not available from {start} to {end}")]
    Unavailable { name: String, start: Date, end: Date },

    #[error("booking {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: BookingStatus,
        to: BookingStatus,
    },

    #[error(transparent)]
    Cost(#[from] CostError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type Result<T> = core::result::Result<T, BookingError>;

/// A request to rent equipment.
#[derive(Debug, Clone, Default)]
pub struct EquipmentBookingRequest {
    pub user_id: String,
    pub equipment_id: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub duration_type: DurationType,
    /// Equipment name as shown to the client. Never stored.
    pub quoted_name: Option<String>,
    /// Total as shown to the client. Never stored.
    pub quoted_total: Option<u64>,
}

/// A request to hire a labourer.
#[derive(Debug, Clone, Default)]
pub struct LabourBookingRequest {
    pub user_id: String,
    pub labour_id: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    /// Labourer name as shown to the client. Never stored.
    pub quoted_name: Option<String>,
    /// Day count as shown to the client. Never stored.
    pub quoted_days: Option<u64>,
    /// Total as shown to the client. Never stored.
    pub quoted_total: Option<u64>,
}

/// Dashboard figures derived from the catalog and every stored booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStats {
    pub total_equipment: usize,
    pub total_labour: usize,
    pub total_bookings: usize,
    pub active_bookings: usize,
    pub past_bookings: usize,
    /// Sum of totals over every booking that was not cancelled.
    pub revenue: u64,
}

/// Creates and transitions bookings.
///
/// One manager is built at startup and shared by every caller; its lock makes
/// each read-check-append sequence atomic within the process.
pub struct BookingManager<'a, R> {
    store: &'a R,
    catalog: &'a Catalog,
    lock: Mutex<()>,
}

impl<'a, R: BookingRepository + UserRepository> BookingManager<'a, R> {
    pub fn new(store: &'a R, catalog: &'a Catalog) -> Self {
        Self {
            store,
            catalog,
            lock: Mutex::new(()),
        }
    }

    pub fn create_equipment_booking(&self, request: &EquipmentBookingRequest) -> Result<Booking> {
        let (start, end) = require_fields(
            &request.user_id,
            &request.equipment_id,
            request.start_date,
            request.end_date,
        )?;

        let _guard = self.lock()?;
        self.require_user(&request.user_id)?;
        let equipment = self
            .catalog
            .find_equipment(&request.equipment_id)
            .ok_or_else(|| not_found("equipment", &request.equipment_id))?;

        let total = cost::calculate_equipment_cost(
            Some(start),
            Some(end),
            request.duration_type,
            &equipment.prices,
        )?;
        warn_on_mismatch("equipmentName", request.quoted_name.as_ref(), &equipment.name);
        warn_on_mismatch("totalAmount", request.quoted_total.as_ref(), &total);

        let booking = Booking {
            id: format!("eq_{}", Uuid::new_v4().simple()),
            user_id: request.user_id.clone(),
            start_date: start,
            end_date: end,
            total_amount: total,
            status: BookingStatus::Confirmed,
            created_at: Timestamp::now(),
            kind: BookingKind::Equipment {
                equipment_id: equipment.id.clone(),
                equipment_name: equipment.name.clone(),
                duration_type: request.duration_type,
            },
        };
        self.store.append_booking(&booking)?;
        tracing::info!(
            booking_id = %booking.id,
            user_id = %booking.user_id,
            equipment_id = %equipment.id,
            total,
            "equipment booked"
        );
        Ok(booking)
    }

    pub fn create_labour_booking(&self, request: &LabourBookingRequest) -> Result<Booking> {
        let (start, end) = require_fields(
            &request.user_id,
            &request.labour_id,
            request.start_date,
            request.end_date,
        )?;

        let _guard = self.lock()?;
        self.require_user(&request.user_id)?;
        let labour = self
            .catalog
            .find_labour(&request.labour_id)
            .ok_or_else(|| not_found("labourer", &request.labour_id))?;

        let days = cost::rental_days(start, end)?;
        let total = cost::calculate_labour_cost(Some(start), Some(end), labour.daily_charge)?;
        if self.is_labour_taken(labour, start, end) {
            return Err(BookingError::Unavailable {
                name: labour.name.clone(),
                start,
                end,
            });
        }
        warn_on_mismatch("labourName", request.quoted_name.as_ref(), &labour.name);
        warn_on_mismatch("daysRequired", request.quoted_days.as_ref(), &days);
        warn_on_mismatch("totalAmount", request.quoted_total.as_ref(), &total);

        let booking = Booking {
            id: format!("labour_{}", Uuid::new_v4().simple()),
            user_id: request.user_id.clone(),
            start_date: start,
            end_date: end,
            total_amount: total,
            status: BookingStatus::Confirmed,
            created_at: Timestamp::now(),
            kind: BookingKind::Labour {
                labour_id: labour.id.clone(),
                labour_name: labour.name.clone(),
                days_required: days,
            },
        };
        self.store.append_booking(&booking)?;
        tracing::info!(
            booking_id = %booking.id,
            user_id = %booking.user_id,
            labour_id = %labour.id,
            total,
            "labour booked"
        );
        Ok(booking)
    }

    /// Marks an active booking as completed.
    pub fn complete_booking(&self, id: &str) -> Result<Booking> {
        self.transition(id, BookingStatus::Completed)
    }

    /// Marks an active booking as cancelled.
    pub fn cancel_booking(&self, id: &str) -> Result<Booking> {
        self.transition(id, BookingStatus::Cancelled)
    }

    /// The user's pending and confirmed bookings, in booking order.
    pub fn get_active_bookings(&self, user_id: &str) -> Vec<BookingSummary> {
        let bookings = self.store.active_bookings_by_user(user_id);
        tracing::debug!(user_id, count = bookings.len(), "active bookings");
        bookings.iter().map(Booking::summary).collect()
    }

    /// The user's completed and cancelled bookings, in booking order.
    pub fn get_past_bookings(&self, user_id: &str) -> Vec<PastBookingSummary> {
        let bookings = self.store.past_bookings_by_user(user_id);
        tracing::debug!(user_id, count = bookings.len(), "past bookings");
        bookings
            .iter()
            .map(|b| PastBookingSummary {
                summary: b.summary(),
                payment_status: PaymentStatus::Paid,
            })
            .collect()
    }

    /// Every labourer with availability as of `on`: booked when the catalog
    /// says so or when an active booking covers that day.
    pub fn labour_availability_on(&self, on: Date) -> Vec<Labour> {
        let bookings = self.store.all_bookings();
        self.catalog
            .list_labour()
            .iter()
            .map(|l| {
                let mut labour = l.clone();
                if bookings.iter().any(|b| b.occupies_labour(&l.id, on, on)) {
                    labour.availability = Availability::Booked;
                }
                labour
            })
            .collect()
    }

    pub fn stats(&self) -> BookingStats {
        let bookings = self.store.all_bookings();
        let active = bookings.iter().filter(|b| b.status.is_active()).count();
        let revenue = bookings
            .iter()
            .filter(|b| b.status != BookingStatus::Cancelled)
            .fold(0u64, |sum, b| sum.saturating_add(b.total_amount));
        BookingStats {
            total_equipment: self.catalog.list_equipment().len(),
            total_labour: self.catalog.list_labour().len(),
            total_bookings: bookings.len(),
            active_bookings: active,
            past_bookings: bookings.len() - active,
            revenue,
        }
    }

    fn transition(&self, id: &str, to: BookingStatus) -> Result<Booking> {
        let _guard = self.lock()?;
        let mut booking = self
            .store
            .find_booking(id)
            .ok_or_else(|| not_found("booking", id))?;
        if !booking.status.can_transition_to(to) {
            return Err(BookingError::InvalidTransition {
                id: booking.id,
                from: booking.status,
                to,
            });
        }
        let from = booking.status;
        booking.status = to;
        self.store.replace_booking(&booking)?;
        tracing::info!(booking_id = %booking.id, %from, %to, "booking transitioned");
        Ok(booking)
    }

    fn is_labour_taken(&self, labour: &Labour, start: Date, end: Date) -> bool {
        labour.availability == Availability::Booked
            || self
                .store
                .all_bookings()
                .iter()
                .any(|b| b.occupies_labour(&labour.id, start, end))
    }

    fn require_user(&self, user_id: &str) -> Result<()> {
        self.store
            .find_user_by_id(user_id)
            .map(|_| ())
            .ok_or_else(|| not_found("user", user_id))
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| BookingError::Storage(StorageError::LockPoisoned))
    }
}

/// Rejects a request missing the user, the item, or either date.
fn require_fields(
    user_id: &str,
    item_id: &str,
    start: Option<Date>,
    end: Option<Date>,
) -> Result<(Date, Date)> {
    match (user_id.trim().is_empty(), item_id.trim().is_empty(), start, end) {
        (false, false, Some(start), Some(end)) => Ok((start, end)),
        _ => Err(BookingError::Validation(
            "missing required fields: user, item, start date, and end date are required"
                .to_string(),
        )),
    }
}

fn not_found(kind: &'static str, id: &str) -> BookingError {
    BookingError::NotFound {
        kind,
        id: id.to_string(),
    }
}

fn warn_on_mismatch<T>(field: &str, quoted: Option<&T>, actual: &T)
where
    T: PartialEq + std::fmt::Debug + ?Sized,
{
    if let Some(quoted) = quoted
        && quoted != actual
    {
        tracing::warn!(field, ?quoted, ?actual, "ignoring client-supplied value");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    use crate::model::UserCredentials;
    use crate::storage::MemoryStore;

    fn store_with_user(user_id: &str) -> MemoryStore {
        let store = MemoryStore::new();
        store
            .append_user(&UserCredentials {
                id: user_id.into(),
                name: "Asha Rao".into(),
                phone: "9123456789".into(),
                email: "asha@example.com".into(),
                username: "AshaRao6789".into(),
                password: "aB3dE5gH".into(),
                created_at: Timestamp::now(),
            })
            .unwrap();
        store
    }

    fn equipment_request(start: Date, end: Date) -> EquipmentBookingRequest {
        EquipmentBookingRequest {
            user_id: "u1".into(),
            equipment_id: "eq1".into(),
            start_date: Some(start),
            end_date: Some(end),
            duration_type: DurationType::Daily,
            ..Default::default()
        }
    }

    fn labour_request(labour_id: &str, start: Date, end: Date) -> LabourBookingRequest {
        LabourBookingRequest {
            user_id: "u1".into(),
            labour_id: labour_id.into(),
            start_date: Some(start),
            end_date: Some(end),
            ..Default::default()
        }
    }

    #[test]
    fn equipment_booking_is_confirmed_and_priced_from_catalog() {
        let store = store_with_user("u1");
        let catalog = Catalog::default();
        let manager = BookingManager::new(&store, &catalog);

        let mut request = equipment_request(date(2025, 1, 1), date(2025, 1, 3));
        request.quoted_total = Some(1);
        request.quoted_name = Some("Something Else".into());
        let booking = manager.create_equipment_booking(&request).unwrap();

        assert!(booking.id.starts_with("eq_"));
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.total_amount, 1500);
        assert_eq!(booking.item_name(), "Mahindra 575 DI Tractor");
        assert_eq!(store.all_bookings(), [booking]);
    }

    #[test]
    fn weekly_equipment_booking_uses_weekly_tier() {
        let store = store_with_user("u1");
        let catalog = Catalog::default();
        let manager = BookingManager::new(&store, &catalog);

        let mut request = equipment_request(date(2025, 1, 1), date(2025, 1, 10));
        request.duration_type = DurationType::Weekly;
        let booking = manager.create_equipment_booking(&request).unwrap();

        assert_eq!(booking.total_amount, 6000);
    }

    #[test]
    fn new_booking_is_active_not_past() {
        let store = store_with_user("u1");
        let catalog = Catalog::default();
        let manager = BookingManager::new(&store, &catalog);

        let booking = manager
            .create_equipment_booking(&equipment_request(date(2025, 1, 1), date(2025, 1, 3)))
            .unwrap();

        let active = manager.get_active_bookings("u1");
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, booking.id);
        let json = serde_json::to_value(&active[0]).unwrap();
        assert_eq!(json["type"], "Equipment");
        assert_eq!(json["name"], "Mahindra 575 DI Tractor");
        assert!(manager.get_past_bookings("u1").is_empty());
    }

    #[test]
    fn missing_fields_are_validation_errors() {
        let store = store_with_user("u1");
        let catalog = Catalog::default();
        let manager = BookingManager::new(&store, &catalog);

        let mut no_start = equipment_request(date(2025, 1, 1), date(2025, 1, 3));
        no_start.start_date = None;
        let mut no_user = equipment_request(date(2025, 1, 1), date(2025, 1, 3));
        no_user.user_id = String::new();
        let mut no_item = equipment_request(date(2025, 1, 1), date(2025, 1, 3));
        no_item.equipment_id = " ".into();

        for request in [no_start, no_user, no_item] {
            let err = manager.create_equipment_booking(&request).unwrap_err();
            assert!(matches!(err, BookingError::Validation(_)), "{request:?}");
        }
        assert!(store.all_bookings().is_empty());
    }

    #[test]
    fn unknown_catalog_id_is_not_found() {
        let store = store_with_user("u1");
        let catalog = Catalog::default();
        let manager = BookingManager::new(&store, &catalog);

        let mut request = equipment_request(date(2025, 1, 1), date(2025, 1, 3));
        request.equipment_id = "eq99".into();
        let err = manager.create_equipment_booking(&request).unwrap_err();
        assert!(matches!(err, BookingError::NotFound { kind: "equipment", .. }));

        let err = manager
            .create_labour_booking(&labour_request("l99", date(2025, 1, 1), date(2025, 1, 3)))
            .unwrap_err();
        assert!(matches!(err, BookingError::NotFound { kind: "labourer", .. }));
    }

    #[test]
    fn unknown_user_is_not_found() {
        let store = MemoryStore::new();
        let catalog = Catalog::default();
        let manager = BookingManager::new(&store, &catalog);

        let err = manager
            .create_equipment_booking(&equipment_request(date(2025, 1, 1), date(2025, 1, 3)))
            .unwrap_err();
        assert!(matches!(err, BookingError::NotFound { kind: "user", .. }));
    }

    #[test]
    fn reversed_dates_are_rejected() {
        let store = store_with_user("u1");
        let catalog = Catalog::default();
        let manager = BookingManager::new(&store, &catalog);

        let err = manager
            .create_equipment_booking(&equipment_request(date(2025, 1, 3), date(2025, 1, 1)))
            .unwrap_err();
        assert!(matches!(
            err,
            BookingError::Cost(CostError::ReversedRange { .. })
        ));
    }

    #[test]
    fn labour_booking_counts_days_and_charges_daily() {
        let store = store_with_user("u1");
        let catalog = Catalog::default();
        let manager = BookingManager::new(&store, &catalog);

        let mut request = labour_request("l1", date(2025, 3, 10), date(2025, 3, 12));
        request.quoted_days = Some(99);
        let booking = manager.create_labour_booking(&request).unwrap();

        assert!(booking.id.starts_with("labour_"));
        assert_eq!(booking.total_amount, 1800);
        assert!(matches!(
            booking.kind,
            BookingKind::Labour {
                days_required: 3,
                ..
            }
        ));
    }

    #[test]
    fn overlapping_labour_booking_is_unavailable() {
        let store = store_with_user("u1");
        let catalog = Catalog::default();
        let manager = BookingManager::new(&store, &catalog);

        manager
            .create_labour_booking(&labour_request("l1", date(2025, 3, 10), date(2025, 3, 12)))
            .unwrap();
        let err = manager
            .create_labour_booking(&labour_request("l1", date(2025, 3, 12), date(2025, 3, 15)))
            .unwrap_err();
        assert!(matches!(err, BookingError::Unavailable { .. }));

        // Adjacent range and another labourer are fine.
        manager
            .create_labour_booking(&labour_request("l1", date(2025, 3, 13), date(2025, 3, 15)))
            .unwrap();
        manager
            .create_labour_booking(&labour_request("l2", date(2025, 3, 10), date(2025, 3, 12)))
            .unwrap();
    }

    #[test]
    fn cancelled_booking_frees_labourer() {
        let store = store_with_user("u1");
        let catalog = Catalog::default();
        let manager = BookingManager::new(&store, &catalog);

        let first = manager
            .create_labour_booking(&labour_request("l1", date(2025, 3, 10), date(2025, 3, 12)))
            .unwrap();
        manager.cancel_booking(&first.id).unwrap();

        manager
            .create_labour_booking(&labour_request("l1", date(2025, 3, 10), date(2025, 3, 12)))
            .unwrap();
    }

    #[test]
    fn catalog_booked_labourer_cannot_be_hired() {
        let store = store_with_user("u1");
        let catalog = Catalog::default();
        let manager = BookingManager::new(&store, &catalog);

        let err = manager
            .create_labour_booking(&labour_request("l3", date(2025, 3, 10), date(2025, 3, 10)))
            .unwrap_err();
        assert!(matches!(err, BookingError::Unavailable { .. }));
    }

    #[test]
    fn availability_reflects_active_bookings() {
        let store = store_with_user("u1");
        let catalog = Catalog::default();
        let manager = BookingManager::new(&store, &catalog);

        manager
            .create_labour_booking(&labour_request("l2", date(2025, 3, 10), date(2025, 3, 12)))
            .unwrap();

        let availability = |on: Date, id: &str| {
            manager
                .labour_availability_on(on)
                .into_iter()
                .find(|l| l.id == id)
                .unwrap()
                .availability
        };
        assert_eq!(availability(date(2025, 3, 11), "l2"), Availability::Booked);
        assert_eq!(availability(date(2025, 3, 13), "l2"), Availability::Available);
        assert_eq!(availability(date(2025, 3, 11), "l1"), Availability::Available);
        assert_eq!(availability(date(2025, 3, 13), "l3"), Availability::Booked);
    }

    #[test]
    fn complete_moves_booking_to_past_with_paid_status() {
        let store = store_with_user("u1");
        let catalog = Catalog::default();
        let manager = BookingManager::new(&store, &catalog);
        let booking = manager
            .create_equipment_booking(&equipment_request(date(2025, 1, 1), date(2025, 1, 3)))
            .unwrap();

        let completed = manager.complete_booking(&booking.id).unwrap();

        assert_eq!(completed.status, BookingStatus::Completed);
        assert_eq!(completed.total_amount, booking.total_amount);
        assert!(manager.get_active_bookings("u1").is_empty());
        let past = manager.get_past_bookings("u1");
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].payment_status, PaymentStatus::Paid);
        assert_eq!(past[0].summary.status, BookingStatus::Completed);
    }

    #[test]
    fn terminal_bookings_reject_further_transitions() {
        let store = store_with_user("u1");
        let catalog = Catalog::default();
        let manager = BookingManager::new(&store, &catalog);
        let booking = manager
            .create_equipment_booking(&equipment_request(date(2025, 1, 1), date(2025, 1, 3)))
            .unwrap();
        manager.cancel_booking(&booking.id).unwrap();

        let err = manager.complete_booking(&booking.id).unwrap_err();
        assert!(matches!(
            err,
            BookingError::InvalidTransition {
                from: BookingStatus::Cancelled,
                to: BookingStatus::Completed,
                ..
            }
        ));
        let err = manager.cancel_booking(&booking.id).unwrap_err();
        assert!(matches!(err, BookingError::InvalidTransition { .. }));
    }

    #[test]
    fn transition_of_unknown_booking_is_not_found() {
        let store = store_with_user("u1");
        let catalog = Catalog::default();
        let manager = BookingManager::new(&store, &catalog);

        let err = manager.cancel_booking("eq_missing").unwrap_err();
        assert!(matches!(err, BookingError::NotFound { kind: "booking", .. }));
    }

    #[test]
    fn active_and_past_partition_every_booking() {
        let store = store_with_user("u1");
        let catalog = Catalog::default();
        let manager = BookingManager::new(&store, &catalog);

        let mut ids = Vec::new();
        for day in 1..=6 {
            let booking = manager
                .create_equipment_booking(&equipment_request(date(2025, 1, day), date(2025, 1, day)))
                .unwrap();
            ids.push(booking.id);
        }
        manager.complete_booking(&ids[1]).unwrap();
        manager.cancel_booking(&ids[3]).unwrap();
        let mut pending = store.find_booking(&ids[5]).unwrap();
        pending.status = BookingStatus::Pending;
        store.replace_booking(&pending).unwrap();

        let active: Vec<String> = manager
            .get_active_bookings("u1")
            .into_iter()
            .map(|s| s.id)
            .collect();
        let past: Vec<String> = manager
            .get_past_bookings("u1")
            .into_iter()
            .map(|s| s.summary.id)
            .collect();

        assert_eq!(
            active,
            [
                ids[0].clone(),
                ids[2].clone(),
                ids[4].clone(),
                ids[5].clone()
            ]
        );
        assert_eq!(past, [ids[1].clone(), ids[3].clone()]);
        assert!(active.iter().all(|id| !past.contains(id)));
        assert_eq!(active.len() + past.len(), ids.len());
    }

    #[test]
    fn repeated_queries_are_equal() {
        let store = store_with_user("u1");
        let catalog = Catalog::default();
        let manager = BookingManager::new(&store, &catalog);
        manager
            .create_equipment_booking(&equipment_request(date(2025, 1, 1), date(2025, 1, 3)))
            .unwrap();
        manager
            .create_labour_booking(&labour_request("l1", date(2025, 1, 1), date(2025, 1, 3)))
            .unwrap();

        assert_eq!(manager.get_active_bookings("u1"), manager.get_active_bookings("u1"));
    }

    #[test]
    fn bookings_are_scoped_to_their_user() {
        let store = store_with_user("u1");
        let catalog = Catalog::default();
        let manager = BookingManager::new(&store, &catalog);
        manager
            .create_equipment_booking(&equipment_request(date(2025, 1, 1), date(2025, 1, 3)))
            .unwrap();

        assert!(manager.get_active_bookings("u2").is_empty());
    }

    #[test]
    fn stats_count_buckets_and_exclude_cancelled_revenue() {
        let store = store_with_user("u1");
        let catalog = Catalog::default();
        let manager = BookingManager::new(&store, &catalog);
        let a = manager
            .create_equipment_booking(&equipment_request(date(2025, 1, 1), date(2025, 1, 3)))
            .unwrap();
        let b = manager
            .create_labour_booking(&labour_request("l1", date(2025, 1, 1), date(2025, 1, 3)))
            .unwrap();
        manager
            .create_equipment_booking(&equipment_request(date(2025, 2, 1), date(2025, 2, 1)))
            .unwrap();
        manager.complete_booking(&a.id).unwrap();
        manager.cancel_booking(&b.id).unwrap();

        let stats = manager.stats();
        assert_eq!(
            stats,
            BookingStats {
                total_equipment: 6,
                total_labour: 6,
                total_bookings: 3,
                active_bookings: 1,
                past_bookings: 2,
                revenue: 1500 + 500,
            }
        );
    }

    #[test]
    fn register_then_rent_tractor_end_to_end() {
        use tempfile::TempDir;

        use crate::credentials::{AdminCredentials, CredentialService};
        use crate::storage::Storage;

        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path()).unwrap();
        let catalog = Catalog::default();
        let credentials = CredentialService::new(
            &storage,
            AdminCredentials {
                username: "Admin1".into(),
                password: "123".into(),
            },
        );
        let manager = BookingManager::new(&storage, &catalog);

        let user = credentials
            .register_user("Asha Rao", "9123456789", "asha@example.com")
            .unwrap();
        assert_eq!(user.username, "AshaRao6789");

        let booking = manager
            .create_equipment_booking(&EquipmentBookingRequest {
                user_id: user.id.clone(),
                equipment_id: "eq1".into(),
                start_date: Some(date(2025, 1, 1)),
                end_date: Some(date(2025, 1, 3)),
                duration_type: DurationType::Daily,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(booking.total_amount, 1500);
        assert_eq!(booking.status, BookingStatus::Confirmed);

        // A second process sees the same state.
        let reopened = Storage::new(dir.path()).unwrap();
        let manager = BookingManager::new(&reopened, &catalog);
        let active = manager.get_active_bookings(&user.id);
        assert_eq!(active, [booking.summary()]);
    }
}
