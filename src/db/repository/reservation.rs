//! Reservation Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Reservation, ReservationCreate, ReservationStatus, ReservationUpdate};
use crate::utils::time::now_millis;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "reservation";

#[derive(Clone)]
pub struct ReservationRepository {
    base: BaseRepository,
}

impl ReservationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find reservations, optionally filtered by restaurant and status
    pub async fn find_filtered(
        &self,
        restaurant: Option<RecordId>,
        status: Option<ReservationStatus>,
    ) -> RepoResult<Vec<Reservation>> {
        let mut conditions = Vec::new();
        if restaurant.is_some() {
            conditions.push("restaurant = $restaurant");
        }
        if status.is_some() {
            conditions.push("status = $status");
        }

        let sql = if conditions.is_empty() {
            "SELECT * FROM reservation ORDER BY reservation_time".to_string()
        } else {
            format!(
                "SELECT * FROM reservation WHERE {} ORDER BY reservation_time",
                conditions.join(" AND ")
            )
        };

        let mut query = self.base.db().query(sql);
        if let Some(r) = restaurant {
            query = query.bind(("restaurant", r));
        }
        if let Some(s) = status {
            query = query.bind(("status", s));
        }

        let reservations: Vec<Reservation> = query.await?.take(0)?;
        Ok(reservations)
    }

    /// Find reservation by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Reservation>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find(&thing).await
    }

    pub async fn find(&self, id: &RecordId) -> RepoResult<Option<Reservation>> {
        let reservation: Option<Reservation> = self.base.db().select(id.clone()).await?;
        Ok(reservation)
    }

    /// Create a new reservation (status starts at PENDING)
    pub async fn create(&self, data: ReservationCreate) -> RepoResult<Reservation> {
        let now = now_millis();
        let reservation = Reservation {
            id: None,
            reservation_time: data.reservation_time,
            party_size: data.party_size,
            customer_name: data.customer_name,
            customer_phone: data.customer_phone,
            customer_email: data.customer_email,
            special_requests: data.special_requests,
            status: ReservationStatus::Pending,
            restaurant: data.restaurant,
            party: data.party,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Reservation> =
            self.base.db().create(TABLE).content(reservation).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create reservation".to_string()))
    }

    /// Update a reservation
    pub async fn update(&self, id: &str, data: ReservationUpdate) -> RepoResult<Reservation> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find(&thing)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))?;

        let reservation_time = data.reservation_time.unwrap_or(existing.reservation_time);
        let party_size = data.party_size.unwrap_or(existing.party_size);
        let customer_name = data.customer_name.unwrap_or(existing.customer_name);
        let customer_phone = data.customer_phone.unwrap_or(existing.customer_phone);
        let customer_email = data.customer_email.or(existing.customer_email);
        let special_requests = data.special_requests.or(existing.special_requests);
        let status = data.status.unwrap_or(existing.status);
        let party = data.party.or(existing.party);

        self.base
            .db()
            .query(
                "UPDATE $thing SET reservation_time = $reservation_time, \
                 party_size = $party_size, customer_name = $customer_name, \
                 customer_phone = $customer_phone, customer_email = $customer_email, \
                 special_requests = $special_requests, status = $status, \
                 party = $party, updated_at = $now",
            )
            .bind(("thing", thing.clone()))
            .bind(("reservation_time", reservation_time))
            .bind(("party_size", party_size))
            .bind(("customer_name", customer_name))
            .bind(("customer_phone", customer_phone))
            .bind(("customer_email", customer_email))
            .bind(("special_requests", special_requests))
            .bind(("status", status))
            .bind(("party", party))
            .bind(("now", now_millis()))
            .await?;

        self.find(&thing)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))
    }

    /// Set only the lifecycle status (used by the assignment engine)
    pub async fn set_status(&self, id: &RecordId, status: ReservationStatus) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $thing SET status = $status, updated_at = $now")
            .bind(("thing", id.clone()))
            .bind(("status", status))
            .bind(("now", now_millis()))
            .await?;
        Ok(())
    }

    /// Hard delete a reservation
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        if self.find(&thing).await?.is_none() {
            return Ok(false);
        }
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
