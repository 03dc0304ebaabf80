use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::models::{Booking, BookingDetail, BookingPatch, NewBooking};
use crate::repository::{BookingRepository, FlightRepository, UserRepository};
use crate::{CoreError, CoreResult};

/// Bookings tie a user to a flight. The service checks that both references
/// exist whenever a booking is written; storage does not cascade deletes, so
/// readers must tolerate references that have since disappeared.
#[derive(Clone)]
pub struct BookingService {
    bookings: Arc<dyn BookingRepository>,
    users: Arc<dyn UserRepository>,
    flights: Arc<dyn FlightRepository>,
}

impl BookingService {
    pub fn new(
        bookings: Arc<dyn BookingRepository>,
        users: Arc<dyn UserRepository>,
        flights: Arc<dyn FlightRepository>,
    ) -> Self {
        Self { bookings, users, flights }
    }

    /// Every booking with its user and flight resolved. References are
    /// fetched in one bulk lookup per entity type, both issued concurrently.
    pub async fn dashboard(&self) -> CoreResult<Vec<BookingDetail>> {
        let bookings = self.bookings.list_bookings().await.map_err(CoreError::internal)?;
        if bookings.is_empty() {
            return Ok(Vec::new());
        }

        let user_ids = distinct(bookings.iter().map(|b| b.user));
        let flight_ids = distinct(bookings.iter().map(|b| b.flight));

        let (users, flights) = tokio::try_join!(
            self.users.get_users(&user_ids),
            self.flights.get_flights(&flight_ids),
        )
        .map_err(CoreError::internal)?;

        let users: HashMap<_, _> = users.into_iter().map(|u| (u.id, u)).collect();
        let flights: HashMap<_, _> = flights.into_iter().map(|f| (f.id, f)).collect();

        Ok(bookings
            .into_iter()
            .map(|b| BookingDetail {
                id: b.id,
                user: users.get(&b.user).cloned(),
                flight: flights.get(&b.flight).cloned(),
            })
            .collect())
    }

    pub async fn create(&self, input: NewBooking) -> CoreResult<Booking> {
        self.ensure_user(input.user).await?;
        self.ensure_flight(input.flight).await?;

        let booking = Booking {
            id: Uuid::new_v4(),
            user: input.user,
            flight: input.flight,
        };
        self.bookings.create_booking(&booking).await.map_err(CoreError::internal)?;

        info!("Booking created: {} (user {}, flight {})", booking.id, booking.user, booking.flight);
        Ok(booking)
    }

    /// Overwrites the supplied fields. A changed reference is checked the
    /// same way as on create; an unchanged one is left alone.
    pub async fn update(&self, id: Uuid, patch: BookingPatch) -> CoreResult<Booking> {
        let mut booking = self
            .bookings
            .get_booking(id)
            .await
            .map_err(CoreError::internal)?
            .ok_or_else(|| booking_not_found(id))?;

        if let Some(user) = patch.user {
            if user != booking.user {
                self.ensure_user(user).await?;
            }
            booking.user = user;
        }
        if let Some(flight) = patch.flight {
            if flight != booking.flight {
                self.ensure_flight(flight).await?;
            }
            booking.flight = flight;
        }

        let updated = self.bookings.update_booking(&booking).await.map_err(CoreError::internal)?;
        if !updated {
            return Err(booking_not_found(id));
        }
        info!("Booking updated: {}", id);
        Ok(booking)
    }

    pub async fn delete(&self, id: Uuid) -> CoreResult<()> {
        let deleted = self.bookings.delete_booking(id).await.map_err(CoreError::internal)?;
        if !deleted {
            return Err(booking_not_found(id));
        }
        info!("Booking deleted: {}", id);
        Ok(())
    }

    async fn ensure_user(&self, id: Uuid) -> CoreResult<()> {
        match self.users.get_user(id).await.map_err(CoreError::internal)? {
            Some(_) => Ok(()),
            None => Err(CoreError::NotFound(format!("user not found: {}", id))),
        }
    }

    async fn ensure_flight(&self, id: Uuid) -> CoreResult<()> {
        match self.flights.get_flight(id).await.map_err(CoreError::internal)? {
            Some(_) => Ok(()),
            None => Err(CoreError::NotFound(format!("flight not found: {}", id))),
        }
    }
}

fn distinct(ids: impl Iterator<Item = Uuid>) -> Vec<Uuid> {
    let mut ids: Vec<Uuid> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

fn booking_not_found(id: Uuid) -> CoreError {
    CoreError::NotFound(format!("booking not found: {}", id))
}
