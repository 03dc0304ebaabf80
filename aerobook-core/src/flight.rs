use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::models::{Flight, FlightPatch, NewFlight};
use crate::repository::FlightRepository;
use crate::{CoreError, CoreResult};

#[derive(Clone)]
pub struct FlightService {
    repo: Arc<dyn FlightRepository>,
}

impl FlightService {
    pub fn new(repo: Arc<dyn FlightRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> CoreResult<Vec<Flight>> {
        self.repo.list_flights().await.map_err(CoreError::internal)
    }

    pub async fn create(&self, input: NewFlight) -> CoreResult<Flight> {
        let flight = input.into_flight(Uuid::new_v4());
        flight.validate()?;
        self.repo.create_flight(&flight).await.map_err(CoreError::internal)?;

        info!("Flight created: {} ({})", flight.id, flight.flight_no);
        Ok(flight)
    }

    pub async fn get(&self, id: Uuid) -> CoreResult<Flight> {
        self.repo
            .get_flight(id)
            .await
            .map_err(CoreError::internal)?
            .ok_or_else(|| flight_not_found(id))
    }

    /// Merges `patch` over the stored flight and validates the result.
    pub async fn update(&self, id: Uuid, patch: FlightPatch) -> CoreResult<Flight> {
        let mut flight = self.get(id).await?;
        patch.apply(&mut flight);
        flight.validate()?;

        let updated = self.repo.update_flight(&flight).await.map_err(CoreError::internal)?;
        if !updated {
            return Err(flight_not_found(id));
        }
        info!("Flight updated: {}", id);
        Ok(flight)
    }

    /// Idempotent: deleting an unknown id succeeds.
    pub async fn delete(&self, id: Uuid) -> CoreResult<()> {
        let deleted = self.repo.delete_flight(id).await.map_err(CoreError::internal)?;
        if deleted {
            info!("Flight deleted: {}", id);
        }
        Ok(())
    }
}

fn flight_not_found(id: Uuid) -> CoreError {
    CoreError::NotFound(format!("flight not found: {}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use chrono::{Duration, TimeZone, Utc};

    fn new_flight() -> NewFlight {
        let departure_time = Utc.with_ymd_and_hms(2026, 11, 2, 6, 30, 0).unwrap();
        NewFlight {
            airline: "Qantas".to_string(),
            flight_no: "QF1".to_string(),
            departure: "SYD".to_string(),
            arrival: "LHR".to_string(),
            departure_time,
            arrival_time: departure_time + Duration::hours(23),
            seats: 300,
            price: 2150.0,
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let flights = FlightService::new(Arc::new(MemoryStore::new()));
        let created = flights.create(new_flight()).await.unwrap();

        assert_eq!(flights.get(created.id).await.unwrap(), created);
        assert_eq!(flights.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_partial_update_leaves_other_fields() {
        let flights = FlightService::new(Arc::new(MemoryStore::new()));
        let created = flights.create(new_flight()).await.unwrap();

        let patch = FlightPatch { seats: Some(250), ..Default::default() };
        let updated = flights.update(created.id, patch).await.unwrap();

        assert_eq!(updated.seats, 250);
        assert_eq!(updated.price, created.price);
        assert_eq!(updated.flight_no, created.flight_no);
        assert_eq!(updated.arrival_time, created.arrival_time);
        assert_eq!(flights.get(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_merge() {
        let flights = FlightService::new(Arc::new(MemoryStore::new()));
        let created = flights.create(new_flight()).await.unwrap();

        let patch = FlightPatch {
            arrival_time: Some(created.departure_time - Duration::hours(1)),
            ..Default::default()
        };
        let result = flights.update(created.id, patch).await;
        assert!(matches!(result, Err(CoreError::ValidationError(_))));
        assert_eq!(flights.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_missing_flight() {
        let flights = FlightService::new(Arc::new(MemoryStore::new()));
        let id = Uuid::new_v4();

        assert!(matches!(flights.get(id).await, Err(CoreError::NotFound(_))));
        let update = flights.update(id, FlightPatch::default()).await;
        assert!(matches!(update, Err(CoreError::NotFound(_))));
        assert!(flights.delete(id).await.is_ok());
    }
}
