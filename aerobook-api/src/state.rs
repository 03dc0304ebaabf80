use std::sync::Arc;
use std::time::Duration;

use aerobook_core::repository::{BookingRepository, FlightRepository, UserRepository};
use aerobook_core::{BookingService, FlightService, MemoryStore, PasswordHasher, UserService};

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub flights: FlightService,
    pub bookings: BookingService,
    pub auth: AuthConfig,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        flights: Arc<dyn FlightRepository>,
        bookings: Arc<dyn BookingRepository>,
        hasher: PasswordHasher,
        auth: AuthConfig,
        request_timeout: Duration,
    ) -> Self {
        Self {
            users: UserService::new(users.clone(), hasher),
            flights: FlightService::new(flights.clone()),
            bookings: BookingService::new(bookings, users, flights),
            auth,
            request_timeout,
        }
    }

    /// All three collections backed by one `MemoryStore`.
    pub fn in_memory(hasher: PasswordHasher, auth: AuthConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(
            store.clone(),
            store.clone(),
            store,
            hasher,
            auth,
            Duration::from_secs(10),
        )
    }
}
