use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Booking, Flight, User};

pub type RepoResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Returned (boxed) by `create_user`/`update_user` when another account
/// already holds the email. Backends detect it atomically with the write.
#[derive(Debug, thiserror::Error)]
#[error("email already registered: {0}")]
pub struct DuplicateEmail(pub String);

/// Repository trait for user accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list_users(&self) -> RepoResult<Vec<User>>;

    async fn get_user(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Bulk lookup; ids that do not resolve are simply absent from the result.
    async fn get_users(&self, ids: &[Uuid]) -> RepoResult<Vec<User>>;

    async fn find_user_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    async fn create_user(&self, user: &User) -> RepoResult<()>;

    /// Overwrites the stored record. Returns `false` if no record has this id.
    async fn update_user(&self, user: &User) -> RepoResult<bool>;

    /// Returns `false` if no record was deleted.
    async fn delete_user(&self, id: Uuid) -> RepoResult<bool>;
}

/// Repository trait for flight listings
#[async_trait]
pub trait FlightRepository: Send + Sync {
    async fn list_flights(&self) -> RepoResult<Vec<Flight>>;

    async fn get_flight(&self, id: Uuid) -> RepoResult<Option<Flight>>;

    async fn get_flights(&self, ids: &[Uuid]) -> RepoResult<Vec<Flight>>;

    async fn create_flight(&self, flight: &Flight) -> RepoResult<()>;

    async fn update_flight(&self, flight: &Flight) -> RepoResult<bool>;

    async fn delete_flight(&self, id: Uuid) -> RepoResult<bool>;
}

/// Repository trait for bookings
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn list_bookings(&self) -> RepoResult<Vec<Booking>>;

    async fn get_booking(&self, id: Uuid) -> RepoResult<Option<Booking>>;

    async fn create_booking(&self, booking: &Booking) -> RepoResult<()>;

    async fn update_booking(&self, booking: &Booking) -> RepoResult<bool>;

    async fn delete_booking(&self, id: Uuid) -> RepoResult<bool>;
}
