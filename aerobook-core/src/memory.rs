use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Booking, Flight, User};
use crate::repository::{
    BookingRepository, DuplicateEmail, FlightRepository, RepoResult, UserRepository,
};

/// Process-local storage for all three collections. Records keep insertion
/// order, matching what a list endpoint returns from Postgres without an
/// explicit sort.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    flights: RwLock<Vec<Flight>>,
    bookings: RwLock<Vec<Booking>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn replace<T: Clone>(records: &mut [T], record: &T, same: impl Fn(&T) -> bool) -> bool {
    match records.iter_mut().find(|r| same(r)) {
        Some(slot) => {
            *slot = record.clone();
            true
        }
        None => false,
    }
}

fn remove<T>(records: &mut Vec<T>, same: impl Fn(&T) -> bool) -> bool {
    let before = records.len();
    records.retain(|r| !same(r));
    records.len() != before
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn list_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn get_user(&self, id: Uuid) -> RepoResult<Option<User>> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn get_users(&self, ids: &[Uuid]) -> RepoResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.iter().filter(|u| ids.contains(&u.id)).cloned().collect())
    }

    async fn find_user_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self.users.read().await.iter().find(|u| u.email == email).cloned())
    }

    async fn create_user(&self, user: &User) -> RepoResult<()> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(Box::new(DuplicateEmail(user.email.clone())));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn update_user(&self, user: &User) -> RepoResult<bool> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email && u.id != user.id) {
            return Err(Box::new(DuplicateEmail(user.email.clone())));
        }
        Ok(replace(&mut users, user, |u| u.id == user.id))
    }

    async fn delete_user(&self, id: Uuid) -> RepoResult<bool> {
        Ok(remove(&mut *self.users.write().await, |u| u.id == id))
    }
}

#[async_trait]
impl FlightRepository for MemoryStore {
    async fn list_flights(&self) -> RepoResult<Vec<Flight>> {
        Ok(self.flights.read().await.clone())
    }

    async fn get_flight(&self, id: Uuid) -> RepoResult<Option<Flight>> {
        Ok(self.flights.read().await.iter().find(|f| f.id == id).cloned())
    }

    async fn get_flights(&self, ids: &[Uuid]) -> RepoResult<Vec<Flight>> {
        let flights = self.flights.read().await;
        Ok(flights.iter().filter(|f| ids.contains(&f.id)).cloned().collect())
    }

    async fn create_flight(&self, flight: &Flight) -> RepoResult<()> {
        self.flights.write().await.push(flight.clone());
        Ok(())
    }

    async fn update_flight(&self, flight: &Flight) -> RepoResult<bool> {
        Ok(replace(&mut self.flights.write().await, flight, |f| f.id == flight.id))
    }

    async fn delete_flight(&self, id: Uuid) -> RepoResult<bool> {
        Ok(remove(&mut *self.flights.write().await, |f| f.id == id))
    }
}

#[async_trait]
impl BookingRepository for MemoryStore {
    async fn list_bookings(&self) -> RepoResult<Vec<Booking>> {
        Ok(self.bookings.read().await.clone())
    }

    async fn get_booking(&self, id: Uuid) -> RepoResult<Option<Booking>> {
        Ok(self.bookings.read().await.iter().find(|b| b.id == id).cloned())
    }

    async fn create_booking(&self, booking: &Booking) -> RepoResult<()> {
        self.bookings.write().await.push(booking.clone());
        Ok(())
    }

    async fn update_booking(&self, booking: &Booking) -> RepoResult<bool> {
        Ok(replace(&mut self.bookings.write().await, booking, |b| b.id == booking.id))
    }

    async fn delete_booking(&self, id: Uuid) -> RepoResult<bool> {
        Ok(remove(&mut *self.bookings.write().await, |b| b.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_update_and_delete_report_missing_records() {
        let store = MemoryStore::new();
        let booking = Booking { id: Uuid::new_v4(), user: Uuid::new_v4(), flight: Uuid::new_v4() };

        assert!(!store.update_booking(&booking).await.unwrap());
        assert!(!store.delete_booking(booking.id).await.unwrap());

        store.create_booking(&booking).await.unwrap();
        assert!(store.update_booking(&booking).await.unwrap());
        assert!(store.delete_booking(booking.id).await.unwrap());
        assert!(store.list_bookings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected_under_the_write_lock() {
        let store = MemoryStore::new();
        let first = User {
            id: Uuid::new_v4(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "x".to_string(),
        };
        let second = User { id: Uuid::new_v4(), email: "bo@example.com".to_string(), ..first.clone() };
        store.create_user(&first).await.unwrap();
        store.create_user(&second).await.unwrap();

        let clash = User { id: Uuid::new_v4(), ..first.clone() };
        let err = store.create_user(&clash).await.unwrap_err();
        assert!(err.downcast_ref::<DuplicateEmail>().is_some());

        let renamed = User { email: first.email.clone(), ..second.clone() };
        let err = store.update_user(&renamed).await.unwrap_err();
        assert!(err.downcast_ref::<DuplicateEmail>().is_some());

        // Re-saving a user with its own email is not a clash.
        assert!(store.update_user(&first).await.unwrap());
        assert_eq!(store.list_users().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_bulk_lookup_skips_unknown_ids() {
        let store = MemoryStore::new();
        let user = User {
            id: Uuid::new_v4(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "x".to_string(),
        };
        store.create_user(&user).await.unwrap();

        let found = store.get_users(&[user.id, Uuid::new_v4()]).await.unwrap();
        assert_eq!(found, vec![user]);
    }
}
