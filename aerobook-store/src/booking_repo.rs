use aerobook_core::models::Booking;
use aerobook_core::repository::{BookingRepository, RepoResult};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

pub struct PostgresBookingRepository {
    pool: PgPool,
}

impl PostgresBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    user_id: Uuid,
    flight_id: Uuid,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id,
            user: row.user_id,
            flight: row.flight_id,
        }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepository {
    async fn list_bookings(&self) -> RepoResult<Vec<Booking>> {
        let rows: Vec<BookingRow> =
            sqlx::query_as("SELECT id, user_id, flight_id FROM bookings ORDER BY created_at")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn get_booking(&self, id: Uuid) -> RepoResult<Option<Booking>> {
        let row: Option<BookingRow> =
            sqlx::query_as("SELECT id, user_id, flight_id FROM bookings WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(Booking::from))
    }

    async fn create_booking(&self, booking: &Booking) -> RepoResult<()> {
        sqlx::query("INSERT INTO bookings (id, user_id, flight_id) VALUES ($1, $2, $3)")
            .bind(booking.id)
            .bind(booking.user)
            .bind(booking.flight)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_booking(&self, booking: &Booking) -> RepoResult<bool> {
        let result = sqlx::query("UPDATE bookings SET user_id = $1, flight_id = $2 WHERE id = $3")
            .bind(booking.user)
            .bind(booking.flight)
            .bind(booking.id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_booking(&self, id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
