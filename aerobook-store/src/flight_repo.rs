use aerobook_core::models::Flight;
use aerobook_core::repository::{FlightRepository, RepoResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct PostgresFlightRepository {
    pool: PgPool,
}

impl PostgresFlightRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct FlightRow {
    id: Uuid,
    airline: String,
    flight_no: String,
    departure: String,
    arrival: String,
    departure_time: DateTime<Utc>,
    arrival_time: DateTime<Utc>,
    seats: i32,
    price: f64,
}

impl From<FlightRow> for Flight {
    fn from(row: FlightRow) -> Self {
        Flight {
            id: row.id,
            airline: row.airline,
            flight_no: row.flight_no,
            departure: row.departure,
            arrival: row.arrival,
            departure_time: row.departure_time,
            arrival_time: row.arrival_time,
            seats: row.seats,
            price: row.price,
        }
    }
}

const FLIGHT_COLUMNS: &str =
    "id, airline, flight_no, departure, arrival, departure_time, arrival_time, seats, price";

#[async_trait]
impl FlightRepository for PostgresFlightRepository {
    async fn list_flights(&self) -> RepoResult<Vec<Flight>> {
        let rows: Vec<FlightRow> =
            sqlx::query_as(&format!("SELECT {FLIGHT_COLUMNS} FROM flights ORDER BY created_at"))
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(Flight::from).collect())
    }

    async fn get_flight(&self, id: Uuid) -> RepoResult<Option<Flight>> {
        let row: Option<FlightRow> =
            sqlx::query_as(&format!("SELECT {FLIGHT_COLUMNS} FROM flights WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(Flight::from))
    }

    async fn get_flights(&self, ids: &[Uuid]) -> RepoResult<Vec<Flight>> {
        let rows: Vec<FlightRow> =
            sqlx::query_as(&format!("SELECT {FLIGHT_COLUMNS} FROM flights WHERE id = ANY($1)"))
                .bind(ids)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(Flight::from).collect())
    }

    async fn create_flight(&self, flight: &Flight) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO flights (id, airline, flight_no, departure, arrival, departure_time, arrival_time, seats, price)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(flight.id)
        .bind(&flight.airline)
        .bind(&flight.flight_no)
        .bind(&flight.departure)
        .bind(&flight.arrival)
        .bind(flight.departure_time)
        .bind(flight.arrival_time)
        .bind(flight.seats)
        .bind(flight.price)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update_flight(&self, flight: &Flight) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE flights
            SET airline = $1, flight_no = $2, departure = $3, arrival = $4,
                departure_time = $5, arrival_time = $6, seats = $7, price = $8
            WHERE id = $9
            "#,
        )
        .bind(&flight.airline)
        .bind(&flight.flight_no)
        .bind(&flight.departure)
        .bind(&flight.arrival)
        .bind(flight.departure_time)
        .bind(flight.arrival_time)
        .bind(flight.seats)
        .bind(flight.price)
        .bind(flight.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_flight(&self, id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM flights WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
