pub mod app_config;
pub mod database;
pub mod user_repo;
pub mod flight_repo;
pub mod booking_repo;

pub use booking_repo::PostgresBookingRepository;
pub use database::DbClient;
pub use flight_repo::PostgresFlightRepository;
pub use user_repo::PostgresUserRepository;
