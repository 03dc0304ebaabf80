use aerobook_shared::Masked;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{CoreError, CoreResult};

// ============================================================================
// User
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// bcrypt hash; never part of any response body.
    #[serde(skip_serializing)]
    pub password_hash: String,
}

#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: Masked<String>,
}

impl NewUser {
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::ValidationError("name is required".to_string()));
        }
        validate_email(&self.email)?;
        if self.password.expose().is_empty() {
            return Err(CoreError::ValidationError("password is required".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<Masked<String>>,
}

pub(crate) fn validate_email(email: &str) -> CoreResult<()> {
    if !email.contains('@') {
        return Err(CoreError::ValidationError(format!("invalid email: {}", email)));
    }
    Ok(())
}

// ============================================================================
// Flight
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: Uuid,
    pub airline: String,
    pub flight_no: String,
    pub departure: String,
    pub arrival: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub seats: i32,
    pub price: f64,
}

impl Flight {
    pub fn validate(&self) -> CoreResult<()> {
        if self.seats < 0 {
            return Err(CoreError::ValidationError("seats must not be negative".to_string()));
        }
        if !(self.price >= 0.0) {
            return Err(CoreError::ValidationError("price must not be negative".to_string()));
        }
        if self.arrival_time <= self.departure_time {
            return Err(CoreError::ValidationError(
                "arrivalTime must be after departureTime".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFlight {
    pub airline: String,
    pub flight_no: String,
    pub departure: String,
    pub arrival: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub seats: i32,
    pub price: f64,
}

impl NewFlight {
    pub fn into_flight(self, id: Uuid) -> Flight {
        Flight {
            id,
            airline: self.airline,
            flight_no: self.flight_no,
            departure: self.departure,
            arrival: self.arrival,
            departure_time: self.departure_time,
            arrival_time: self.arrival_time,
            seats: self.seats,
            price: self.price,
        }
    }
}

/// Partial flight update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightPatch {
    pub airline: Option<String>,
    pub flight_no: Option<String>,
    pub departure: Option<String>,
    pub arrival: Option<String>,
    pub departure_time: Option<DateTime<Utc>>,
    pub arrival_time: Option<DateTime<Utc>>,
    pub seats: Option<i32>,
    pub price: Option<f64>,
}

impl FlightPatch {
    pub fn apply(self, flight: &mut Flight) {
        if let Some(v) = self.airline {
            flight.airline = v;
        }
        if let Some(v) = self.flight_no {
            flight.flight_no = v;
        }
        if let Some(v) = self.departure {
            flight.departure = v;
        }
        if let Some(v) = self.arrival {
            flight.arrival = v;
        }
        if let Some(v) = self.departure_time {
            flight.departure_time = v;
        }
        if let Some(v) = self.arrival_time {
            flight.arrival_time = v;
        }
        if let Some(v) = self.seats {
            flight.seats = v;
        }
        if let Some(v) = self.price {
            flight.price = v;
        }
    }
}

// ============================================================================
// Booking
// ============================================================================

/// A booking links a user to a flight by id. References are checked when
/// written, not enforced by storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: Uuid,
    pub user: Uuid,
    pub flight: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewBooking {
    pub user: Uuid,
    pub flight: Uuid,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingPatch {
    pub user: Option<Uuid>,
    pub flight: Option<Uuid>,
}

/// Dashboard row: a booking with its references resolved. A reference that
/// no longer resolves is `None` (serialized as `null`).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookingDetail {
    pub id: Uuid,
    pub user: Option<User>,
    pub flight: Option<Flight>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_flight() -> Flight {
        let departure_time = Utc::now();
        Flight {
            id: Uuid::new_v4(),
            airline: "Garuda".to_string(),
            flight_no: "GA-401".to_string(),
            departure: "CGK".to_string(),
            arrival: "DPS".to_string(),
            departure_time,
            arrival_time: departure_time + Duration::hours(2),
            seats: 180,
            price: 129.5,
        }
    }

    #[test]
    fn test_user_json_omits_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "$2b$04$abcdef".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["email"], "ana@example.com");
    }

    #[test]
    fn test_flight_uses_camel_case_fields() {
        let json = serde_json::to_value(sample_flight()).unwrap();
        assert_eq!(json["flightNo"], "GA-401");
        assert!(json.get("departureTime").is_some());
        assert!(json.get("arrivalTime").is_some());
    }

    #[test]
    fn test_flight_patch_keeps_absent_fields() {
        let mut flight = sample_flight();
        let before = flight.clone();
        FlightPatch { price: Some(99.0), ..Default::default() }.apply(&mut flight);

        assert_eq!(flight.price, 99.0);
        assert_eq!(flight.airline, before.airline);
        assert_eq!(flight.seats, before.seats);
        assert_eq!(flight.departure_time, before.departure_time);
    }

    #[test]
    fn test_flight_validation() {
        assert!(sample_flight().validate().is_ok());

        let mut negative_seats = sample_flight();
        negative_seats.seats = -1;
        assert!(negative_seats.validate().is_err());

        let mut backwards = sample_flight();
        backwards.arrival_time = backwards.departure_time - Duration::minutes(5);
        assert!(backwards.validate().is_err());

        let mut nan_price = sample_flight();
        nan_price.price = f64::NAN;
        assert!(nan_price.validate().is_err());
    }

    #[test]
    fn test_new_user_validation() {
        let ok = NewUser {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: Masked::from("pw"),
        };
        assert!(ok.validate().is_ok());

        let bad_email = NewUser { email: "nope".to_string(), ..ok };
        assert!(matches!(bad_email.validate(), Err(CoreError::ValidationError(_))));
    }
}
