use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::error::PmsError;

pub const RESERVATION_ID_PREFIX: &str = "R-";
pub const FIRST_RESERVATION_NUMBER: u32 = 1001;
pub const LAST_RESERVATION_NUMBER: u32 = 9999;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Reservation {
    pub id: String,
    pub guest: String,
    pub room: String,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub status: ReservationStatus,
    pub total: f64,
}

impl Reservation {
    pub fn nights(&self) -> i64 {
        (self.checkout - self.checkin).num_days()
    }

    /// Case-insensitive substring match against the guest name or the id.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.guest.to_lowercase().contains(&needle) || self.id.to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    Reserved,
    Arrival,
    #[serde(rename = "Checked-in")]
    CheckedIn,
    #[serde(rename = "Checked-out")]
    CheckedOut,
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationStatus::Reserved => write!(f, "Reserved"),
            ReservationStatus::Arrival => write!(f, "Arrival"),
            ReservationStatus::CheckedIn => write!(f, "Checked-in"),
            ReservationStatus::CheckedOut => write!(f, "Checked-out"),
        }
    }
}

#[derive(Debug, Deserialize, Validate, Clone)]
pub struct NewReservation {
    #[validate(length(min = 1))]
    pub guest: String,
    #[validate(length(min = 1))]
    pub room: String,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    /// Defaults to `nights * room price` when omitted.
    #[validate(range(min = 0.0))]
    pub total: Option<f64>,
    pub status: Option<ReservationStatus>,
}

impl NewReservation {
    /// Field-level and cross-field checks that need no store lookup.
    pub fn check(&self) -> Result<(), PmsError> {
        self.validate()?;

        if self.guest.trim().is_empty() {
            return Err(PmsError::Validation("guest name must not be blank".to_string()));
        }

        if self.checkin >= self.checkout {
            return Err(PmsError::Validation(
                "checkout must be after checkin".to_string(),
            ));
        }

        if let Some(total) = self.total {
            if !total.is_finite() {
                return Err(PmsError::Validation("total must be a finite amount".to_string()));
            }
        }

        match self.status {
            None | Some(ReservationStatus::Reserved) | Some(ReservationStatus::Arrival) => Ok(()),
            Some(other) => Err(PmsError::Validation(format!(
                "new reservations cannot start as {}",
                other
            ))),
        }
    }

    pub fn nights(&self) -> i64 {
        (self.checkout - self.checkin).num_days()
    }
}

/// Numeric part of an `R-####` id.
pub fn reservation_number(id: &str) -> Option<u32> {
    let digits = id.strip_prefix(RESERVATION_ID_PREFIX)?;
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

pub fn format_reservation_id(number: u32) -> String {
    format!("{}{:04}", RESERVATION_ID_PREFIX, number)
}
