//! Sample property the dashboard starts with.

use chrono::NaiveDate;

use crate::error::PmsError;
use crate::models::{Reservation, ReservationStatus, Room, RoomStatus, RoomType};

pub const SAMPLE_ROOM_COUNT: usize = 14;

/// Rooms 101..=114. Every 5th room (by index) starts Dirty, every 7th
/// Maintenance, the rest Available.
pub fn sample_rooms() -> Vec<Room> {
    (0..SAMPLE_ROOM_COUNT)
        .map(|i| {
            let room_type = if i % 3 == 0 {
                RoomType::Suite
            } else if i % 2 == 0 {
                RoomType::Double
            } else {
                RoomType::Single
            };
            let status = if i % 5 == 0 {
                RoomStatus::Dirty
            } else if i % 7 == 0 {
                RoomStatus::Maintenance
            } else {
                RoomStatus::Available
            };

            Room {
                id: 101 + i as i64,
                number: (101 + i).to_string(),
                room_type,
                status,
                price: 80.0 + (i % 5) as f64 * 25.0,
            }
        })
        .collect()
}

pub fn sample_reservations() -> Result<Vec<Reservation>, PmsError> {
    [
        reservation(
            "R-1001",
            "Ana Silva",
            "101",
            (2025, 10, 16),
            (2025, 10, 18),
            ReservationStatus::CheckedIn,
            240.0,
        ),
        reservation(
            "R-1002",
            "John Carter",
            "106",
            (2025, 10, 18),
            (2025, 10, 20),
            ReservationStatus::Reserved,
            160.0,
        ),
        reservation(
            "R-1003",
            "Li Wei",
            "109",
            (2025, 10, 19),
            (2025, 10, 21),
            ReservationStatus::Arrival,
            200.0,
        ),
    ]
    .into_iter()
    .collect()
}

fn reservation(
    id: &str,
    guest: &str,
    room: &str,
    checkin: (i32, u32, u32),
    checkout: (i32, u32, u32),
    status: ReservationStatus,
    total: f64,
) -> Result<Reservation, PmsError> {
    Ok(Reservation {
        id: id.to_string(),
        guest: guest.to_string(),
        room: room.to_string(),
        checkin: date(checkin)?,
        checkout: date(checkout)?,
        status,
        total,
    })
}

fn date((y, m, d): (i32, u32, u32)) -> Result<NaiveDate, PmsError> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| PmsError::Validation(format!("invalid date {}-{:02}-{:02}", y, m, d)))
}
