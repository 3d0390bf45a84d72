use serde::Serialize;

use super::reservation::Reservation;
use super::room::{Room, RoomStatus};

/// Dashboard figures derived from the current rooms and reservations.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Metrics {
    pub total_rooms: usize,
    pub occupied: usize,
    pub available: usize,
    /// Dirty and Maintenance rooms together.
    pub dirty: usize,
    pub average_daily_rate: f64,
    pub revenue: f64,
    pub occupancy_rate: f64,
}

impl Metrics {
    pub fn compute(rooms: &[Room], reservations: &[Reservation]) -> Self {
        let count = |wanted: RoomStatus| rooms.iter().filter(|r| r.status == wanted).count();

        let occupied = count(RoomStatus::Occupied);
        let available = count(RoomStatus::Available);
        let dirty = rooms.iter().filter(|r| r.status.needs_service()).count();

        let revenue: f64 = reservations.iter().map(|r| r.total).sum();
        let average_daily_rate = revenue / reservations.len().max(1) as f64;
        let occupancy_rate = occupied as f64 / rooms.len().max(1) as f64;

        Self {
            total_rooms: rooms.len(),
            occupied,
            available,
            dirty,
            average_daily_rate,
            revenue,
            occupancy_rate,
        }
    }
}
