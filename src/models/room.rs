use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PmsError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Room {
    pub id: i64,
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub status: RoomStatus,
    pub price: f64,
}

impl Room {
    /// Case-insensitive substring match against the room number or type name.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.number.to_lowercase().contains(&needle)
            || self.room_type.as_str().to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum RoomType {
    Single,
    Double,
    Suite,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Suite => "Suite",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    Available,
    Occupied,
    Dirty,
    Maintenance,
}

impl RoomStatus {
    pub const ALL: [RoomStatus; 4] = [
        RoomStatus::Available,
        RoomStatus::Occupied,
        RoomStatus::Dirty,
        RoomStatus::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "Available",
            RoomStatus::Occupied => "Occupied",
            RoomStatus::Dirty => "Dirty",
            RoomStatus::Maintenance => "Maintenance",
        }
    }

    /// Rooms waiting on housekeeping or engineering.
    pub fn needs_service(&self) -> bool {
        matches!(self, RoomStatus::Dirty | RoomStatus::Maintenance)
    }

    /// Room status transition table. `None` means the event is not allowed
    /// from the current status.
    pub fn apply(self, event: RoomEvent) -> Option<RoomStatus> {
        use RoomEvent::*;
        use RoomStatus::*;

        match (self, event) {
            (_, Occupy) => Some(Occupied),
            (Occupied, Vacate) => Some(Dirty),
            (_, Vacate) => None,
            (_, Clean) => Some(Available),
            (Occupied, ReportMaintenance) => None,
            (_, ReportMaintenance) => Some(Maintenance),
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomStatus {
    type Err = PmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| PmsError::Validation(format!("unknown room status: {}", s)))
    }
}

/// Events that move a room between statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomEvent {
    Occupy,
    Vacate,
    Clean,
    ReportMaintenance,
}

impl fmt::Display for RoomEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoomEvent::Occupy => "occupy",
            RoomEvent::Vacate => "vacate",
            RoomEvent::Clean => "clean",
            RoomEvent::ReportMaintenance => "report maintenance",
        };
        f.write_str(name)
    }
}

/// Status filter of the room grid: everything, or exactly one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(RoomStatus),
}

impl StatusFilter {
    pub fn admits(&self, status: RoomStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = PmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}
