//! In-memory property state: the canonical rooms and reservations plus the
//! operations that query and change them.
//!
//! Every mutating method either applies its whole effect or returns an error
//! with both collections untouched.

pub mod seed;

use std::collections::HashSet;

use crate::error::PmsError;
use crate::models::reservation::{
    format_reservation_id, reservation_number, FIRST_RESERVATION_NUMBER,
    LAST_RESERVATION_NUMBER,
};
use crate::models::{
    Metrics, NewReservation, Reservation, ReservationStatus, Room, RoomEvent, RoomStatus,
    StatusFilter,
};

#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    rooms: Vec<Room>,
    reservations: Vec<Reservation>,
}

impl PropertyStore {
    /// Builds a store, rejecting duplicate room numbers and malformed or
    /// duplicate reservations.
    pub fn new(rooms: Vec<Room>, reservations: Vec<Reservation>) -> Result<Self, PmsError> {
        let mut numbers = HashSet::new();
        for room in &rooms {
            if !numbers.insert(room.number.as_str()) {
                return Err(PmsError::Validation(format!(
                    "duplicate room number {}",
                    room.number
                )));
            }
            if !room.price.is_finite() || room.price <= 0.0 {
                return Err(PmsError::Validation(format!(
                    "room {} must have a positive price",
                    room.number
                )));
            }
        }

        let mut ids = HashSet::new();
        for res in &reservations {
            if reservation_number(&res.id).is_none() {
                return Err(PmsError::Validation(format!(
                    "malformed reservation id {}",
                    res.id
                )));
            }
            if !ids.insert(res.id.as_str()) {
                return Err(PmsError::Validation(format!(
                    "duplicate reservation id {}",
                    res.id
                )));
            }
            if res.checkout <= res.checkin || !res.total.is_finite() || res.total < 0.0 {
                return Err(PmsError::Validation(format!(
                    "reservation {} has invalid dates or total",
                    res.id
                )));
            }
            if !numbers.contains(res.room.as_str()) {
                log::warn!("reservation {} references unknown room {}", res.id, res.room);
            }
        }

        Ok(Self {
            rooms,
            reservations,
        })
    }

    /// The sample property: 14 rooms and 3 reservations.
    pub fn seeded() -> Result<Self, PmsError> {
        Self::new(seed::sample_rooms(), seed::sample_reservations()?)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn room(&self, number: &str) -> Result<&Room, PmsError> {
        self.rooms
            .iter()
            .find(|r| r.number == number)
            .ok_or_else(|| PmsError::room_not_found(number))
    }

    pub fn reservation(&self, id: &str) -> Result<&Reservation, PmsError> {
        self.reservations
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| PmsError::reservation_not_found(id))
    }

    /// Rooms matching both the free-text query and the status filter, in
    /// collection order.
    pub fn filter_rooms<'a>(
        &'a self,
        query: &'a str,
        filter: StatusFilter,
    ) -> impl Iterator<Item = &'a Room> + 'a {
        self.rooms
            .iter()
            .filter(move |room| filter.admits(room.status) && room.matches_query(query))
    }

    pub fn housekeeping_queue(&self) -> impl Iterator<Item = &Room> + '_ {
        self.rooms.iter().filter(|room| room.status.needs_service())
    }

    pub fn filter_reservations<'a>(
        &'a self,
        query: &'a str,
    ) -> impl Iterator<Item = &'a Reservation> + 'a {
        self.reservations
            .iter()
            .filter(move |res| res.matches_query(query))
    }

    pub fn metrics(&self) -> Metrics {
        Metrics::compute(&self.rooms, &self.reservations)
    }

    /// Marks the reservation Checked-in and its room Occupied.
    ///
    /// Re-checking-in is accepted and re-asserts the same values. A checked-out stay
    /// cannot be reopened.
    pub fn check_in(&mut self, id: &str) -> Result<Reservation, PmsError> {
        let res_idx = self.reservation_index(id)?;
        let reservation = &self.reservations[res_idx];

        if reservation.status == ReservationStatus::CheckedOut {
            return Err(PmsError::InvalidTransition(format!(
                "reservation {} is already checked out",
                id
            )));
        }

        let room_idx = self.rooms.iter().position(|r| r.number == reservation.room);
        let next_room_status = match room_idx {
            Some(idx) => Some(next_status(&self.rooms[idx], RoomEvent::Occupy)?),
            None => {
                log::warn!(
                    "reservation {} references unknown room {}, room status not updated",
                    id,
                    reservation.room
                );
                None
            }
        };

        if let (Some(idx), Some(status)) = (room_idx, next_room_status) {
            let room = &mut self.rooms[idx];
            if room.status.needs_service() {
                log::warn!("checking guest into room {} while {}", room.number, room.status);
            }
            room.status = status;
        }

        let reservation = &mut self.reservations[res_idx];
        if reservation.status == ReservationStatus::CheckedIn {
            log::warn!("reservation {} is already checked in", id);
        } else {
            log::info!("reservation {} checked in to room {}", id, reservation.room);
        }
        reservation.status = ReservationStatus::CheckedIn;

        Ok(reservation.clone())
    }

    /// Ends a checked-in stay: the reservation becomes Checked-out and the
    /// room goes from Occupied to Dirty.
    pub fn check_out(&mut self, id: &str) -> Result<Reservation, PmsError> {
        let res_idx = self.reservation_index(id)?;
        let reservation = &self.reservations[res_idx];

        if reservation.status != ReservationStatus::CheckedIn {
            return Err(PmsError::InvalidTransition(format!(
                "cannot check out reservation {} while {}",
                id, reservation.status
            )));
        }

        let room_idx = self.rooms.iter().position(|r| r.number == reservation.room);
        if let Some(idx) = room_idx {
            let room = &mut self.rooms[idx];
            match room.status.apply(RoomEvent::Vacate) {
                Some(status) => room.status = status,
                None => log::warn!(
                    "room {} is {} at checkout of {}, leaving it as is",
                    room.number,
                    room.status,
                    id
                ),
            }
        }

        let reservation = &mut self.reservations[res_idx];
        reservation.status = ReservationStatus::CheckedOut;
        log::info!("reservation {} checked out of room {}", id, reservation.room);

        Ok(reservation.clone())
    }

    /// Sets the room Available from any status.
    pub fn mark_clean(&mut self, number: &str) -> Result<Room, PmsError> {
        self.transition_room(number, RoomEvent::Clean)
    }

    /// Takes an unoccupied room out of service.
    pub fn report_maintenance(&mut self, number: &str) -> Result<Room, PmsError> {
        self.transition_room(number, RoomEvent::ReportMaintenance)
    }

    pub fn create_reservation(&mut self, req: NewReservation) -> Result<Reservation, PmsError> {
        req.check()?;

        let room = self
            .rooms
            .iter()
            .find(|r| r.number == req.room)
            .ok_or_else(|| PmsError::Validation(format!("unknown room {}", req.room)))?;

        // Overbooking prevention: stays that have not ended block the dates.
        if let Some(existing) = self.reservations.iter().find(|r| {
            r.room == req.room
                && r.status != ReservationStatus::CheckedOut
                && r.checkin < req.checkout
                && r.checkout > req.checkin
        }) {
            return Err(PmsError::Conflict(format!(
                "room {} is already booked by {} from {} to {}",
                req.room, existing.id, existing.checkin, existing.checkout
            )));
        }

        let total = req
            .total
            .unwrap_or_else(|| room.price * req.nights() as f64);

        let reservation = Reservation {
            id: self.next_reservation_id()?,
            guest: req.guest.trim().to_string(),
            room: req.room,
            checkin: req.checkin,
            checkout: req.checkout,
            status: req.status.unwrap_or(ReservationStatus::Reserved),
            total,
        };

        log::info!(
            "reservation {} created for {} in room {}",
            reservation.id,
            reservation.guest,
            reservation.room
        );
        self.reservations.push(reservation.clone());

        Ok(reservation)
    }

    /// Removes the reservation. Returns `None` when it is already gone.
    pub fn cancel(&mut self, id: &str) -> Option<Reservation> {
        let idx = self.reservations.iter().position(|r| r.id == id)?;
        let removed = self.reservations.remove(idx);
        log::info!("reservation {} cancelled", id);
        Some(removed)
    }

    fn reservation_index(&self, id: &str) -> Result<usize, PmsError> {
        self.reservations
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| PmsError::reservation_not_found(id))
    }

    fn transition_room(&mut self, number: &str, event: RoomEvent) -> Result<Room, PmsError> {
        let room = self
            .rooms
            .iter_mut()
            .find(|r| r.number == number)
            .ok_or_else(|| PmsError::room_not_found(number))?;

        let next = next_status(room, event)?;
        if next == room.status {
            log::warn!("room {} is already {}, {} changes nothing", number, next, event);
        } else {
            log::info!("room {}: {} -> {} ({})", number, room.status, next, event);
            room.status = next;
        }

        Ok(room.clone())
    }

    fn next_reservation_id(&self) -> Result<String, PmsError> {
        let next = self
            .reservations
            .iter()
            .filter_map(|r| reservation_number(&r.id))
            .max()
            .map_or(FIRST_RESERVATION_NUMBER, |n| n + 1)
            .max(FIRST_RESERVATION_NUMBER);

        if next > LAST_RESERVATION_NUMBER {
            return Err(PmsError::Validation(
                "reservation id space exhausted".to_string(),
            ));
        }
        Ok(format_reservation_id(next))
    }
}

fn next_status(room: &Room, event: RoomEvent) -> Result<RoomStatus, PmsError> {
    room.status.apply(event).ok_or_else(|| {
        PmsError::InvalidTransition(format!(
            "cannot {} room {} while {}",
            event, room.number, room.status
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoomType;

    fn store() -> PropertyStore {
        PropertyStore::seeded().unwrap()
    }

    fn room_status(store: &PropertyStore, number: &str) -> RoomStatus {
        store.room(number).unwrap().status
    }

    fn new_reservation(room: &str, checkin: &str, checkout: &str) -> NewReservation {
        NewReservation {
            guest: "Marta Reyes".to_string(),
            room: room.to_string(),
            checkin: checkin.parse().unwrap(),
            checkout: checkout.parse().unwrap(),
            total: None,
            status: None,
        }
    }

    #[test]
    fn empty_filter_returns_every_room_in_order() {
        let store = store();
        let numbers: Vec<_> = store
            .filter_rooms("", StatusFilter::All)
            .map(|r| r.number.as_str())
            .collect();
        let expected: Vec<_> = store.rooms().iter().map(|r| r.number.as_str()).collect();
        assert_eq!(numbers, expected);
    }

    #[test]
    fn filter_is_idempotent() {
        let store = store();
        let first: Vec<_> = store
            .filter_rooms("su", StatusFilter::Only(RoomStatus::Available))
            .cloned()
            .collect();
        let second: Vec<_> = store
            .filter_rooms("su", StatusFilter::Only(RoomStatus::Available))
            .cloned()
            .collect();
        assert_eq!(first, second);
        assert!(first
            .iter()
            .all(|r| r.room_type == RoomType::Suite && r.status == RoomStatus::Available));
    }

    #[test]
    fn filter_combines_query_and_status() {
        let store = store();
        let dirty: Vec<_> = store
            .filter_rooms("", StatusFilter::Only(RoomStatus::Dirty))
            .map(|r| r.number.as_str())
            .collect();
        assert_eq!(dirty, ["101", "106", "111"]);

        let dirty_11x: Vec<_> = store
            .filter_rooms("11", StatusFilter::Only(RoomStatus::Dirty))
            .map(|r| r.number.as_str())
            .collect();
        assert_eq!(dirty_11x, ["111"]);
    }

    #[test]
    fn check_in_updates_reservation_and_room() {
        let mut store = store();
        let res = store.check_in("R-1003").unwrap();
        assert_eq!(res.status, ReservationStatus::CheckedIn);
        assert_eq!(
            store.reservation("R-1003").unwrap().status,
            ReservationStatus::CheckedIn
        );
        assert_eq!(room_status(&store, "109"), RoomStatus::Occupied);
    }

    #[test]
    fn check_in_succeeds_for_every_sample_reservation() {
        let mut store = store();
        let ids: Vec<_> = store.reservations().iter().map(|r| r.id.clone()).collect();
        for id in ids {
            let res = store.check_in(&id).unwrap();
            assert_eq!(room_status(&store, &res.room), RoomStatus::Occupied);
        }
    }

    #[test]
    fn check_in_is_idempotent() {
        let mut store = store();
        store.check_in("R-1002").unwrap();
        let rooms = store.rooms().to_vec();
        let reservations = store.reservations().to_vec();

        store.check_in("R-1002").unwrap();
        assert_eq!(store.rooms(), rooms.as_slice());
        assert_eq!(store.reservations(), reservations.as_slice());
    }

    #[test]
    fn check_in_unknown_reservation_is_not_found_and_changes_nothing() {
        let mut store = store();
        let rooms = store.rooms().to_vec();
        let reservations = store.reservations().to_vec();

        let err = store.check_in("R-9999").unwrap_err();
        assert!(matches!(err, PmsError::NotFound(_)));
        assert_eq!(store.rooms(), rooms.as_slice());
        assert_eq!(store.reservations(), reservations.as_slice());
    }

    #[test]
    fn checked_out_reservation_cannot_check_in_again() {
        let mut store = store();
        store.check_out("R-1001").unwrap();
        let err = store.check_in("R-1001").unwrap_err();
        assert!(matches!(err, PmsError::InvalidTransition(_)));
    }

    #[test]
    fn cancelled_reservation_cannot_check_in() {
        let mut store = store();
        store.cancel("R-1002").unwrap();
        assert!(matches!(
            store.check_in("R-1002"),
            Err(PmsError::NotFound(_))
        ));
        assert_eq!(room_status(&store, "106"), RoomStatus::Dirty);
    }

    #[test]
    fn check_out_leaves_room_dirty() {
        let mut store = store();
        store.check_in("R-1003").unwrap();
        let res = store.check_out("R-1003").unwrap();
        assert_eq!(res.status, ReservationStatus::CheckedOut);
        assert_eq!(room_status(&store, "109"), RoomStatus::Dirty);
    }

    #[test]
    fn check_out_requires_checked_in() {
        let mut store = store();
        let err = store.check_out("R-1002").unwrap_err();
        assert!(matches!(err, PmsError::InvalidTransition(_)));
        assert_eq!(
            store.reservation("R-1002").unwrap().status,
            ReservationStatus::Reserved
        );
    }

    #[test]
    fn mark_clean_sets_available_from_any_status() {
        let mut store = store();
        store.check_in("R-1003").unwrap();
        for number in ["101", "108", "109", "102"] {
            let room = store.mark_clean(number).unwrap();
            assert_eq!(room.status, RoomStatus::Available);
            assert_eq!(room_status(&store, number), RoomStatus::Available);
        }
    }

    #[test]
    fn mark_clean_unknown_room_is_not_found() {
        let mut store = store();
        let rooms = store.rooms().to_vec();
        assert!(matches!(
            store.mark_clean("999"),
            Err(PmsError::NotFound(_))
        ));
        assert_eq!(store.rooms(), rooms.as_slice());
    }

    #[test]
    fn maintenance_is_rejected_for_occupied_rooms() {
        let mut store = store();
        store.check_in("R-1003").unwrap();
        assert!(matches!(
            store.report_maintenance("109"),
            Err(PmsError::InvalidTransition(_))
        ));
        assert_eq!(room_status(&store, "109"), RoomStatus::Occupied);

        let room = store.report_maintenance("102").unwrap();
        assert_eq!(room.status, RoomStatus::Maintenance);
    }

    #[test]
    fn housekeeping_queue_lists_dirty_and_maintenance_rooms() {
        let store = store();
        let queue: Vec<_> = store
            .housekeeping_queue()
            .map(|r| r.number.as_str())
            .collect();
        assert_eq!(queue, ["101", "106", "108", "111"]);
    }

    #[test]
    fn metrics_add_up_to_room_count() {
        let mut store = store();
        store.check_in("R-1003").unwrap();
        let metrics = store.metrics();
        assert_eq!(metrics.total_rooms, 14);
        assert_eq!(metrics.occupied, 1);
        assert_eq!(metrics.dirty, 4);
        assert_eq!(metrics.available, 9);
        assert!(metrics.occupied + metrics.available <= metrics.total_rooms);
        assert_eq!(metrics.average_daily_rate, 200.0);
    }

    #[test]
    fn create_reservation_issues_next_id_and_prices_nights() {
        let mut store = store();
        let res = store
            .create_reservation(new_reservation("103", "2025-10-20", "2025-10-23"))
            .unwrap();
        assert_eq!(res.id, "R-1004");
        assert_eq!(res.status, ReservationStatus::Reserved);
        // room 103 is index 2: 80 + 2 * 25 per night
        assert_eq!(res.total, 390.0);
        assert_eq!(store.reservations().len(), 4);
    }

    #[test]
    fn create_reservation_rejects_unknown_room() {
        let mut store = store();
        let err = store
            .create_reservation(new_reservation("999", "2025-10-20", "2025-10-23"))
            .unwrap_err();
        assert!(matches!(err, PmsError::Validation(_)));
        assert_eq!(store.reservations().len(), 3);
    }

    #[test]
    fn create_reservation_rejects_overlapping_stay() {
        let mut store = store();
        let err = store
            .create_reservation(new_reservation("109", "2025-10-20", "2025-10-22"))
            .unwrap_err();
        assert!(matches!(err, PmsError::Conflict(_)));

        // back-to-back stays do not overlap
        store
            .create_reservation(new_reservation("109", "2025-10-21", "2025-10-22"))
            .unwrap();
    }

    #[test]
    fn next_id_follows_highest_live_reservation() {
        let mut store = store();
        store.cancel("R-1003").unwrap();
        let res = store
            .create_reservation(new_reservation("103", "2025-10-20", "2025-10-21"))
            .unwrap();
        assert_eq!(res.id, "R-1003");

        // earlier gaps are never filled
        store.cancel("R-1001").unwrap();
        let res = store
            .create_reservation(new_reservation("104", "2025-10-20", "2025-10-21"))
            .unwrap();
        assert_eq!(res.id, "R-1004");
    }

    #[test]
    fn empty_store_starts_ids_at_1001() {
        let mut store = PropertyStore::new(seed::sample_rooms(), Vec::new()).unwrap();
        let res = store
            .create_reservation(new_reservation("102", "2025-10-20", "2025-10-21"))
            .unwrap();
        assert_eq!(res.id, "R-1001");
    }

    #[test]
    fn cancel_removes_exactly_one_and_is_idempotent() {
        let mut store = store();
        let removed = store.cancel("R-1002").unwrap();
        assert_eq!(removed.id, "R-1002");
        assert_eq!(store.reservations().len(), 2);

        assert!(store.cancel("R-1002").is_none());
        assert_eq!(store.reservations().len(), 2);
    }

    #[test]
    fn filter_reservations_by_guest_or_id() {
        let store = store();
        let hits: Vec<_> = store
            .filter_reservations("carter")
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(hits, ["R-1002"]);
        assert_eq!(store.filter_reservations("R-10").count(), 3);
    }

    #[test]
    fn duplicate_room_numbers_are_rejected() {
        let mut rooms = seed::sample_rooms();
        rooms[1].number = rooms[0].number.clone();
        let err = PropertyStore::new(rooms, Vec::new()).unwrap_err();
        assert!(matches!(err, PmsError::Validation(_)));
    }

    #[test]
    fn malformed_reservation_ids_are_rejected() {
        let mut reservations = seed::sample_reservations().unwrap();
        reservations[0].id = "1001".to_string();
        assert!(PropertyStore::new(seed::sample_rooms(), reservations).is_err());
    }

    #[test]
    fn nan_reservation_total_is_rejected() {
        let mut reservations = seed::sample_reservations().unwrap();
        reservations[0].total = f64::NAN;
        let err = PropertyStore::new(seed::sample_rooms(), reservations).unwrap_err();
        assert!(matches!(err, PmsError::Validation(_)));
    }

    #[test]
    fn check_in_with_unknown_room_still_checks_in_reservation() {
        let mut reservations = seed::sample_reservations().unwrap();
        reservations[1].room = "999".to_string();
        let mut store = PropertyStore::new(seed::sample_rooms(), reservations).unwrap();
        let rooms = store.rooms().to_vec();

        let res = store.check_in("R-1002").unwrap();
        assert_eq!(res.status, ReservationStatus::CheckedIn);
        assert_eq!(
            store.reservation("R-1002").unwrap().status,
            ReservationStatus::CheckedIn
        );
        assert_eq!(store.rooms(), rooms.as_slice());
    }

    #[test]
    fn maintenance_on_maintenance_room_changes_nothing() {
        let mut store = store();
        let before = store.rooms().to_vec();

        let room = store.report_maintenance("108").unwrap();
        assert_eq!(room.status, RoomStatus::Maintenance);
        assert_eq!(store.rooms(), before.as_slice());
    }

    #[test]
    fn check_out_after_mid_stay_clean_leaves_room_as_is() {
        let mut store = store();
        store.check_in("R-1003").unwrap();
        store.mark_clean("109").unwrap();

        let res = store.check_out("R-1003").unwrap();
        assert_eq!(res.status, ReservationStatus::CheckedOut);
        assert_eq!(room_status(&store, "109"), RoomStatus::Available);
    }
}
