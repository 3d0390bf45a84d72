pub mod metrics;
pub mod reservation;
pub mod room;

pub use metrics::Metrics;
pub use reservation::{NewReservation, Reservation, ReservationStatus};
pub use room::{Room, RoomEvent, RoomStatus, RoomType, StatusFilter};
