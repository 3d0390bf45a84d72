use actix_web::web;
use serde_json::{json, Value};

pub use hotel_pms::handlers::{configure, AppState};
pub use hotel_pms::integrations::Integrations;
pub use hotel_pms::models::RoomStatus;
pub use hotel_pms::PropertyStore;

/// App state over the sample property.
pub fn seeded_state() -> web::Data<AppState> {
    let store = PropertyStore::seeded().expect("sample property is valid");
    web::Data::new(AppState::new(store))
}

pub fn integrations() -> web::Data<Integrations> {
    web::Data::new(Integrations::default())
}

/// Builds the full API around `state` and initializes it as a test service.
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($state.clone())
                .app_data($crate::common::integrations())
                .configure($crate::common::configure),
        )
        .await
    };
}

pub fn new_reservation_body(room: &str, checkin: &str, checkout: &str) -> Value {
    json!({
        "guest": "Marta Reyes",
        "room": room,
        "checkin": checkin,
        "checkout": checkout
    })
}

pub fn room_status(state: &web::Data<AppState>, number: &str) -> RoomStatus {
    state
        .lock()
        .expect("store lock")
        .room(number)
        .expect("room exists")
        .status
}
