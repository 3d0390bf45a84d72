pub mod channels;
pub mod metrics;
pub mod reservations;
pub mod rooms;

use std::sync::{Mutex, MutexGuard};

use actix_web::web;

use crate::error::PmsError;
use crate::store::PropertyStore;

/// Shared by all workers. Each request holds the lock for exactly one store
/// operation, which makes every operation atomic across rooms and
/// reservations.
pub struct AppState {
    store: Mutex<PropertyStore>,
}

impl AppState {
    pub fn new(store: PropertyStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, PropertyStore>, PmsError> {
        self.store
            .lock()
            .map_err(|_| PmsError::Internal("property store lock poisoned".to_string()))
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| PmsError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| PmsError::Validation(err.to_string()).into()),
    )
    .service(
        web::scope("/rooms")
            .route("", web::get().to(rooms::get_rooms))
            .route("/{number}", web::get().to(rooms::get_room))
            .route("/{number}/clean", web::post().to(rooms::mark_clean))
            .route(
                "/{number}/maintenance",
                web::post().to(rooms::report_maintenance),
            )
            .route("/{number}/notes", web::post().to(rooms::attach_note)),
    )
    .route("/housekeeping", web::get().to(rooms::get_housekeeping))
    .service(
        web::scope("/reservations")
            .route("", web::get().to(reservations::get_reservations))
            .route("", web::post().to(reservations::create_reservation))
            .route("/{id}", web::get().to(reservations::get_reservation))
            .route("/{id}", web::delete().to(reservations::cancel_reservation))
            .route("/{id}/checkin", web::post().to(reservations::check_in))
            .route("/{id}/checkout", web::post().to(reservations::check_out))
            .route("/{id}/charges", web::post().to(reservations::post_charge)),
    )
    .route("/channels/{name}/connect", web::post().to(channels::connect))
    .route("/metrics", web::get().to(metrics::get_metrics));
}
