use actix_web::{web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use super::AppState;
use crate::error::PmsError;
use crate::integrations::{FolioCharge, Integrations};
use crate::models::{NewReservation, Reservation};

#[derive(Deserialize)]
pub struct ReservationSearch {
    /// Matches guest name or reservation id.
    pub query: Option<String>,
}

pub async fn get_reservations(
    state: web::Data<AppState>,
    params: web::Query<ReservationSearch>,
) -> Result<HttpResponse, PmsError> {
    let query = params.query.as_deref().unwrap_or("");
    let store = state.lock()?;
    let reservations: Vec<Reservation> = store.filter_reservations(query).cloned().collect();
    Ok(HttpResponse::Ok().json(reservations))
}

pub async fn create_reservation(
    state: web::Data<AppState>,
    body: web::Json<NewReservation>,
) -> Result<HttpResponse, PmsError> {
    let reservation = state.lock()?.create_reservation(body.into_inner())?;
    Ok(HttpResponse::Created().json(reservation))
}

pub async fn get_reservation(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, PmsError> {
    let id = path.into_inner();
    let store = state.lock()?;
    Ok(HttpResponse::Ok().json(store.reservation(&id)?))
}

pub async fn cancel_reservation(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, PmsError> {
    let id = path.into_inner();
    match state.lock()?.cancel(&id) {
        Some(removed) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": "Reservation cancelled",
            "id": removed.id,
            "refund_amount": removed.total
        }))),
        None => Err(PmsError::reservation_not_found(&id)),
    }
}

pub async fn check_in(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, PmsError> {
    let id = path.into_inner();
    let reservation = state.lock()?.check_in(&id)?;
    Ok(HttpResponse::Ok().json(reservation))
}

pub async fn check_out(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, PmsError> {
    let id = path.into_inner();
    let reservation = state.lock()?.check_out(&id)?;
    Ok(HttpResponse::Ok().json(reservation))
}

pub async fn post_charge(
    state: web::Data<AppState>,
    integrations: web::Data<Integrations>,
    path: web::Path<String>,
    body: web::Json<FolioCharge>,
) -> Result<HttpResponse, PmsError> {
    let id = path.into_inner();
    state.lock()?.reservation(&id)?;

    let mut charge = body.into_inner();
    charge.validate()?;
    charge.reservation_id = id;

    let receipt = integrations.billing.post_charge(&charge)?;
    Ok(HttpResponse::Created().json(receipt))
}
