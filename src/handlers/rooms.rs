use actix_web::{web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use super::AppState;
use crate::error::PmsError;
use crate::integrations::{Integrations, RoomNote};
use crate::models::{Room, StatusFilter};

#[derive(Deserialize)]
pub struct RoomSearch {
    pub query: Option<String>,
    /// "All" or one exact room status.
    pub status: Option<String>,
}

pub async fn get_rooms(
    state: web::Data<AppState>,
    params: web::Query<RoomSearch>,
) -> Result<HttpResponse, PmsError> {
    // `?status=&query=` is the unfiltered grid
    let filter = match params.status.as_deref().map(str::trim) {
        Some(status) if !status.is_empty() => status.parse()?,
        _ => StatusFilter::All,
    };
    let query = params.query.as_deref().map(str::trim).unwrap_or("");

    let store = state.lock()?;
    let rooms: Vec<Room> = store.filter_rooms(query, filter).cloned().collect();

    Ok(HttpResponse::Ok().json(rooms))
}

pub async fn get_room(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, PmsError> {
    let number = path.into_inner();
    let store = state.lock()?;
    Ok(HttpResponse::Ok().json(store.room(&number)?))
}

pub async fn mark_clean(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, PmsError> {
    let number = path.into_inner();
    let room = state.lock()?.mark_clean(&number)?;
    Ok(HttpResponse::Ok().json(room))
}

pub async fn report_maintenance(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, PmsError> {
    let number = path.into_inner();
    let room = state.lock()?.report_maintenance(&number)?;
    Ok(HttpResponse::Ok().json(room))
}

pub async fn get_housekeeping(state: web::Data<AppState>) -> Result<HttpResponse, PmsError> {
    let store = state.lock()?;
    let queue: Vec<Room> = store.housekeeping_queue().cloned().collect();
    Ok(HttpResponse::Ok().json(queue))
}

pub async fn attach_note(
    state: web::Data<AppState>,
    integrations: web::Data<Integrations>,
    path: web::Path<String>,
    body: web::Json<RoomNote>,
) -> Result<HttpResponse, PmsError> {
    let number = path.into_inner();
    state.lock()?.room(&number)?;

    let mut note = body.into_inner();
    note.validate()?;
    note.room = number;

    integrations.notes.attach_note(&note)?;
    Ok(HttpResponse::Created().json(note))
}
