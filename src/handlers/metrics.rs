use actix_web::{web, HttpResponse};

use super::AppState;
use crate::error::PmsError;

pub async fn get_metrics(state: web::Data<AppState>) -> Result<HttpResponse, PmsError> {
    let metrics = state.lock()?.metrics();
    Ok(HttpResponse::Ok().json(metrics))
}
