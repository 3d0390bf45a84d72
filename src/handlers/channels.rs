use actix_web::{web, HttpResponse};

use crate::error::PmsError;
use crate::integrations::Integrations;

pub async fn connect(
    integrations: web::Data<Integrations>,
    path: web::Path<String>,
) -> Result<HttpResponse, PmsError> {
    let channel = path.into_inner();
    integrations.channels.connect(&channel)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "channel": channel,
        "connected": true
    })))
}
