use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::leave::LeaveService;

/// Liveness of the service and its database connection.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Database reachable", body = Object, example = json!({ "status": "ok" })),
        (status = 503, description = "Database unreachable", body = Object, example = json!({ "status": "unavailable" }))
    ),
    tag = "Health"
)]
#[get("/health")]
pub async fn health(service: web::Data<LeaveService>) -> impl Responder {
    match service.ping().await {
        Ok(()) => HttpResponse::Ok().json(json!({ "status": "ok" })),
        Err(e) => {
            tracing::error!(error = %e, "health check failed");
            HttpResponse::ServiceUnavailable().json(json!({ "status": "unavailable" }))
        }
    }
}
