use actix_web::HttpResponse;

use crate::domain::SERVICE_NAME;

/// Liveness report
#[derive(serde::Serialize)]
struct HealthStatus {
    status: &'static str,
    service: &'static str,
}

/// Health check handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus {
        status: "healthy",
        service: SERVICE_NAME,
    })
}
