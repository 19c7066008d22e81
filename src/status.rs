//! HTTP status surface for the catalog.
//!
//! - `GET /health`: liveness, always `ok`
//! - `GET /status`: service identity and per-role component counts
//! - `GET /components/{role}`: descriptors registered under one role

use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::component::ComponentRole;
use crate::context::AppContext;
use crate::registry::Summary;

#[derive(Debug, Serialize)]
struct StatusResponse<'a> {
    service: &'a str,
    version: &'a str,
    components: Summary,
    total: usize,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Mount every status route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(status).service(components);
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

#[get("/status")]
#[tracing::instrument(skip(context))]
async fn status(context: web::Data<AppContext>) -> impl Responder {
    let telemetry = &context.config().telemetry;
    let summary = context.summary();
    let total = summary.values().sum();
    HttpResponse::Ok().json(StatusResponse {
        service: &telemetry.service_name,
        version: &telemetry.service_version,
        components: summary,
        total,
    })
}

#[get("/components/{role}")]
#[tracing::instrument(skip(context))]
async fn components(context: web::Data<AppContext>, role: web::Path<String>) -> impl Responder {
    match role.parse::<ComponentRole>() {
        Ok(role) => HttpResponse::Ok().json(context.describe(role)),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected component listing");
            HttpResponse::NotFound().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}
