// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        AuditRecord, CreateAuditRequest, DeleteAuditRequest, DeleteAuditResponse,
        UpdateAuditRequest,
    },
    state::AppState,
};

pub mod audits;
pub mod health;

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route(
            "/api/audits",
            get(audits::list_audits)
                .post(audits::create_audit)
                .put(audits::update_audit)
                .delete(audits::delete_audit)
                .fallback(audits::method_not_allowed),
        )
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state);

    routes
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        audits::list_audits,
        audits::create_audit,
        audits::update_audit,
        audits::delete_audit,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            AuditRecord,
            CreateAuditRequest,
            UpdateAuditRequest,
            DeleteAuditRequest,
            DeleteAuditResponse,
            health::HealthResponse,
            health::ReadyResponse,
            health::HealthChecks
        )
    ),
    tags(
        (name = "Audits", description = "Audit report CRUD"),
        (name = "Health", description = "Liveness and readiness probes")
    )
)]
struct ApiDoc;
