// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::ApiError,
    models::{
        AuditRecord, CreateAuditRequest, DeleteAuditRequest, DeleteAuditResponse,
        UpdateAuditRequest,
    },
    state::AppState,
    storage::{AuditRepository, StorageError},
};

/// Verbs served by the audit endpoint, advertised in the `Allow` header.
const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE";

/// A field counts as present only when it is non-empty. Enum membership of
/// `severity` is not checked; any non-empty label is accepted and stored.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

fn store_error(err: StorageError) -> ApiError {
    match err {
        StorageError::NotFound(_) => ApiError::not_found("Audit not found"),
        err => {
            tracing::error!("audit store failure: {err}");
            ApiError::internal("Database error")
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/audits",
    tag = "Audits",
    responses(
        (status = 200, description = "All audit reports", body = [AuditRecord]),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_audits(
    State(state): State<AppState>,
) -> Result<Json<Vec<AuditRecord>>, ApiError> {
    let records = AuditRepository::new(&state.db)
        .list()
        .map_err(store_error)?;
    Ok(Json(records))
}

#[utoipa::path(
    post,
    path = "/api/audits",
    tag = "Audits",
    request_body = CreateAuditRequest,
    responses(
        (status = 201, description = "Created audit report", body = AuditRecord),
        (status = 400, description = "Missing required field"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn create_audit(
    State(state): State<AppState>,
    Json(request): Json<CreateAuditRequest>,
) -> Result<(StatusCode, Json<AuditRecord>), ApiError> {
    let (Some(contract), Some(findings), Some(severity)) = (
        present(&request.contract),
        present(&request.findings),
        present(&request.severity),
    ) else {
        return Err(ApiError::bad_request("Missing required fields"));
    };

    let record = AuditRecord {
        id: Uuid::new_v4().to_string(),
        contract: contract.to_string(),
        findings: findings.to_string(),
        severity: severity.to_string(),
        created_at: Utc::now(),
    };

    AuditRepository::new(&state.db)
        .insert(&record)
        .map_err(store_error)?;

    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    put,
    path = "/api/audits",
    tag = "Audits",
    request_body = UpdateAuditRequest,
    responses(
        (status = 200, description = "Updated audit report", body = AuditRecord),
        (status = 400, description = "Missing required field"),
        (status = 404, description = "No audit with the given id"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn update_audit(
    State(state): State<AppState>,
    Json(request): Json<UpdateAuditRequest>,
) -> Result<Json<AuditRecord>, ApiError> {
    let Some(id) = present(&request.id) else {
        return Err(ApiError::bad_request("Missing audit ID"));
    };
    let (Some(contract), Some(findings), Some(severity)) = (
        present(&request.contract),
        present(&request.findings),
        present(&request.severity),
    ) else {
        return Err(ApiError::bad_request("Missing required fields"));
    };

    let record = AuditRepository::new(&state.db)
        .update(id, contract, findings, severity)
        .map_err(store_error)?;

    Ok(Json(record))
}

#[utoipa::path(
    delete,
    path = "/api/audits",
    tag = "Audits",
    request_body = DeleteAuditRequest,
    responses(
        (status = 200, description = "Audit report deleted", body = DeleteAuditResponse),
        (status = 400, description = "Missing audit id"),
        (status = 404, description = "No audit with the given id"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn delete_audit(
    State(state): State<AppState>,
    Json(request): Json<DeleteAuditRequest>,
) -> Result<Json<DeleteAuditResponse>, ApiError> {
    let Some(id) = present(&request.id) else {
        return Err(ApiError::bad_request("Missing audit ID"));
    };

    AuditRepository::new(&state.db)
        .delete(id)
        .map_err(store_error)?;

    Ok(Json(DeleteAuditResponse {
        message: "Audit deleted".to_string(),
    }))
}

/// Fallback for verbs the audit endpoint does not serve.
pub async fn method_not_allowed(method: Method) -> Response {
    let mut response =
        ApiError::method_not_allowed(format!("Method {method} not allowed")).into_response();
    response
        .headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static(ALLOWED_METHODS));
    response
}
