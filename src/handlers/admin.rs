use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Booking, BookingStatus, ServiceItem, UpdateOutcome};
use crate::services::contact;
use crate::state::AppState;

/// Single shared password, compared as a plain string.
fn check_auth(headers: &HeaderMap, expected: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token != expected {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

// POST /api/admin/login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    if body.password != state.config.admin_password {
        tracing::warn!("rejected admin login");
        return Err(AppError::Unauthorized);
    }
    Ok(Json(serde_json::json!({"ok": true})))
}

// GET /api/admin/bookings
#[derive(Deserialize)]
pub struct BookingsQuery {
    pub status: Option<String>,
}

pub async fn get_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    check_auth(&headers, &state.config.admin_password)?;

    let status = match query.status.as_deref() {
        Some(raw) => Some(
            BookingStatus::parse(raw)
                .ok_or_else(|| AppError::BadRequest(format!("unknown status: {raw}")))?,
        ),
        None => None,
    };

    let mut bookings = state.data.list_bookings().await?;
    if let Some(status) = status {
        bookings.retain(|b| b.status == status);
    }
    Ok(Json(bookings))
}

// GET /api/admin/bookings/:id
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetailResponse {
    #[serde(flatten)]
    pub booking: Booking,
    pub call_link: String,
    pub whatsapp_link: String,
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<BookingDetailResponse>, AppError> {
    check_auth(&headers, &state.config.admin_password)?;

    let booking = state
        .data
        .get_booking(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("booking {id}")))?;

    Ok(Json(BookingDetailResponse {
        call_link: contact::call_link(&booking.mobile),
        whatsapp_link: contact::whatsapp_link(&booking.mobile, None),
        booking,
    }))
}

// POST /api/admin/bookings/:id/status
#[derive(Deserialize)]
pub struct StatusRequest {
    pub status: BookingStatus,
}

pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<StatusRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_password)?;

    match state.data.update_booking_status(&id, body.status).await? {
        UpdateOutcome::Updated => Ok(Json(
            serde_json::json!({"ok": true, "status": body.status.as_str()}),
        )),
        UpdateOutcome::NotFound => Err(AppError::NotFound(format!("booking {id}"))),
    }
}

// GET /api/admin/services
pub async fn get_services(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<ServiceItem>>, AppError> {
    check_auth(&headers, &state.config.admin_password)?;
    Ok(Json(state.data.list_services().await?))
}

// PUT /api/admin/services/:id
pub async fn update_service(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(item): Json<ServiceItem>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_password)?;

    if item.id != id {
        return Err(AppError::BadRequest(format!(
            "path id {id} does not match body id {}",
            item.id
        )));
    }

    match state.data.update_service(item).await? {
        UpdateOutcome::Updated => Ok(Json(serde_json::json!({"ok": true}))),
        UpdateOutcome::NotFound => Err(AppError::NotFound(format!("service {id}"))),
    }
}
