use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Booking, BookingDraft, Language, LocalizedService, ServiceCategory};
use crate::services::{ai::menu, contact, i18n};
use crate::state::AppState;

// GET /api/services
#[derive(Deserialize)]
pub struct ServicesQuery {
    pub category: Option<String>,
    pub lang: Option<String>,
}

/// Full bilingual records, or single-language listings when `lang` is given.
pub async fn list_services(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ServicesQuery>,
) -> Result<Response, AppError> {
    let services = match query.category.as_deref() {
        Some(raw) => {
            let category = ServiceCategory::parse(raw)
                .ok_or_else(|| AppError::BadRequest(format!("unknown category: {raw}")))?;
            state.data.list_services_by_category(category).await?
        }
        None => state.data.list_services().await?,
    };

    let response = match query.lang.as_deref() {
        Some(lang) => {
            let lang = Language::parse(lang);
            let localized: Vec<LocalizedService<'_>> =
                services.iter().map(|s| s.localized(lang)).collect();
            Json(localized).into_response()
        }
        None => Json(services).into_response(),
    };
    Ok(response)
}

// POST /api/bookings
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBookingResponse {
    pub booking: Booking,
    pub whatsapp_link: String,
    pub call_link: String,
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<BookingDraft>,
) -> Result<(StatusCode, Json<CreatedBookingResponse>), AppError> {
    let booking = state.data.create_booking(draft).await?;

    let phone = &state.config.business_phone;
    let response = CreatedBookingResponse {
        whatsapp_link: contact::booking_follow_up(phone, &booking.id),
        call_link: contact::call_link(phone),
        booking,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

// POST /api/menu-suggestions
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSuggestionRequest {
    pub event_type: String,
    pub guests: u32,
    #[serde(default)]
    pub language: Language,
}

#[derive(Serialize)]
pub struct MenuSuggestionResponse {
    pub suggestion: String,
}

pub async fn menu_suggestions(
    State(state): State<Arc<AppState>>,
    Json(body): Json<MenuSuggestionRequest>,
) -> Json<MenuSuggestionResponse> {
    let suggestion =
        menu::suggest_menu(state.llm.as_ref(), &body.event_type, body.guests, body.language).await;
    Json(MenuSuggestionResponse { suggestion })
}

// GET /api/translations/:lang
pub async fn translations(Path(lang): Path<String>) -> Json<BTreeMap<&'static str, &'static str>> {
    Json(i18n::table(Language::parse(&lang)))
}

// GET /api/translations/:lang/:key
pub async fn translation(
    Path((lang, key)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let value = i18n::translate(Language::parse(&lang), &key)
        .ok_or_else(|| AppError::NotFound(format!("translation key {key}")))?;
    Ok(Json(serde_json::json!({ "key": key, "value": value })))
}
