//! HTTP surface for the conversational booking flow.
//!
//! Endpoints:
//! - `POST /chat/preview` — classify a message into a priced, staffed
//!   booking proposal and open a negotiation session
//! - `POST /chat/modify`  — adjust urgency or helper on a live session
//! - `POST /chat/confirm` — finalize a session into the booking ledger
//! - `GET  /bookings`     — full confirmed-booking history
//! - `GET  /`             — service metadata and endpoint listing
//!
//! All state lives in the shared [`BookingDesk`]; handlers do no I/O
//! beyond in-memory map and list mutation. Failures always serialize as
//! `{"error": "..."}` — a 400 for validation and session problems, a 500
//! (logged, message-only) for anything internal.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use gharseva_core::{BookingDesk, BookingProposal, ConfirmedBooking, DeskError, SessionId};

#[derive(Clone)]
pub struct AppState {
    pub desk: Arc<BookingDesk>,
}

pub fn router(desk: Arc<BookingDesk>) -> Router {
    Router::new()
        .route("/", get(service_home))
        .route("/chat/preview", post(preview_booking))
        .route("/chat/confirm", post(confirm_booking))
        .route("/chat/modify", post(modify_booking))
        .route("/bookings", get(list_bookings))
        .layer(CorsLayer::permissive())
        .with_state(AppState { desk })
}

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub message: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ModifyRequest {
    pub session_id: Option<String>,
    pub modification: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmRequest {
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PreviewEnvelope {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub preview: PreviewBody,
}

#[derive(Debug, Serialize)]
pub struct PreviewBody {
    #[serde(flatten)]
    pub proposal: BookingProposal,
    pub session_id: SessionId,
}

#[derive(Debug, Serialize)]
pub struct ConfirmEnvelope {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub message: &'static str,
    pub booking: ConfirmedBooking,
}

#[derive(Debug, Serialize)]
pub struct BookingsResponse {
    pub total: usize,
    pub bookings: Vec<ConfirmedBooking>,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: serde_json::Value,
    pub total_bookings: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl From<DeskError> for ApiError {
    fn from(error: DeskError) -> Self {
        match error {
            DeskError::EmptyMessage => Self::BadRequest("Message required".to_owned()),
            DeskError::UnknownSession(_) => {
                Self::BadRequest("Invalid or expired session".to_owned())
            }
            DeskError::EmptyRoster { .. } => Self::Internal(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Internal(detail) => {
                error!(event_name = "chat.internal_error", detail = %detail, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected internal error occurred".to_owned(),
                )
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

pub async fn service_home(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        status: "online",
        service: "Gharseva Booking Assistant API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: serde_json::json!({
            "POST /chat/preview": "Preview booking from message",
            "POST /chat/confirm": "Confirm previewed booking",
            "POST /chat/modify": "Modify booking details",
            "GET /bookings": "Get all bookings",
        }),
        total_bookings: state.desk.total_bookings(),
    })
}

pub async fn preview_booking(
    State(state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> Result<Json<PreviewEnvelope>, ApiError> {
    let message = request.message.unwrap_or_default();
    let (session_id, proposal) =
        state.desk.preview(&message, request.user_id.as_deref(), &mut rand::thread_rng())?;

    info!(
        event_name = "chat.preview_created",
        session_id = %session_id,
        service = proposal.service_key.key(),
        priority = proposal.priority.label(),
        price = proposal.price_value,
        "booking preview created"
    );

    Ok(Json(PreviewEnvelope {
        kind: "preview",
        message: None,
        preview: PreviewBody { proposal, session_id },
    }))
}

pub async fn modify_booking(
    State(state): State<AppState>,
    Json(request): Json<ModifyRequest>,
) -> Result<Json<PreviewEnvelope>, ApiError> {
    let session_id = SessionId(
        request.session_id.ok_or_else(|| ApiError::BadRequest("Invalid session".to_owned()))?,
    );
    let modification = request.modification.unwrap_or_default();

    let proposal =
        state.desk.modify(&session_id, &modification, &mut rand::thread_rng()).map_err(
            |error| match error {
                DeskError::UnknownSession(_) => ApiError::BadRequest("Invalid session".to_owned()),
                other => other.into(),
            },
        )?;

    info!(
        event_name = "chat.preview_modified",
        session_id = %session_id,
        priority = proposal.priority.label(),
        price = proposal.price_value,
        "booking preview modified"
    );

    Ok(Json(PreviewEnvelope {
        kind: "preview",
        message: Some("Updated your booking details:"),
        preview: PreviewBody { proposal, session_id },
    }))
}

pub async fn confirm_booking(
    State(state): State<AppState>,
    Json(request): Json<ConfirmRequest>,
) -> Result<(StatusCode, Json<ConfirmEnvelope>), ApiError> {
    let session_id = SessionId(request.session_id.ok_or_else(|| {
        ApiError::BadRequest("Invalid or expired session".to_owned())
    })?);

    let booking = state.desk.confirm(&session_id)?;

    info!(
        event_name = "chat.booking_confirmed",
        session_id = %session_id,
        booking_id = %booking.booking_id,
        price = %booking.price_estimate,
        "booking confirmed"
    );

    Ok((
        StatusCode::CREATED,
        Json(ConfirmEnvelope {
            kind: "confirmed",
            message: "Booking confirmed successfully!",
            booking,
        }),
    ))
}

pub async fn list_bookings(State(state): State<AppState>) -> Json<BookingsResponse> {
    let (total, bookings) = state.desk.bookings();
    Json(BookingsResponse { total, bookings })
}
