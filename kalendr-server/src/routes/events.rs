//! Event endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post, put},
};
use serde::Serialize;
use serde_json::{Value, json};

use kalendr_core::{Event, EventCreate};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/events", get(list_events))
        .route("/events", post(create_event))
        .route("/events/{id}", put(update_event))
        .route("/events/{id}", delete(delete_event))
}

/// GET / - Service banner
async fn root() -> Json<Value> {
    Json(json!({ "message": "kalendr API is running", "version": "1.0.0" }))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "kalendr-server",
    })
}

/// GET /events - All events, ordered by start
async fn list_events(State(state): State<AppState>) -> Json<Vec<Event>> {
    Json(state.list())
}

/// POST /events - Create an event; the server assigns the id
async fn create_event(
    State(state): State<AppState>,
    Json(body): Json<EventCreate>,
) -> Json<Event> {
    Json(state.insert(body))
}

/// PUT /events/:id - Full-replace an existing event
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<EventCreate>,
) -> Result<Json<Event>, AppError> {
    state
        .update(&id, body)
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Event not found: {id}")))
}

/// DELETE /events/:id
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    if state.remove(&id) {
        Ok(Json(json!({ "message": "Event deleted successfully" })))
    } else {
        Err(AppError::not_found(format!("Event not found: {id}")))
    }
}
