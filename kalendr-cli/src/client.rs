//! HTTP client for the kalendr events API.

use anyhow::{Context, Result};
use serde::Deserialize;

use kalendr_core::{Event, EventCreate};

use crate::controller::EventStore;

/// HTTP client for the events API.
///
/// Four fire-and-await calls against the configured base endpoint; no
/// retries, no caching. Non-2xx responses become errors carrying the
/// HTTP status and the server's error message.
pub struct EventsClient {
    http: reqwest::Client,
    base_url: String,
}

/// Error body returned by kalendr-server.
#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

impl EventsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        EventsClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// GET /events
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let resp = self
            .http
            .get(format!("{}/events", self.base_url))
            .send()
            .await
            .context("Failed to connect to events API")?;

        Self::check(resp).await?.json().await.context("Invalid event list in response")
    }

    /// POST /events
    pub async fn create_event(&self, event: &EventCreate) -> Result<Event> {
        let resp = self
            .http
            .post(format!("{}/events", self.base_url))
            .json(event)
            .send()
            .await
            .context("Failed to connect to events API")?;

        Self::check(resp).await?.json().await.context("Invalid event in response")
    }

    /// PUT /events/:id (full replace)
    pub async fn update_event(&self, id: &str, event: &EventCreate) -> Result<Event> {
        let resp = self
            .http
            .put(format!("{}/events/{}", self.base_url, id))
            .json(event)
            .send()
            .await
            .context("Failed to connect to events API")?;

        Self::check(resp).await?.json().await.context("Invalid event in response")
    }

    /// DELETE /events/:id
    pub async fn delete_event(&self, id: &str) -> Result<()> {
        let resp = self
            .http
            .delete(format!("{}/events/{}", self.base_url, id))
            .send()
            .await
            .context("Failed to connect to events API")?;

        Self::check(resp).await?;
        Ok(())
    }

    /// Turn a non-2xx response into an error carrying the status and the
    /// server's message.
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = match resp.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };

        anyhow::bail!("{} ({})", message, status)
    }
}

impl EventStore for EventsClient {
    async fn list_events(&self) -> Result<Vec<Event>> {
        EventsClient::list_events(self).await
    }

    async fn create_event(&self, event: &EventCreate) -> Result<Event> {
        EventsClient::create_event(self, event).await
    }

    async fn update_event(&self, id: &str, event: &EventCreate) -> Result<Event> {
        EventsClient::update_event(self, id, event).await
    }

    async fn delete_event(&self, id: &str) -> Result<()> {
        EventsClient::delete_event(self, id).await
    }
}
