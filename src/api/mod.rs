//! Events API client.
//!
//! Thin glue over `reqwest`: translate filters, issue the request, narrow the
//! answer when the translation had to over-fetch. The session cookie is
//! forwarded as-is; the API is the only party that verifies it.

use reqwest::header::COOKIE;
use reqwest::{RequestBuilder, Response};
use serde::Deserialize;

use crate::events::{narrow_events, needs_post_filter, translate, Event};
use crate::filters::{Filters, Role};
use crate::types::{ApiConfig, Config, Error, EventId, Result};
use crate::validation::validate_non_empty;

/// Client for the volunteer API's events and roles endpoints.
#[derive(Debug, Clone)]
pub struct EventsApi {
    base_url: String,
    cookie_name: String,
    session: Option<String>,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl EventsApi {
    pub fn new(api: &ApiConfig) -> Result<Self> {
        validate_non_empty(&api.base_url, "api.base_url")?;
        let client = reqwest::Client::builder()
            .timeout(api.request_timeout)
            .build()?;
        Ok(Self {
            base_url: api.base_url.trim_end_matches('/').to_string(),
            cookie_name: "session".to_string(),
            session: None,
            client,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let mut api = Self::new(&config.api)?;
        api.cookie_name = config.session.cookie_name.clone();
        Ok(api)
    }

    /// Forward `token` as the session cookie on every request.
    pub fn with_session(mut self, token: impl Into<String>) -> Self {
        self.session = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let request = self.client.get(format!("{}{}", self.base_url, path));
        match &self.session {
            Some(token) => request.header(COOKIE, format!("{}={}", self.cookie_name, token)),
            None => request,
        }
    }

    /// List events matching `filters` for a caller holding `roles`.
    pub async fn list_events(&self, filters: &Filters, roles: &[Role]) -> Result<Vec<Event>> {
        let params = translate(filters, roles);
        tracing::debug!(query = %params, "list_events");

        let response = self.get("/api/events").query(&params).send().await?;
        let events: Vec<Event> = ensure_success(response, "Failed to load events.")
            .await?
            .json()
            .await?;

        if needs_post_filter(filters, roles) {
            let fetched = events.len();
            let narrowed = narrow_events(events, filters, roles);
            tracing::debug!(fetched, kept = narrowed.len(), "events_narrowed");
            return Ok(narrowed);
        }
        Ok(events)
    }

    pub async fn get_event(&self, id: EventId) -> Result<Event> {
        let response = self.get(&format!("/api/events/{id}")).send().await?;
        Ok(ensure_success(response, "Event not found.")
            .await?
            .json()
            .await?)
    }

    /// Roles of the current session. Any failure yields no roles, which
    /// scopes restricted listings down to nothing rather than erroring.
    pub async fn fetch_roles(&self) -> Vec<Role> {
        let result = async {
            let response = self.get("/api/roles").send().await?;
            let roles: Vec<Role> = ensure_success(response, "Failed to load roles.")
                .await?
                .json()
                .await?;
            Ok::<_, Error>(roles)
        }
        .await;

        result.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "fetch_roles_failed");
            Vec::new()
        })
    }
}

/// Pass 2xx responses through; map anything else to `Error::Status` with the
/// body's `detail` when it has one.
async fn ensure_success(response: Response, fallback: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail)
        .unwrap_or_else(|| fallback.to_string());
    Err(Error::status(status.as_u16(), detail))
}
