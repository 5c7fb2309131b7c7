//! HTTP client wrapper - talks to the API server for config, events, search
//! and profile updates

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::collaborators::{PeopleApi, RemoteClient};
use crate::config::Settings;
use crate::error::{Result, StoreError};
use crate::models::{Event, EventWindow, MainConfig, PersonUpdate, SearchQuery, SearchResults};

/// JSON API client
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(ApiClient { client, base_url })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(
            settings.api_url.clone(),
            Duration::from_secs(settings.request_timeout_secs),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `<base><collection>/<id>` with `id` percent-encoded as one path segment
    fn resource_url(&self, collection: &str, id: &str) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.url(collection))
            .map_err(|e| StoreError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| StoreError::InvalidUrl(self.base_url.clone()))?
            .push(id);
        Ok(url)
    }

    /// Send a request and decode its JSON body. An empty body decodes as null.
    async fn send_json<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        let url = response.url().to_string();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %url, "API request failed");
            return Err(StoreError::Status {
                status: status.as_u16(),
                url,
                body,
            });
        }

        let body = if body.trim().is_empty() { "null" } else { body.as_str() };
        Ok(serde_json::from_str(body)?)
    }
}

#[async_trait]
impl RemoteClient for ApiClient {
    async fn get_config(&self) -> Result<MainConfig> {
        let url = self.url("/api/config");
        tracing::debug!(url = %url, "Loading main config");
        self.send_json(self.client.get(&url)).await
    }

    async fn get_events(&self, window: EventWindow) -> Result<Vec<Event>> {
        let url = self.url("/api/data/events/last");
        let request = self.client.get(&url).query(&[
            ("after", window.after_param()),
            ("before", window.before_param()),
        ]);
        self.send_json(request).await
    }

    async fn search_data(&self, query: &SearchQuery) -> Result<SearchResults> {
        let url = self.url("/api/data/search");
        self.send_json(self.client.post(&url).json(query)).await
    }
}

#[async_trait]
impl PeopleApi for ApiClient {
    async fn update_person(&self, update: PersonUpdate) -> Result<()> {
        let url = self.resource_url("/api/data/persons", &update.id)?;
        let _: serde_json::Value = self.send_json(self.client.put(url).json(&update)).await?;
        Ok(())
    }
}
