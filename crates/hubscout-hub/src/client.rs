//! Hugging Face hub client.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::LINK;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument, warn};

use hubscout_core::defaults::{HUB_REVISION, HUB_SLOW_MS};
use hubscout_core::{
    Error, HubSearchParams, ModelCursor, ModelSource, RemoteModelRecord, Result,
};

use crate::config::HubConfig;
use crate::error::{lookup_error, search_error};
use crate::link::parse_next_link;
use crate::types::HubModel;

/// Model hub client backed by the public HTTP API.
#[derive(Clone)]
pub struct HubClient {
    client: Client,
    config: HubConfig,
}

impl HubClient {
    /// Create a new hub client with the given configuration.
    pub fn new(config: HubConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("hubscout/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            base_url = %config.base_url,
            authenticated = config.token.is_some(),
            page_limit = config.page_limit,
            "Initializing hub client"
        );

        Ok(Self { client, config })
    }

    /// Create with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(HubConfig::default())
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(HubConfig::from_env())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    /// URL of the first search page.
    pub fn search_url(&self, params: &HubSearchParams) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::with_capacity(7);
        if let Some(ref search) = params.search {
            pairs.push(("search", search.clone()));
        }
        pairs.push(("sort", params.sort.as_str().to_string()));
        pairs.push(("direction", params.direction.as_hub_param().to_string()));
        pairs.push(("full", "true".to_string()));
        pairs.push(("limit", self.config.page_limit.to_string()));
        if let Some(ref tag) = params.task_tag {
            pairs.push(("pipeline_tag", tag.clone()));
        }
        if let Some(ref library) = params.library {
            pairs.push(("library", library.clone()));
        }

        let query = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}/api/models?{}", self.config.base_url, query)
    }
}

/// Percent-encode each `/`-separated segment, keeping the separators.
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Attach the bearer token, if any.
fn authorize(req: reqwest::RequestBuilder, token: Option<&str>) -> reqwest::RequestBuilder {
    match token {
        Some(token) => req.bearer_auth(token),
        None => req,
    }
}

/// Cursor over hub search results.
///
/// Holds at most one upstream page. The next page is requested only when the
/// buffer is empty and another record is asked for.
pub struct HubCursor {
    client: Client,
    base_url: String,
    token: Option<String>,
    next_url: Option<String>,
    buffer: VecDeque<RemoteModelRecord>,
    pages_fetched: usize,
}

impl HubCursor {
    fn new(client: &HubClient, first_url: String) -> Self {
        Self {
            client: client.client.clone(),
            base_url: client.config.base_url.clone(),
            token: client.config.token.clone(),
            next_url: Some(first_url),
            buffer: VecDeque::new(),
            pages_fetched: 0,
        }
    }

    /// Number of upstream HTTP pages requested so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    async fn fetch(&mut self, url: &str) -> Result<()> {
        let started = Instant::now();
        let response = authorize(self.client.get(url), self.token.as_deref())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), url, "Hub search request failed");
            return Err(search_error(status.as_u16(), &body));
        }

        let next = response
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_next_link)
            .map(|link| {
                if link.starts_with('/') {
                    format!("{}{}", self.base_url, link)
                } else {
                    link
                }
            });

        let body = response.text().await?;
        let models: Vec<HubModel> = serde_json::from_str(&body)?;
        self.pages_fetched += 1;

        let elapsed = started.elapsed().as_millis() as u64;
        debug!(
            subsystem = "hub",
            component = "cursor",
            upstream_page = self.pages_fetched,
            records = models.len(),
            has_next = next.is_some(),
            duration_ms = elapsed,
            "Fetched hub search page"
        );
        if elapsed > HUB_SLOW_MS {
            warn!(duration_ms = elapsed, slow = true, url, "Slow hub search request");
        }

        self.buffer
            .extend(models.into_iter().map(RemoteModelRecord::from));
        self.next_url = next;
        Ok(())
    }
}

#[async_trait]
impl ModelCursor for HubCursor {
    async fn next_record(&mut self) -> Result<Option<RemoteModelRecord>> {
        loop {
            if let Some(record) = self.buffer.pop_front() {
                return Ok(Some(record));
            }
            let Some(url) = self.next_url.take() else {
                return Ok(None);
            };
            self.fetch(&url).await?;
        }
    }
}

#[async_trait]
impl ModelSource for HubClient {
    fn search(&self, params: HubSearchParams) -> Box<dyn ModelCursor> {
        Box::new(HubCursor::new(self, self.search_url(&params)))
    }

    #[instrument(skip(self), fields(subsystem = "hub", component = "client", op = "model_info"))]
    async fn model_info(&self, model_id: &str) -> Result<RemoteModelRecord> {
        let started = Instant::now();
        let url = format!(
            "{}/api/models/{}?blobs=true",
            self.config.base_url,
            encode_path(model_id)
        );
        let response = authorize(self.client.get(&url), self.config.token.as_deref())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "Model lookup failed");
            return Err(lookup_error(status.as_u16(), model_id, &body));
        }

        let body = response.text().await?;
        let model: HubModel = serde_json::from_str(&body)?;
        debug!(
            files = model.siblings.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Fetched model info"
        );
        Ok(model.into())
    }

    #[instrument(skip(self), fields(subsystem = "hub", component = "client", op = "readme"))]
    async fn readme(&self, model_id: &str) -> Result<Option<String>> {
        let url = self.file_url(model_id, "README.md");
        let response = authorize(self.client.get(&url), self.config.token.as_deref())
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                debug!("Model has no README");
                Ok(None)
            }
            status if status.is_success() => Ok(Some(response.text().await?)),
            status => Err(Error::Upstream(format!(
                "README download for '{}' returned {}",
                model_id, status
            ))),
        }
    }

    fn file_url(&self, model_id: &str, filename: &str) -> String {
        format!(
            "{}/{}/resolve/{}/{}",
            self.config.base_url,
            encode_path(model_id),
            HUB_REVISION,
            encode_path(filename)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hubscout_core::SortKey;

    fn client() -> HubClient {
        HubClient::new(HubConfig::default().with_page_limit(50)).unwrap()
    }

    #[test]
    fn test_search_url_full() {
        let url = client().search_url(&HubSearchParams {
            search: Some("llama 3".to_string()),
            sort: SortKey::Likes,
            task_tag: Some("text-generation".to_string()),
            library: Some("gguf".to_string()),
            ..Default::default()
        });
        assert_eq!(
            url,
            "https://huggingface.co/api/models?search=llama%203&sort=likes&direction=-1\
             &full=true&limit=50&pipeline_tag=text-generation&library=gguf"
        );
    }

    #[test]
    fn test_search_url_omits_unset_filters() {
        let url = client().search_url(&HubSearchParams::default());
        assert_eq!(
            url,
            "https://huggingface.co/api/models?sort=downloads&direction=-1&full=true&limit=50"
        );
    }

    #[test]
    fn test_file_url() {
        assert_eq!(
            client().file_url("TheBloke/Llama-2-7B-GGUF", "llama-2-7b.Q4_K_M.gguf"),
            "https://huggingface.co/TheBloke/Llama-2-7B-GGUF/resolve/main/llama-2-7b.Q4_K_M.gguf"
        );
    }

    #[test]
    fn test_file_url_keeps_subdirectories() {
        assert_eq!(
            client().file_url("org/m", "q4/model file.gguf"),
            "https://huggingface.co/org/m/resolve/main/q4/model%20file.gguf"
        );
    }

    #[test]
    fn test_search_is_lazy() {
        // Creating a cursor performs no request; nothing listens on this port.
        let c = HubClient::new(HubConfig::default().with_base_url("http://127.0.0.1:9")).unwrap();
        let _cursor = c.search(HubSearchParams::default());
    }
}
