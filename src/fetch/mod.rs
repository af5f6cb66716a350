//! Page fetching against the community backend.
//!
//! Owns the HTTP client, the page cursor and the fetch state machine. All
//! I/O failures are absorbed into [`FetchState::Errored`] with a readable
//! message rather than surfaced to the caller; the scroll path stays simple
//! and a failing backend is only retried on explicit user action.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};

use crate::config::Config;
use crate::errors::AppError;
use crate::models::{DeleteResponse, ListResponse, Member};
use crate::store::MemberStore;

/// Fetch lifecycle state, read by the scroll sentinel to decide whether a
/// visibility event may trigger the next page.
///
/// ```text
/// Idle --request_next_page--> Loading
/// Loading --success, full page--> Idle          (cursor advances)
/// Loading --success, short/empty page--> Exhausted
/// Loading --failure--> Errored                  (cursor unchanged)
/// Errored --request_next_page--> Loading        (explicit retry)
/// Exhausted: terminal until reset()
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Loading,
    Exhausted,
    Errored(String),
}

/// Incremental page fetcher for the member directory.
pub struct PageFetcher {
    client: Client,
    base_url: String,
    page_size: usize,
    cursor: u32,
    state: FetchState,
}

impl PageFetcher {
    /// Build a fetcher from configuration, with a preconfigured HTTP client.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = build_client(config.token.as_deref())?;
        Ok(Self {
            client,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
            page_size: config.page_size,
            cursor: 1,
            state: FetchState::Idle,
        })
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Page the next request will ask for. Starts at 1 and only advances on
    /// a successful full page, so a retry after an error refetches the same
    /// page.
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Fetch the next page and append it to the store.
    ///
    /// Single-flight: a call while a request is outstanding, or after the
    /// directory is exhausted, is a no-op. `Errored` is accepted as an entry
    /// point so an explicit user retry can refetch the failed page. Never
    /// returns an error; failures land in [`FetchState::Errored`].
    pub async fn request_next_page(&mut self, store: &mut MemberStore) {
        match self.state {
            FetchState::Idle | FetchState::Errored(_) => {}
            FetchState::Loading | FetchState::Exhausted => {
                tracing::debug!(state = ?self.state, "Ignoring page request");
                return;
            }
        }

        self.state = FetchState::Loading;
        tracing::debug!(page = self.cursor, "Requesting members page");

        match self.fetch_page().await {
            Ok(members) => {
                let returned = members.len();
                // Append before leaving Loading: an observer seeing Idle must
                // also see a store that already reflects this page.
                store.append_page(members);

                if returned < self.page_size {
                    tracing::info!(
                        page = self.cursor,
                        returned,
                        "Short page, directory exhausted"
                    );
                    self.state = FetchState::Exhausted;
                } else {
                    self.cursor += 1;
                    self.state = FetchState::Idle;
                }
            }
            Err(err) => {
                tracing::warn!(page = self.cursor, error = %err, "Page fetch failed");
                self.state = FetchState::Errored(err.message().to_string());
            }
        }
    }

    /// Back to page 1, state Idle. Does not touch the store; the screen
    /// clears it separately when a true restart is wanted.
    pub fn reset(&mut self) {
        self.cursor = 1;
        self.state = FetchState::Idle;
    }

    async fn fetch_page(&self) -> Result<Vec<Member>, AppError> {
        let url = format!(
            "{}/api/community?page={}&limit={}",
            self.base_url, self.cursor, self.page_size
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(server_error(status, response.text().await.ok()));
        }

        let body: ListResponse = response.json().await?;
        if !body.success {
            return Err(AppError::Server(
                body.message
                    .unwrap_or_else(|| "Backend reported failure".to_string()),
            ));
        }

        // Fail the whole page on any malformed record; partial pages would
        // desync the cursor from what the store actually holds.
        body.data
            .into_iter()
            .map(|raw| raw.validate())
            .collect()
    }

    /// Delete a member on the server. The caller removes the id from the
    /// store only after this returns `Ok` (no optimistic removal).
    pub async fn delete_member(&self, id: &str) -> Result<(), AppError> {
        let url = format!("{}/api/community/{}", self.base_url, id);

        let response = self.client.delete(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(server_error(status, response.text().await.ok()));
        }

        let body: DeleteResponse = response.json().await?;
        if body.success {
            Ok(())
        } else {
            Err(AppError::Server(
                body.message
                    .unwrap_or_else(|| "Delete rejected by backend".to_string()),
            ))
        }
    }
}

fn server_error(status: StatusCode, body: Option<String>) -> AppError {
    let detail = body
        .filter(|b| !b.trim().is_empty())
        .map(|b| format!(": {}", b.trim()))
        .unwrap_or_default();
    AppError::Server(format!("HTTP {}{}", status.as_u16(), detail))
}

/// Create a preconfigured HTTP client with required headers.
fn build_client(token: Option<&str>) -> Result<Client, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    if let Some(token) = token {
        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| AppError::Validation("Invalid bearer token value".to_string()))?;
        headers.insert(AUTHORIZATION, value);
    }

    Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| AppError::Network(format!("Failed to build HTTP client: {}", e)))
}
