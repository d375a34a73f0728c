//! HTTP client for the character API

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::errors::{ApiError, ApiResult};
use super::types::CharacterPage;

/// Anything that can produce a page of characters
///
/// The TUI only talks to this trait, so tests can swap in a fake source and
/// the HTTP layer stays at the edge.
#[async_trait]
pub trait CharacterSource: Send + Sync {
    async fn fetch_page(&self, page: u32) -> ApiResult<CharacterPage>;
}

/// reqwest-backed character source
#[derive(Debug, Clone)]
pub struct HttpCharacterClient {
    client: Client,
    base_url: String,
}

impl HttpCharacterClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn page_url(&self, page: u32) -> String {
        format!("{}/character?page={}", self.base_url.trim_end_matches('/'), page)
    }
}

#[async_trait]
impl CharacterSource for HttpCharacterClient {
    async fn fetch_page(&self, page: u32) -> ApiResult<CharacterPage> {
        let url = self.page_url(page);
        debug!("Fetching characters from: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Character API returned status {} for page {}", status, page);
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let data: CharacterPage = serde_json::from_str(&body)?;

        debug!(
            "Fetched page {} with {} characters ({} pages total)",
            page,
            data.results.len(),
            data.info.pages
        );
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url() {
        let client = HttpCharacterClient::new("https://rickandmortyapi.com/api");
        assert_eq!(
            client.page_url(3),
            "https://rickandmortyapi.com/api/character?page=3"
        );
    }

    #[test]
    fn test_page_url_trailing_slash() {
        let client = HttpCharacterClient::new("https://rickandmortyapi.com/api/");
        assert_eq!(
            client.page_url(1),
            "https://rickandmortyapi.com/api/character?page=1"
        );
    }
}
