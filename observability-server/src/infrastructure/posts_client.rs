use crate::domain::error::DomainError;
use crate::domain::post::Post;
use reqwest::Client;
use tracing::{debug, error};

/// Client for the public posts API. Built once at start-up and shared by
/// every request; only the base URL is configurable.
#[derive(Clone)]
pub struct PostsClient {
    client: Client,
    base_url: String,
}

impl PostsClient {
    pub fn new(base_url: &str) -> Result<Self, DomainError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Ok(Self {
            client: Client::builder().build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_posts(&self) -> Result<Vec<Post>, DomainError> {
        let url = format!("{}/posts", self.base_url);

        let resp = self.client.get(&url).send().await.map_err(|e| {
            error!(url = %url, "posts request failed: {}", e);
            DomainError::from(e)
        })?;

        let status = resp.status();
        if !status.is_success() {
            error!(url = %url, status = status.as_u16(), "posts API returned an error");
            return Err(DomainError::Upstream(format!(
                "posts API responded with {}",
                status
            )));
        }

        let posts: Vec<Post> = resp.json().await.map_err(|e| {
            error!(url = %url, "invalid posts payload: {}", e);
            DomainError::from(e)
        })?;

        debug!(count = posts.len(), "posts fetched");
        Ok(posts)
    }
}
