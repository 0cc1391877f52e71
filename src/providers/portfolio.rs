//! Portfolio API client
//!
//! Fetches projects and skills from the backend. Any failure (unreachable
//! host, non-2xx status, undecodable body) is logged and swallowed: the caller
//! gets the hardcoded catalog copy instead. No retry, no backoff.

use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::catalog;
use crate::models::{AppError, AppResult, ClientConfig, ErrorCode, Project, SkillSet};
use crate::site::PageData;
use crate::utils::constants::{DEFAULT_API_URL, DEFAULT_UPSTREAM_TIMEOUT_SECS, USER_AGENT};

pub struct PortfolioClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl Default for PortfolioClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl PortfolioClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_url.clone()).with_timeout(config.timeout)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Fetching");

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::new(
                ErrorCode::UpstreamBadStatus,
                format!("GET {} returned {}", url, response.status()),
            ));
        }

        Ok(response.json::<T>().await?)
    }

    /// `GET /api/projects` without fallback
    pub async fn try_fetch_projects(&self) -> AppResult<Vec<Project>> {
        self.get_json("/api/projects").await
    }

    /// `GET /api/skills` without fallback
    pub async fn try_fetch_skills(&self) -> AppResult<SkillSet> {
        self.get_json("/api/skills").await
    }

    pub async fn fetch_projects(&self) -> Vec<Project> {
        match self.try_fetch_projects().await {
            Ok(projects) => projects,
            Err(e) => {
                warn!(code = e.code_str(), "Failed to fetch projects: {}", e.message);
                catalog::projects()
            }
        }
    }

    pub async fn fetch_skills(&self) -> SkillSet {
        match self.try_fetch_skills().await {
            Ok(skills) => skills,
            Err(e) => {
                warn!(code = e.code_str(), "Failed to fetch skills: {}", e.message);
                catalog::skills()
            }
        }
    }

    /// Everything the page renderer needs. Never fails.
    pub async fn fetch_page_data(&self) -> PageData {
        let (projects, skills) = tokio::join!(self.fetch_projects(), self.fetch_skills());
        PageData {
            projects,
            skills,
            experience: catalog::experience(),
        }
    }
}
