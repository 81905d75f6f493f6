//! HTTP client for the salaries REST backend.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response};

use super::SalaryApi;
use crate::config::{normalize_base_url, ClientConfig};
use crate::error::{Error, Result};
use crate::models::{SalaryDraft, SalaryEnvelope, SalaryId, SalaryRecord};
use crate::util::compact_text;

/// Collection path appended to the configured API base URL
pub const SALARIES_PATH: &str = "/salaries";

const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP client for salary operations.
#[derive(Debug, Clone)]
pub struct SalariesClient {
    base_url: String,
    client: reqwest::Client,
}

impl SalariesClient {
    /// Builds a client for an explicit API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into().as_str())?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { base_url, client })
    }

    /// Builds a client from resolved configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(config.api_base_url.as_str())
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, route: &str) -> String {
        format!("{}{SALARIES_PATH}{route}", self.base_url)
    }

    fn request(&self, method: Method, route: &str) -> RequestBuilder {
        self.client
            .request(method, self.endpoint(route))
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, JSON_CONTENT_TYPE)
    }

    async fn send(request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Http {
                status: status.as_u16(),
                body: compact_text(&body),
            });
        }
        Ok(response)
    }
}

impl SalaryApi for SalariesClient {
    async fn list_all(&self) -> Result<SalaryEnvelope> {
        tracing::debug!("GET {SALARIES_PATH}/");
        let response = Self::send(self.request(Method::GET, "/")).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn create(&self, draft: &SalaryDraft) -> Result<SalaryRecord> {
        tracing::debug!("POST {SALARIES_PATH}/add");
        let response = Self::send(self.request(Method::POST, "/add").json(draft)).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn update(&self, id: SalaryId, draft: &SalaryDraft) -> Result<()> {
        tracing::debug!("PATCH {SALARIES_PATH}/edit/{id}");
        Self::send(
            self.request(Method::PATCH, &format!("/edit/{id}"))
                .json(draft),
        )
        .await?;
        Ok(())
    }

    async fn remove(&self, id: SalaryId) -> Result<String> {
        tracing::debug!("DELETE {SALARIES_PATH}/delete/{id}");
        let response = Self::send(self.request(Method::DELETE, &format!("/delete/{id}"))).await?;
        let body = response.text().await?;
        Ok(delete_message(&body))
    }
}

/// Human-readable confirmation from a delete response body.
///
/// Plain text is used as-is; the backend's JSON envelope is reduced to the
/// deleted record's message or name.
fn delete_message(body: &str) -> String {
    let trimmed = body.trim();

    if let Ok(envelope) = serde_json::from_str::<SalaryEnvelope>(trimmed) {
        if let Some(record) = envelope.data.first() {
            return record
                .message
                .as_deref()
                .map(str::trim)
                .filter(|message| !message.is_empty())
                .map_or_else(
                    || format!("Salary for {} deleted", record.employee),
                    ToString::to_string,
                );
        }
    }

    if let Ok(text) = serde_json::from_str::<String>(trimmed) {
        return compact_text(&text);
    }

    if trimmed.is_empty() {
        "Salary deleted".to_string()
    } else {
        compact_text(trimmed)
    }
}
