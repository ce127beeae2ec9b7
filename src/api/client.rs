// src/api/client.rs
//! HTTP client wrapper for the regulations.gov API.
//!
//! A single `reqwest::Client` (one connection pool) serves the whole run.
//! The pool is freed when the inner client drops with its owning
//! [`RegulationsHttpClient`]; the `Drop` impl here only logs the close.

use super::parser;
use super::types::{CommentPage, CommentQuery};
use crate::constants::{COMMENTS_ENDPOINT, DOCUMENT_DETAILS_ENDPOINT};
use crate::error::{AppError, ResourceKind};
use crate::model::{Comment, Document};
use crate::types::{ApiKey, BaseUrl, CommentId, DocumentId};
use reqwest::{header, Client, Response};
use url::Url;

/// A thin wrapper around reqwest Client for regulations.gov requests.
pub struct RegulationsHttpClient {
    client: Client,
    base_url: BaseUrl,
}

impl RegulationsHttpClient {
    /// Opens the session. `api_key` is sent as `X-Api-Key` when present.
    pub fn new(base_url: BaseUrl, api_key: Option<&ApiKey>) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        log::debug!("Opened regulations.gov session for {}", base_url);
        Ok(Self { client, base_url })
    }

    /// Creates the default headers for every request.
    fn create_headers(api_key: Option<&ApiKey>) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        if let Some(key) = api_key {
            let mut value = header::HeaderValue::from_str(key.as_str()).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API key format: {}", e))
            })?;
            value.set_sensitive(true);
            headers.insert("X-Api-Key", value);
        }

        Ok(headers)
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Makes a GET request to a fully built URL.
    pub async fn get(&self, url: Url) -> Result<Response, AppError> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        log::debug!("-> {}", response.status());
        Ok(response)
    }

    fn document_details_url(&self, id: &str) -> Url {
        self.base_url.join_segments([DOCUMENT_DETAILS_ENDPOINT, id])
    }

    fn comments_url(&self, query: &CommentQuery) -> Url {
        let mut url = self.base_url.join_segments([COMMENTS_ENDPOINT]);
        url.query_pairs_mut().extend_pairs(query.to_params());
        url
    }

    /// Fetches a `documentdetails` record, mapping a non-success status to
    /// [`AppError::NotFound`].
    async fn get_details(
        &self,
        kind: ResourceKind,
        id: &str,
    ) -> Result<ApiResponse<String>, AppError> {
        let response = self.get(self.document_details_url(id)).await?;
        let result = extract_response_text(response).await?;
        if !result.status.is_success() {
            return Err(AppError::NotFound {
                kind,
                id: id.to_string(),
                status: result.status,
            });
        }
        Ok(result)
    }
}

impl Drop for RegulationsHttpClient {
    fn drop(&mut self) {
        log::debug!("Closed regulations.gov session for {}", self.base_url);
    }
}

#[async_trait::async_trait]
impl super::RegulationsRepository for RegulationsHttpClient {
    async fn retrieve_document(&self, id: &DocumentId) -> Result<Document, AppError> {
        let result = self.get_details(ResourceKind::Document, id.as_str()).await?;
        parser::parse_document_response(result, id)
    }

    async fn retrieve_comment_page(&self, query: &CommentQuery) -> Result<CommentPage, AppError> {
        let response = self.get(self.comments_url(query)).await?;
        let result = extract_response_text(response).await?;
        parser::parse_comment_page(result)
    }

    async fn retrieve_comment(&self, id: &CommentId) -> Result<Comment, AppError> {
        let result = self.get_details(ResourceKind::Comment, id.as_str()).await?;
        parser::parse_comment_response(result, id)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn client() -> RegulationsHttpClient {
        let base = BaseUrl::parse("https://beta.regulations.gov/api").unwrap();
        RegulationsHttpClient::new(base, None).unwrap()
    }

    #[test]
    fn comments_url_encodes_bracketed_params() {
        let day = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
        let query = CommentQuery::first_page("0900006484", day);
        let url = client().comments_url(&query);

        assert_eq!(url.path(), "/api/comments");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("filter[commentOnId]".to_string(), "0900006484".to_string()),
                ("page[number]".to_string(), "1".to_string()),
                ("sort".to_string(), "-postedDate".to_string()),
                ("filter[postedDate]".to_string(), "03-01-2020".to_string()),
            ]
        );
    }

    #[test]
    fn details_url_shares_endpoint_for_documents_and_comments() {
        let url = client().document_details_url("FSA-2020-0004-0101");
        assert_eq!(
            url.as_str(),
            "https://beta.regulations.gov/api/documentdetails/FSA-2020-0004-0101"
        );
    }

    #[test]
    fn api_key_header_is_sensitive() {
        let key = ApiKey::new("DEMO_KEY").unwrap();
        let headers = RegulationsHttpClient::create_headers(Some(&key)).unwrap();
        let value = headers.get("X-Api-Key").unwrap();
        assert_eq!(value, "DEMO_KEY");
        assert!(value.is_sensitive());

        let headers = RegulationsHttpClient::create_headers(None).unwrap();
        assert!(headers.get("X-Api-Key").is_none());
    }
}
