//! Stateless HTTP client for the Simba-Watch backend.
//!
//! Only communication lives here: build the request, attach the bearer token
//! when one is supplied, and hand back the parsed JSON body. The backend
//! signals application-level failure inside the payload (`success: false`, or
//! a missing `token` on auth), so the body is decoded regardless of the HTTP
//! status code and callers inspect it themselves.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::CONFIG;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: DNS, connection refused, timeout. The request never
    /// produced a body.
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not the JSON shape we asked for.
    #[error("invalid response body: {0}")]
    Decode(String),
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.api_base_url.clone(),
        }
    }

    pub async fn get<T>(&self, path: &str, token: Option<&str>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = Request::get(&url);
        if let Some(token) = token {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn post<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = Request::post(&url);
        if let Some(token) = token {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn delete<T>(&self, path: &str, token: Option<&str>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = Request::delete(&url);
        if let Some(token) = token {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Append a percent-encoded `keywords=` query parameter. Empty or whitespace
/// keywords leave the path untouched, matching the backend's default search.
pub fn with_keywords(path: &str, keywords: &str) -> String {
    let keywords = keywords.trim();
    if keywords.is_empty() {
        path.to_string()
    } else {
        format!("{}?keywords={}", path, urlencoding::encode(keywords))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_keywords_leave_path_unchanged() {
        assert_eq!(
            with_keywords("/api/monitoring/tech-news", ""),
            "/api/monitoring/tech-news"
        );
        assert_eq!(
            with_keywords("/api/monitoring/tech-news", "   "),
            "/api/monitoring/tech-news"
        );
    }

    #[test]
    fn keywords_are_percent_encoded() {
        assert_eq!(
            with_keywords("/api/monitoring/tech-news", "AI, blockchain"),
            "/api/monitoring/tech-news?keywords=AI%2C%20blockchain"
        );
    }

    #[test]
    fn keywords_are_trimmed_before_encoding() {
        assert_eq!(
            with_keywords("/api/monitoring/twitter-mentions", " fintech "),
            "/api/monitoring/twitter-mentions?keywords=fintech"
        );
    }
}
