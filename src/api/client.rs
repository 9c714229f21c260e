// SPDX-License-Identifier: MPL-2.0
//! HTTP plumbing shared by every endpoint.

use crate::app::config::ApiConfig;
use crate::error::{Error, Result};
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Client for the QA REST API.
///
/// Cloning is cheap; the connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Builds a client for `base_url` using the timeout and token from `config`.
    pub fn new(base_url: impl Into<String>, config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout().as_duration())
            .user_agent(concat!("QaConsole/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: config.token.clone().filter(|token| !token.is_empty()),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint path such as `/projetos/`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// `GET` an endpoint and decode its JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(path, "GET");
        let response = self.request(Method::GET, path).send().await?;
        let response = check(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// `POST` a JSON body. The response body is discarded.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        self.send(Method::POST, path, body).await
    }

    /// `PUT` a JSON body. The response body is discarded.
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        self.send(Method::PUT, path, body).await
    }

    async fn send<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: &B) -> Result<()> {
        tracing::debug!(%method, path, "sending");
        let response = self.request(method, path).json(body).send().await?;
        check(response).await?;
        Ok(())
    }

    /// Downloads an absolute URL, such as an evidence image.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().await?;
        let response = check(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// Turns a non-success response into [`Error::Status`] carrying the server's
/// `detail` text.
async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::Status {
        status: status.as_u16(),
        detail: extract_detail(&body).unwrap_or_default(),
    })
}

/// Extracts the human-readable reason from a FastAPI error body.
///
/// Handles both `{"detail": "..."}` and validation errors shaped like
/// `{"detail": [{"msg": "..."}, ...]}`.
#[must_use]
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(base, &ApiConfig::default()).expect("client builds")
    }

    #[test]
    fn url_joins_paths_without_double_slashes() {
        let client = client("http://localhost:8000/api/v1/");
        assert_eq!(client.url("/projetos/"), "http://localhost:8000/api/v1/projetos/");
        assert_eq!(client.url("defeitos/3"), "http://localhost:8000/api/v1/defeitos/3");
    }

    #[test]
    fn empty_token_is_ignored() {
        let config = ApiConfig {
            token: Some(String::new()),
            ..ApiConfig::default()
        };
        let client = ApiClient::new("http://x", &config).unwrap();
        assert!(client.token.is_none());
    }

    #[test]
    fn string_detail_is_extracted() {
        assert_eq!(
            extract_detail(r#"{"detail": "Projeto não encontrado"}"#).as_deref(),
            Some("Projeto não encontrado")
        );
    }

    #[test]
    fn validation_detail_messages_are_joined() {
        let body = r#"{"detail": [
            {"loc": ["body", "nome"], "msg": "field required"},
            {"loc": ["body", "modulo_id"], "msg": "value is not a valid integer"}
        ]}"#;
        assert_eq!(
            extract_detail(body).as_deref(),
            Some("field required; value is not a valid integer")
        );
    }

    #[test]
    fn non_json_or_missing_detail_yields_none() {
        assert_eq!(extract_detail("<html>502 Bad Gateway</html>"), None);
        assert_eq!(extract_detail(r#"{"error": "x"}"#), None);
        assert_eq!(extract_detail(r#"{"detail": []}"#), None);
    }
}
