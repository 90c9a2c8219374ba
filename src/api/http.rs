//! reqwest-backed [`Transport`].

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Url};
use serde_json::Value;
use tracing::{debug, error};

use super::client::{ApiError, ApiRequest, Method, RequestBody, Transport};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends [`ApiRequest`]s to `{base_url}/{path}` as JSON over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: Url,
    client: Client,
}

/// Builder for [`HttpTransport`].
#[derive(Debug)]
pub struct HttpTransportBuilder {
    base_url: String,
    timeout: Duration,
    client: Option<Client>,
}

impl HttpTransport {
    /// Start configuring a transport for the API rooted at `base_url`
    /// (e.g. `https://backend.example.com/api`).
    pub fn builder(base_url: impl Into<String>) -> HttpTransportBuilder {
        HttpTransportBuilder {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            client: None,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, request: &ApiRequest) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(&request.path);
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }
        Ok(url)
    }
}

impl HttpTransportBuilder {
    /// Per-request timeout (default: 30 s). Ignored when a client is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a preconfigured reqwest client (proxies, extra roots, ...).
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<HttpTransport, ApiError> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {e}", self.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(self.base_url));
        }
        let client = match self.client {
            Some(client) => client,
            None => Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?,
        };
        Ok(HttpTransport { base_url, client })
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = self.url_for(&request)?;
        debug!(method = ?request.method, path = %request.path_string(), "backend request");

        let builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        let builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.json(&body),
            RequestBody::Xml { file_name, content } => {
                let part = Part::bytes(content)
                    .file_name(file_name)
                    .mime_str("application/xml")
                    .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
                builder.multipart(Form::new().part("file", part))
            }
        };

        let result = execute(builder).await;
        if let Err(e) = &result {
            error!(path = %request.path.join("/"), error = %e, "API request failed");
        }
        result
    }
}

async fn execute(builder: RequestBuilder) -> Result<Value, ApiError> {
    let resp = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: error_message(status.as_u16(), &body),
        });
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// The server's `{"error": "..."}` text, or a generic status line.
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_owned))
        .unwrap_or_else(|| format!("HTTP error! status: {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base: &str) -> HttpTransport {
        HttpTransport::builder(base).build().unwrap()
    }

    #[test]
    fn url_joins_segments_under_base_path() {
        let t = transport("https://backend.example.com/api");
        let url = t.url_for(&ApiRequest::get(&["saldos", "resumo"])).unwrap();
        assert_eq!(url.as_str(), "https://backend.example.com/api/saldos/resumo");
    }

    #[test]
    fn url_tolerates_trailing_slash() {
        let t = transport("https://backend.example.com/api/");
        let url = t.url_for(&ApiRequest::get(&["health"])).unwrap();
        assert_eq!(url.as_str(), "https://backend.example.com/api/health");
    }

    #[test]
    fn url_escapes_segments_and_query() {
        let t = transport("https://backend.example.com/api");
        let req = ApiRequest::get(&["saldos", "produto", "ABC/01 X"])
            .with_query(vec![("q".into(), "São Paulo & Cia".into())]);
        let url = t.url_for(&req).unwrap();
        assert_eq!(url.path(), "/api/saldos/produto/ABC%2F01%20X");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("q".to_string(), "São Paulo & Cia".to_string())]);
    }

    #[test]
    fn rejects_unusable_base() {
        assert!(matches!(
            HttpTransport::builder("not a url").build(),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            HttpTransport::builder("mailto:ops@example.com").build(),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn error_message_prefers_server_text() {
        assert_eq!(
            error_message(400, r#"{"error":"Arquivo XML inválido"}"#),
            "Arquivo XML inválido"
        );
        assert_eq!(error_message(502, "<html>Bad Gateway</html>"), "HTTP error! status: 502");
        assert_eq!(error_message(500, r#"{"detail":"x"}"#), "HTTP error! status: 500");
    }
}
