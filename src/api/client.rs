//! Typed endpoints over an injectable [`Transport`].

use chrono::NaiveDate;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use super::types::{
    BalanceFilters, InvoiceFilters, Page, PageRequest, SyncRequest, XmlDownload,
    invoice_xml_file_name, is_xml_file_name,
};
use crate::core::clean;

/// Errors talking to the backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The configured base URL cannot carry a path.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// Rejected before anything was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Connection, TLS or timeout failure.
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response. `message` is the server's `error` field when it
    /// sent one.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Body was not the JSON shape the endpoint promises.
    #[error("unexpected response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    /// Multipart upload with a single `file` part.
    Xml { file_name: String, content: Vec<u8> },
}

/// One backend call, independent of how it is carried.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path segments below the API base, unescaped.
    pub path: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn get(path: &[&str]) -> Self {
        Self {
            method: Method::Get,
            path: path.iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn post(path: &[&str], body: RequestBody) -> Self {
        Self {
            method: Method::Post,
            body,
            ..Self::get(path)
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// `/segment/segment`, for logs and assertions.
    pub fn path_string(&self) -> String {
        format!("/{}", self.path.join("/"))
    }
}

/// Carries an [`ApiRequest`] to the backend and returns the decoded JSON body.
///
/// [`HttpTransport`](super::HttpTransport) is the production implementation;
/// tests substitute their own.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<Value, ApiError>> + Send;
}

/// Client for the OPME backend endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
}

#[derive(Deserialize)]
struct XmlEnvelope {
    data: XmlPayload,
}

#[derive(Deserialize)]
struct XmlPayload {
    xml_content: String,
    #[serde(default)]
    serie: Value,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Upload one invoice XML for parsing. Non-`.xml` names are refused locally.
    pub async fn upload_xml(&self, file_name: &str, content: Vec<u8>) -> Result<Value, ApiError> {
        if !is_xml_file_name(file_name) {
            return Err(ApiError::InvalidRequest(format!(
                "only XML files are accepted, got '{file_name}'"
            )));
        }
        let body = RequestBody::Xml {
            file_name: file_name.to_string(),
            content,
        };
        self.transport
            .send(ApiRequest::post(&["notas-fiscais", "upload-xml"], body))
            .await
    }

    /// Upload several XML files one after another.
    ///
    /// A failing file does not stop the rest; every file gets its own
    /// outcome, in input order.
    pub async fn upload_xml_batch<I>(&self, files: I) -> Vec<(String, Result<Value, ApiError>)>
    where
        I: IntoIterator<Item = (String, Vec<u8>)>,
    {
        let mut outcomes = Vec::new();
        for (file_name, content) in files {
            let outcome = self.upload_xml(&file_name, content).await;
            outcomes.push((file_name, outcome));
        }
        outcomes
    }

    /// Trigger a Mainô synchronization for `start..=end`.
    pub async fn sync_maino(&self, start: NaiveDate, end: NaiveDate) -> Result<Value, ApiError> {
        if start > end {
            return Err(ApiError::InvalidRequest(format!(
                "sync period starts after it ends ({start} > {end})"
            )));
        }
        let body = serde_json::to_value(SyncRequest::new(start, end))
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        self.transport
            .send(ApiRequest::post(
                &["notas-fiscais", "sync-maino"],
                RequestBody::Json(body),
            ))
            .await
    }

    pub async fn list_invoices(
        &self,
        filters: &InvoiceFilters,
        page: PageRequest,
    ) -> Result<Page<Value>, ApiError> {
        let mut query = Vec::new();
        page.push_query(&mut query);
        filters.push_query(&mut query);
        self.fetch(ApiRequest::get(&["notas-fiscais", "listar"]).with_query(query))
            .await
    }

    pub async fn invoice(&self, id: u64) -> Result<Value, ApiError> {
        let id = id.to_string();
        self.transport
            .send(ApiRequest::get(&["notas-fiscais", id.as_str()]))
            .await
    }

    /// Fetch the stored XML of an invoice and name it `NF_{numero}_{serie}.xml`.
    pub async fn invoice_xml(&self, id: u64, numero: &str) -> Result<XmlDownload, ApiError> {
        let id = id.to_string();
        let envelope: XmlEnvelope = self
            .fetch(ApiRequest::get(&["notas-fiscais", id.as_str(), "xml"]))
            .await?;
        let serie = match envelope.data.serie {
            Value::String(s) => s,
            Value::Null => String::new(),
            other => other.to_string(),
        };
        Ok(XmlDownload {
            file_name: invoice_xml_file_name(numero, &serie),
            content: envelope.data.xml_content,
        })
    }

    /// Whether the backend can reach Mainô (`success` flag of the response).
    pub async fn test_maino_connection(&self) -> Result<bool, ApiError> {
        let resp = self
            .transport
            .send(ApiRequest::get(&["maino", "test-maino"]))
            .await?;
        Ok(resp.get("success").and_then(Value::as_bool).unwrap_or(false))
    }

    pub async fn invoice_statistics(&self) -> Result<Value, ApiError> {
        self.transport
            .send(ApiRequest::get(&["notas-fiscais", "estatisticas"]))
            .await
    }

    pub async fn consult_balances(
        &self,
        filters: &BalanceFilters,
        page: PageRequest,
    ) -> Result<Page<Value>, ApiError> {
        let mut query = Vec::new();
        page.push_query(&mut query);
        filters.push_query(&mut query);
        self.fetch(ApiRequest::get(&["saldos", "consultar"]).with_query(query))
            .await
    }

    /// Balances of one client. Punctuation is stripped so a formatted
    /// CNPJ does not leak a `/` into the path.
    pub async fn client_balances(&self, cnpj: &str) -> Result<Value, ApiError> {
        let digits = clean(cnpj);
        if digits.is_empty() {
            return Err(ApiError::InvalidRequest("empty client CNPJ".into()));
        }
        self.transport
            .send(ApiRequest::get(&["saldos", "cliente", digits.as_str()]))
            .await
    }

    pub async fn product_balances(&self, code: &str) -> Result<Value, ApiError> {
        self.transport
            .send(ApiRequest::get(&["saldos", "produto", code]))
            .await
    }

    pub async fn balance_summary(&self) -> Result<Value, ApiError> {
        self.transport
            .send(ApiRequest::get(&["saldos", "resumo"]))
            .await
    }

    pub async fn search_clients(&self, term: &str) -> Result<Value, ApiError> {
        self.search("buscar-clientes", term).await
    }

    pub async fn search_products(&self, term: &str) -> Result<Value, ApiError> {
        self.search("buscar-produtos", term).await
    }

    pub async fn health(&self) -> Result<Value, ApiError> {
        self.transport.send(ApiRequest::get(&["health"])).await
    }

    async fn search(&self, endpoint: &str, term: &str) -> Result<Value, ApiError> {
        let query = vec![("q".to_string(), term.to_string())];
        self.transport
            .send(ApiRequest::get(&["saldos", endpoint]).with_query(query))
            .await
    }

    async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let value = self.transport.send(request).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
