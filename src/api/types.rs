//! Request and response shapes shared with the backend service.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::{OperationType, api_date};

/// Page size the dashboard requests by default.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// `page` / `per_page` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,
    pub per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// The given page at the default page size.
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub(crate) fn push_query(&self, query: &mut Vec<(String, String)>) {
        query.push(("page".into(), self.page.to_string()));
        query.push(("per_page".into(), self.per_page.to_string()));
    }
}

/// Pagination block of a list response. Fields the backend leaves out
/// take their [`Default`] values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    /// Total number of matching records.
    pub total: u64,
    /// Total number of pages.
    pub pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

/// State of a list view before anything was fetched: no pages at all.
impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            total: 0,
            pages: 0,
            has_next: false,
            has_prev: false,
        }
    }
}

impl Pagination {
    /// Stand-in for a response that came back without a pagination block.
    ///
    /// Unlike [`Pagination::default`] this reports a single page. Both
    /// values are what the dashboard has always shown; they are kept apart
    /// rather than reconciled.
    pub fn missing() -> Self {
        Self {
            pages: 1,
            ..Self::default()
        }
    }

    /// Whether previous/next controls should be rendered.
    pub fn has_multiple_pages(&self) -> bool {
        self.pages > 1
    }

    /// `"Página 2 de 5"`.
    pub fn label(&self) -> String {
        format!("Página {} de {}", self.page, self.pages)
    }
}

/// `{ data, pagination }` list envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl<T> Page<T> {
    /// The response's pagination, or [`Pagination::missing`].
    pub fn pagination_or_missing(&self) -> Pagination {
        self.pagination.clone().unwrap_or_else(Pagination::missing)
    }
}

/// Filters for the invoice list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceFilters {
    pub tipo_operacao: Option<OperationType>,
    /// Recipient CNPJ/CPF as typed; the backend matches on it.
    pub cliente_cnpj: Option<String>,
}

impl InvoiceFilters {
    pub(crate) fn push_query(&self, query: &mut Vec<(String, String)>) {
        push_param(query, "tipo_operacao", self.tipo_operacao.map(|op| op.code()));
        push_param(query, "cliente_cnpj", self.cliente_cnpj.as_deref());
    }
}

/// Filters for the stock balance search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceFilters {
    pub cliente_cnpj: Option<String>,
    pub cliente_nome: Option<String>,
    pub codigo_produto: Option<String>,
}

impl BalanceFilters {
    pub(crate) fn push_query(&self, query: &mut Vec<(String, String)>) {
        push_param(query, "cliente_cnpj", self.cliente_cnpj.as_deref());
        push_param(query, "cliente_nome", self.cliente_nome.as_deref());
        push_param(query, "codigo_produto", self.codigo_produto.as_deref());
    }
}

/// Empty values are left out of the query string entirely.
fn push_param(query: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        query.push((key.into(), value.into()));
    }
}

/// Body of the Mainô synchronization trigger. Dates are `DD/MM/YYYY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncRequest {
    pub data_inicio: String,
    pub data_fim: String,
}

impl SyncRequest {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            data_inicio: api_date(start),
            data_fim: api_date(end),
        }
    }
}

/// Preset sync window: the last `days` days up to and including `today`.
pub fn sync_period(today: NaiveDate, days: u32) -> (NaiveDate, NaiveDate) {
    let start = today
        .checked_sub_days(Days::new(days.into()))
        .unwrap_or(NaiveDate::MIN);
    (start, today)
}

/// Download name for an invoice XML, e.g. `NF_1234_1.xml`.
pub fn invoice_xml_file_name(numero: &str, serie: &str) -> String {
    format!("NF_{numero}_{serie}.xml")
}

/// Upload accepts `.xml` files only (case-insensitive).
pub fn is_xml_file_name(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".xml")
}

/// Raw XML of a stored invoice, ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDownload {
    pub file_name: String,
    pub content: String,
}
