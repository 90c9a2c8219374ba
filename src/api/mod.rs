//! Contract with the OPME backend service.
//!
//! XML parsing, balance accounting and the Mainô protocol all live in the
//! backend; this module only knows how to ask for them. The client takes
//! its [`Transport`] as a value, so there is no process-wide instance and
//! tests can swap the network out.
//!
//! # Example
//!
//! ```ignore
//! use opme::api::*;
//!
//! let transport = HttpTransport::builder("https://backend.example.com/api").build()?;
//! let client = ApiClient::new(transport);
//!
//! let page = client
//!     .consult_balances(&BalanceFilters::default(), PageRequest::default())
//!     .await?;
//! println!("{}", page.pagination_or_missing().label());
//! ```

mod client;
mod http;
mod types;

pub use client::{ApiClient, ApiError, ApiRequest, Method, RequestBody, Transport};
pub use http::{DEFAULT_TIMEOUT, HttpTransport, HttpTransportBuilder};
pub use types::{
    BalanceFilters, DEFAULT_PER_PAGE, InvoiceFilters, Page, PageRequest, Pagination, SyncRequest,
    XmlDownload, invoice_xml_file_name, is_xml_file_name, sync_period,
};
