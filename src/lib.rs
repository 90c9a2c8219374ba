//! # opme
//!
//! Identity and display helpers for tracking consigned OPME material
//! (órteses, próteses e materiais especiais) against NF-e invoices.
//!
//! The core is a pure library: CPF/CNPJ cleaning, check-digit validation
//! and formatting, plus the pt-BR number, date and label rendering used by
//! the dashboard. Amounts are [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use opme::*;
//! use rust_decimal_macros::dec;
//!
//! let typed = "123.456.789-09";
//! assert_eq!(clean(typed), "12345678909");
//! assert!(is_valid_cpf(typed));
//! assert_eq!(format_tax_id("12345678909"), "123.456.789-09");
//!
//! let cnpj: TaxId = "11444777000161".parse().unwrap();
//! assert_eq!(cnpj.to_string(), "11.444.777/0001-61");
//!
//! assert_eq!(format_number(dec!(1234.5), 2), "1.234,50");
//! assert_eq!(StockStatus::from_balance(dec!(3)).label(), "Crítico");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | CPF/CNPJ validation, formatting, display helpers |
//! | `api` | Backend request/response contract and HTTP client |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "api")]
pub mod api;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
