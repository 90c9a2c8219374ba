//! Taxpayer-ID validation and display helpers.
//!
//! Everything here is pure and synchronous: no I/O, no shared state, and
//! no function panics or returns an error on malformed input.

mod dates;
mod debounce;
mod display;
mod error;
mod labels;
mod tax_id;

pub use dates::*;
pub use debounce::Debouncer;
pub use display::*;
pub use error::*;
pub use labels::*;
pub use tax_id::*;
