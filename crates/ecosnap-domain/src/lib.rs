//! ecosnap-domain
//!
//! Pure domain models (WasteCategory, CurrencyTriple, Boost, Catalog, etc.).
//! No I/O, no storage. Only data types and core enums.

pub mod boost;
pub mod catalog;
pub mod currency;
pub mod purchase;
pub mod session;
pub mod waste;

pub use boost::*;
pub use catalog::*;
pub use currency::*;
pub use purchase::*;
pub use session::*;
pub use waste::*;
