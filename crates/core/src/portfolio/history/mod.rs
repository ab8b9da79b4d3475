//! Portfolio history - replaying the transaction ledger against historical
//! prices to produce a value-over-time curve.

pub mod history_model;
pub mod history_service;
pub mod holdings_timeline;
pub mod price_lookup;
pub mod time_grid;
pub mod valuation;

pub use history_model::*;
pub use history_service::*;
pub use holdings_timeline::*;
pub use price_lookup::*;
pub use time_grid::*;
pub use valuation::*;
