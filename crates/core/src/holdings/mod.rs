//! Current holdings - the repository trait the host implements.

mod holdings_traits;

pub use holdings_traits::*;
