//! Query modules for the relic picker.
//!
//! Each module provides a query struct that borrows from a
//! [`Catalog`](crate::catalog::Catalog) and answers from the in-memory data.

pub mod prices;
pub mod relics;
pub mod rewards;

pub use prices::PriceQuery;
pub use relics::RelicQuery;
pub use rewards::RewardQuery;
