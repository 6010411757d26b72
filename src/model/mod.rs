//! Types that represent the core data model, such as `Transaction` and `Amount`.
mod amount;
mod category;
mod transaction;

pub use amount::{Amount, AmountError};
pub use category::SUGGESTED_CATEGORIES;
pub use transaction::{Transaction, HEADERS};
