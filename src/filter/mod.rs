pub mod criteria;
pub mod filter;
pub mod filter_order;
pub mod filter_where;
pub mod types;

pub use criteria::{AssetFilter, AssetQuery, Pagination};
pub use filter::Filter;
pub use types::*;
