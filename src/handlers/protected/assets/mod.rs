// Network asset inventory endpoints under /api/v1/network-assets

pub mod list;
pub mod record;
pub mod search;

pub use list::list;
pub use record::{create, delete, get, update};
pub use search::{exists, search, search_dns};
