mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{QueryError, Result, StorageError, NOT_FOUND_CODE};
pub use http_mapping::storage_error_to_status_code;
pub use traits::DataClient;
pub use types::{select_query_pairs, Filter, Order};
