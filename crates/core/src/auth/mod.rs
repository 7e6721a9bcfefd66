mod error;
mod functions;
mod http_mapping;
mod traits;
mod types;
mod validation;

pub use error::AuthError;
pub use functions::{login, parse_bearer};
pub use http_mapping::auth_error_to_status_code;
pub use traits::{AuthClient, Result};
pub use types::{AccessToken, AuthSession, AuthUser, Credentials};
pub use validation::validate_return_to;
