use thiserror::Error;

use crate::auth::AuthError;
use crate::factory::InitError;
use crate::storage::StorageError;

/// Errors returned by the settings accessor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("could not create backend client: {0}")]
    Client(#[from] InitError),

    #[error("could not resolve current user: {0}")]
    Auth(#[from] AuthError),

    #[error("settings query failed: {0}")]
    Query(#[from] StorageError),
}
