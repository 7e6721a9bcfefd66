//! invoicr_client - backend client and data accessors for Invoicr.
//!
//! - [`SupabaseClient`]: HTTP client for the hosted auth and data APIs
//! - [`shared_client`]: the process-wide client handle
//! - [`ScopedClientFactory`]: per-request handles bound to a caller's token
//! - [`services`]: settings and invoice accessors

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod factory;
pub mod output;
pub mod services;
pub mod shared;

pub use client::SupabaseClient;
pub use config::SupabaseConfig;
pub use error::{ClientError, Result};
pub use factory::ScopedClientFactory;
pub use shared::{shared_client, ClientCell};
