//! Data accessors used by pages and commands.
//!
//! Each accessor obtains a fresh client from its [`ClientFactory`], resolves
//! the current user and only then queries. Anonymous callers get an empty
//! result without any query being issued.
//!
//! [`ClientFactory`]: invoicr_core::factory::ClientFactory

mod invoices;
mod settings;

#[cfg(test)]
mod mock;

pub use invoices::InvoiceService;
pub use settings::SettingsService;
