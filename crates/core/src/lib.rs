//! Core for the Invoicr project.
//!
//! Pure types, traits and functions shared by the backend client, the auth
//! layer and the web server. Nothing in this crate performs I/O.

pub mod auth;
pub mod factory;
pub mod invoices;
pub mod seo;
pub mod settings;
pub mod storage;
