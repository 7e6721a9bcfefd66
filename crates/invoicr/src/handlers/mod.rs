pub mod api;
pub mod error;
pub mod health;
pub mod login;
pub mod pages;
pub mod sitemap;

pub use error::AppError;
