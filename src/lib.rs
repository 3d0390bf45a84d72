//! Room and reservation state for a hotel property-management dashboard,
//! served as a JSON API.

pub mod config;
pub mod error;
pub mod handlers;
pub mod integrations;
pub mod models;
pub mod store;

pub use error::PmsError;
pub use store::PropertyStore;
