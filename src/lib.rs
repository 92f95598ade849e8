pub mod csv;
pub mod domain;
pub mod error;
pub mod import;
pub mod store;

pub use error::{Error, Result};
pub use import::Importer;
