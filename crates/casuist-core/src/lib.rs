//! Casuist Core - data model, framework registry, and error handling

pub mod error;
pub mod framework;
pub mod types;

pub use error::{Error, Result};
pub use framework::*;
pub use types::*;
