pub mod config;
pub mod error;
pub mod logging;

pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod scheduler;
pub mod source;
pub mod url_model;

pub use error::{Result, RunError};
