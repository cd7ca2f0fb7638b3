pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod page;
pub mod services;

pub use error::{AppResult, ClientError};
