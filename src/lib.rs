//! A small personal expense tracker that keeps its data in a local CSV file.
//!
//! Commands are available as functions in [`commands`] and are driven either by the `budget`
//! command line or by the [`interactive`] loop.

pub mod args;
pub mod commands;
mod config;
mod error;
pub mod interactive;
pub mod model;
mod store;
mod utils;
pub mod validate;


pub use config::{default_data_file, Config, DATA_FILE};
pub use error::{Error, ErrorType, Result};
pub use store::Store;
