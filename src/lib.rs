//! Promoter Report Library
//!
//! A library for exporting promoter records from a ClickHouse warehouse.

pub mod cli;
pub mod error;
pub mod models;
pub mod preflight;
pub mod services;

pub use error::{Error, Result};
