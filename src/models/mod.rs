//! Data models.

pub mod config;
pub mod table;
