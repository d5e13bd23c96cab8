//! External service clients.

pub mod clickhouse;
