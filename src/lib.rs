//! ESG emission terminal
//!
//! Filtering and aggregation of corporate greenhouse-gas emission records,
//! backed by a small SQLite record store.

pub mod aggregate;
pub mod config;
pub mod db;
pub mod error;
pub mod filter;
pub mod import;
pub mod map;
pub mod models;
pub mod sample;
pub mod views;
