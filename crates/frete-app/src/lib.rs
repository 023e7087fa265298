//! Application service layer - use cases, config, queries, export

pub mod app;
pub mod config;
pub mod export;
pub mod repository;
