//! Viewing-preference dashboard: per-user recommendations and aggregate
//! analytics over a static JSON dataset, served as one HTML page.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod render;
pub mod services;
pub mod store;
