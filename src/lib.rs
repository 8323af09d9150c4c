pub mod api;
pub mod app;
pub mod backend;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
