// Public API exports
pub mod config;
pub mod domain;
pub mod shared;

// Dioxus views, routes and the router adapter
pub mod app;
