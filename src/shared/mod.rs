pub mod constants;
pub mod errors;
pub mod logging;
pub mod services;

// Dioxus hooks (need a component scope)
pub mod hooks;
