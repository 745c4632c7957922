// Browser adapters for the sidebar collaborators
// Native builds get in-memory or no-op fallbacks

pub mod auth;
pub mod browser;
pub mod storage;

pub use auth::HttpAuthSession;
pub use browser::WebWindow;
pub use storage::{LocalStorageStore, MemoryStore};
