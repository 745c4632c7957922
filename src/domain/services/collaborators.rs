//! Contracts of the collaborators the sidebar controller drives
//!
//! Browser adapters live in `shared::services`; the in-memory fakes used by
//! the controller tests live in `domain::services::testing`.

use async_trait::async_trait;

use crate::domain::models::NavigationState;
use crate::shared::errors::Result;

/// Persistent key-value store surviving reloads
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-app router
pub trait Router {
    fn current_path(&self) -> String;
    /// State pushed with the entry at `path`; `None` for entries reached
    /// any other way (back/forward, links, reloads).
    fn navigation_state_at(&self, path: &str) -> Option<NavigationState>;
    fn navigate(&self, path: &str, state: Option<NavigationState>);
}

/// Authenticated session; futures are not `Send` on wasm32
#[async_trait(?Send)]
pub trait AuthSession {
    async fn logout(&self) -> Result<()>;
}

/// Host window: viewport size and top-level location
pub trait BrowserWindow {
    fn inner_width(&self) -> f64;
    /// Full page load of `href`, discarding in-memory state.
    fn redirect(&self, href: &str);
}
