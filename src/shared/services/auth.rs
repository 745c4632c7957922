use std::rc::Rc;

use async_trait::async_trait;

use crate::config::SidebarSettings;
use crate::domain::services::{AuthSession, KeyValueStore};
use crate::shared::errors::Result;

/// Session backed by the panel's HTTP API
pub struct HttpAuthSession {
    endpoint: String,
    session_keys: Vec<String>,
    store: Rc<dyn KeyValueStore>,
}

impl HttpAuthSession {
    pub fn new(settings: &SidebarSettings, store: Rc<dyn KeyValueStore>) -> Self {
        Self {
            endpoint: settings.logout_endpoint.clone(),
            session_keys: settings.session_keys.clone(),
            store,
        }
    }

    /// Drop the ambient session values so the next login starts clean.
    fn clear_session(&self) {
        for key in &self.session_keys {
            if let Err(e) = self.store.remove(key) {
                tracing::warn!("Failed to clear session key {}: {}", key, e);
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    async fn post_logout(&self) -> Result<()> {
        use crate::shared::errors::AppError;
        use gloo_net::http::Request;

        let response = Request::post(&self.endpoint)
            .send()
            .await
            .map_err(|e| AppError::Auth(e.to_string()))?;

        if !response.ok() {
            return Err(AppError::Auth(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn post_logout(&self) -> Result<()> {
        // No browser session to close outside WASM
        tracing::debug!("Skipping logout request to {} on this host", self.endpoint);
        Ok(())
    }
}

#[async_trait(?Send)]
impl AuthSession for HttpAuthSession {
    async fn logout(&self) -> Result<()> {
        let result = self.post_logout().await;
        self.clear_session();
        result
    }
}
