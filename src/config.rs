//! Runtime settings for the sidebar controller.
//!
//! Defaults mirror the constants in [`crate::shared::constants`]. A build can
//! override any subset by setting `SAESR_SIDEBAR_SETTINGS` to a JSON document;
//! `App` provides the result as context to every sidebar.

use serde::{Deserialize, Serialize};

use crate::shared::constants::{
    LOGOUT_ENDPOINT, MOBILE_BREAKPOINT_PX, PERIOD_KEY, PROFESSOR_ID_KEY, ROOT_PATH,
};
use crate::shared::errors::Result;

/// Build-time variable holding a JSON settings override
pub const SETTINGS_ENV: &str = "SAESR_SIDEBAR_SETTINGS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SidebarSettings {
    /// Widths at or below this value auto-close the sidebar on navigation.
    pub mobile_breakpoint_px: f64,
    /// Top-level location loaded after logout.
    pub logout_redirect: String,
    /// Endpoint the HTTP auth session posts to on logout.
    pub logout_endpoint: String,
    /// Session keys removed from the store on logout.
    pub session_keys: Vec<String>,
}

impl Default for SidebarSettings {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            logout_redirect: ROOT_PATH.to_string(),
            logout_endpoint: LOGOUT_ENDPOINT.to_string(),
            session_keys: vec![PROFESSOR_ID_KEY.to_string(), PERIOD_KEY.to_string()],
        }
    }
}

impl SidebarSettings {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Settings baked in through `SAESR_SIDEBAR_SETTINGS` at compile time.
    /// wasm32 has no process environment, so the value is read by the build.
    pub fn from_build_env() -> Self {
        Self::from_override(option_env!("SAESR_SIDEBAR_SETTINGS"))
    }

    /// Defaults when `raw` is unset; a malformed override is logged and ignored.
    pub fn from_override(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(settings) => {
                tracing::info!("Sidebar settings loaded from {}", SETTINGS_ENV);
                settings
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid {}: {}", SETTINGS_ENV, e);
                Self::default()
            }
        }
    }

    /// Drawer mode: the sidebar floats above content and dismisses on navigation.
    pub fn is_drawer_width(&self, viewport_width: f64) -> bool {
        viewport_width <= self.mobile_breakpoint_px
    }
}
