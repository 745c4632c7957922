//! Sidebar open/close state and route-derived highlighting
//!
//! One controller per mounted role sidebar. It owns the visibility flag,
//! writes it through to the persistent store on every transition, resolves
//! the role identifier used by templated menu targets, and mediates the
//! router, auth and window collaborators.

use std::rc::Rc;

use super::collaborators::{AuthSession, BrowserWindow, KeyValueStore, Router};
use crate::config::SidebarSettings;
use crate::domain::models::{
    decode_open_flag, is_item_active, resolve_identifier, MenuEntry, MenuItem, NavigationState,
    RoleConfig, SidebarState,
};
use crate::shared::constants::{CLOSED_SENTINEL, FROM_SIDEBAR_KEY, OPEN_SENTINEL, PERIOD_KEY};
use crate::shared::errors::Result;
use crate::shared::logging;

/// External collaborators of a sidebar
#[derive(Clone)]
pub struct SidebarDeps {
    pub store: Rc<dyn KeyValueStore>,
    pub router: Rc<dyn Router>,
    pub auth: Rc<dyn AuthSession>,
    pub window: Rc<dyn BrowserWindow>,
}

pub struct SidebarController {
    role: RoleConfig,
    settings: SidebarSettings,
    state: SidebarState,
    deps: SidebarDeps,
    logging_out: bool,
}

impl SidebarController {
    /// Hydrate the open flag from `sidebar_<role>_open` and pick up the
    /// current route. Only the closed sentinel yields a closed sidebar.
    pub fn initialize(role: RoleConfig, settings: SidebarSettings, deps: SidebarDeps) -> Self {
        let stored = deps.store.get(&role.storage_key());
        let is_open = decode_open_flag(stored.as_deref());
        logging::log_hydrate(&role.key, stored.as_deref(), is_open);

        let current_path = deps.router.current_path();
        let mut controller = Self {
            role,
            settings,
            state: SidebarState::new(is_open, current_path),
            deps,
            logging_out: false,
        };
        controller.refresh_session(None);
        controller
    }

    pub fn state(&self) -> &SidebarState {
        &self.state
    }

    pub fn role(&self) -> &RoleConfig {
        &self.role
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn identifier(&self) -> Option<&str> {
        let key = self.role.identifier_key.as_deref()?;
        self.state.session_context.get(key).map(String::as_str)
    }

    pub fn period(&self) -> Option<&str> {
        self.state.session_context.get(PERIOD_KEY).map(String::as_str)
    }

    /// A sign-out is in flight; visibility and navigation are frozen.
    pub fn is_logging_out(&self) -> bool {
        self.logging_out
    }

    /// Set the flag to `explicit`, or flip it. Written through immediately.
    pub fn toggle(&mut self, explicit: Option<bool>) -> &SidebarState {
        if self.blocked_by_logout("toggle") {
            return &self.state;
        }
        let next = explicit.unwrap_or(!self.state.is_open);
        self.set_open(next);
        &self.state
    }

    pub fn open(&mut self) {
        self.toggle(Some(true));
    }

    pub fn close(&mut self) {
        self.toggle(Some(false));
    }

    /// Close when the viewport is in drawer mode. Returns whether it closed.
    pub fn auto_close_on_navigate(&mut self, viewport_width: f64) -> bool {
        if self.logging_out || !self.settings.is_drawer_width(viewport_width) {
            return false;
        }
        self.set_open(false);
        true
    }

    pub fn is_item_active(&self, item: &MenuItem, current_path: &str) -> bool {
        is_item_active(item, current_path)
    }

    /// Items resolved against the current identifier, with highlight flags.
    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        let identifier = self.identifier();
        self.role
            .items
            .iter()
            .map(|item| {
                let item = item.resolve(identifier, &self.role.root_path);
                let active = is_item_active(&item, &self.state.current_path);
                MenuEntry { item, active }
            })
            .collect()
    }

    /// Resolve the role identifier (navigation state, then route param, then
    /// stored value) and persist it once known.
    pub fn resolve_identifier(&mut self, route_param: Option<&str>) -> Option<String> {
        let key = self.role.identifier_key.clone()?;
        let navigation_state = self.navigation_state();
        let from_state = navigation_state.as_ref().and_then(|state| state.get_str(&key));
        let stored = self.deps.store.get(&key);

        match resolve_identifier(from_state.as_deref(), route_param, stored.as_deref()) {
            Some((id, source)) => {
                logging::log_identifier_resolved(&self.role.key, source.as_str(), &id);
                self.write(&key, &id);
                self.state.session_context.insert(key, id.clone());
                Some(id)
            }
            None => {
                self.state.session_context.remove(&key);
                None
            }
        }
    }

    /// Route-change hook: track the path and refresh the session context.
    pub fn sync_route(&mut self, path: &str, route_param: Option<&str>) {
        self.state.current_path = path.to_string();
        self.refresh_session(route_param);
    }

    /// Navigate through the router, closing first on drawer-width viewports.
    /// The state always carries `fromSidebar: true`.
    pub fn navigate_to(&mut self, path: &str, extra_state: NavigationState) {
        if self.blocked_by_logout("navigate") {
            return;
        }
        let auto_closed = self.auto_close_on_navigate(self.deps.window.inner_width());

        let mut state = extra_state;
        state.insert(FROM_SIDEBAR_KEY, true);

        logging::log_navigate(&self.role.key, path, auto_closed);
        self.deps.router.navigate(path, Some(state));
    }

    /// Navigate to `item`. Identifier-scoped targets without a known
    /// identifier go to the role root instead.
    pub fn activate(&mut self, item: &MenuItem) {
        if self.blocked_by_logout("activate") {
            return;
        }
        let identifier = self.identifier().map(str::to_string);

        let path = match item.resolve_target(identifier.as_deref()) {
            Some(path) => path,
            None => {
                logging::log_missing_identifier(&self.role.key, &item.target_path, &self.role.root_path);
                self.role.root_path.clone()
            }
        };

        let mut state = NavigationState::new();
        if let (Some(key), Some(id)) = (self.role.identifier_key.as_deref(), identifier) {
            state.insert(key, id);
        }
        for (key, value) in &item.extra_state {
            state.insert(key, value.as_str());
        }

        self.navigate_to(&path, state);
    }

    /// Activate the configured item at `index`. Returns false when out of
    /// range or while signing out.
    pub fn activate_at(&mut self, index: usize) -> bool {
        if self.logging_out {
            return false;
        }
        match self.role.items.get(index).cloned() {
            Some(item) => {
                self.activate(&item);
                true
            }
            None => false,
        }
    }

    /// Sign out, close, then leave the app with a top-level redirect.
    pub async fn logout(&mut self) {
        let Some(auth) = self.begin_logout() else {
            return;
        };
        let result = auth.logout().await;
        self.complete_logout(result);
    }

    /// Second half of [`Self::logout`], for hosts that await the auth
    /// session outside the controller.
    pub fn complete_logout(&mut self, result: Result<()>) {
        if let Err(e) = result {
            logging::log_logout_error(&self.role.key, &e.to_string());
        }
        self.set_open(false);
        self.deps.window.redirect(&self.settings.logout_redirect);
    }

    /// First half of [`Self::logout`]: freeze the sidebar and hand out the
    /// session to sign out of. `None` when a logout is already pending.
    pub fn begin_logout(&mut self) -> Option<Rc<dyn AuthSession>> {
        if self.blocked_by_logout("logout") {
            return None;
        }
        self.logging_out = true;
        logging::log_logout_start(&self.role.key);
        Some(Rc::clone(&self.deps.auth))
    }

    fn blocked_by_logout(&self, attempted: &str) -> bool {
        if self.logging_out {
            logging::log_blocked_by_logout(&self.role.key, attempted);
        }
        self.logging_out
    }

    // State pushed for the route the sidebar is currently on.
    fn navigation_state(&self) -> Option<NavigationState> {
        self.deps.router.navigation_state_at(&self.state.current_path)
    }

    fn set_open(&mut self, next: bool) {
        logging::log_toggle(&self.role.key, self.state.is_open, next);
        self.state.is_open = next;
        let value = if next { OPEN_SENTINEL } else { CLOSED_SENTINEL };
        self.write(&self.role.storage_key(), value);
    }

    fn refresh_session(&mut self, route_param: Option<&str>) {
        self.resolve_identifier(route_param);

        if !self.role.tracks_period {
            return;
        }
        let from_state = self
            .navigation_state()
            .and_then(|state| state.get_str(PERIOD_KEY));
        let period = match from_state {
            Some(period) => {
                self.write(PERIOD_KEY, &period);
                Some(period)
            }
            None => self.deps.store.get(PERIOD_KEY),
        };
        match period {
            Some(period) => {
                self.state.session_context.insert(PERIOD_KEY.to_string(), period);
            }
            None => {
                self.state.session_context.remove(PERIOD_KEY);
            }
        }
    }

    // Best effort: a failed write never blocks the caller.
    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.deps.store.set(key, value) {
            logging::log_storage_write_failed(key, &e.to_string());
        }
    }
}
