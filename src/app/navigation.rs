//! Dioxus side of the router contract
//!
//! Dioxus routes carry no history state, so the state of the last
//! sidebar navigation travels in a context signal ([`NavigationSlot`]),
//! tagged with the route it was pushed for. Pages and the sidebar only see
//! it while that route is still current.

use std::cell::RefCell;

use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::app::pages::Route;
use crate::domain::models::{NavigationState, RoutedState};
use crate::domain::services::Router;

/// Navigation state handed from the sidebar to the next page
#[derive(Clone, Copy)]
pub struct NavigationSlot(pub Signal<Option<RoutedState>>);

impl NavigationSlot {
    pub fn state_at(&self, path: &str) -> Option<NavigationState> {
        self.0.peek().as_ref()?.state_for(path).cloned()
    }
}

pub struct DioxusRouter {
    navigator: Navigator,
    slot: NavigationSlot,
    path: RefCell<String>,
}

impl DioxusRouter {
    pub fn new(navigator: Navigator, slot: NavigationSlot, current_path: &str) -> Self {
        Self {
            navigator,
            slot,
            path: RefCell::new(current_path.to_string()),
        }
    }
}

impl Router for DioxusRouter {
    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn navigation_state_at(&self, path: &str) -> Option<NavigationState> {
        self.slot.state_at(path)
    }

    fn navigate(&self, path: &str, state: Option<NavigationState>) {
        let route = match path.parse::<Route>() {
            Ok(route) => route,
            Err(e) => {
                tracing::warn!("Sidebar target {} is not a known route: {}", path, e);
                return;
            }
        };

        // Tag with the route's own rendering, the form RoleShell reports back.
        let pushed = route.to_string();
        let mut slot = self.slot.0;
        slot.set(state.map(|state| RoutedState::new(pushed.clone(), state)));
        *self.path.borrow_mut() = pushed;
        self.navigator.push(route);
    }
}
