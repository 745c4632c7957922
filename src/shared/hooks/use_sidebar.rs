use std::rc::Rc;

use dioxus::prelude::*;

use crate::app::navigation::{DioxusRouter, NavigationSlot};
use crate::app::pages::Route;
use crate::config::SidebarSettings;
use crate::domain::models::{NavigationState, Role};
use crate::domain::services::{KeyValueStore, SidebarController, SidebarDeps};
use crate::shared::services::{HttpAuthSession, LocalStorageStore, WebWindow};

#[derive(Clone, Copy)]
pub struct UseSidebarReturn {
    pub controller: Signal<SidebarController>,
}

impl UseSidebarReturn {
    pub fn is_open(&self) -> bool {
        self.controller.read().is_open()
    }

    pub fn open(&self) {
        let mut controller = self.controller;
        controller.write().open();
    }

    pub fn close(&self) {
        let mut controller = self.controller;
        controller.write().close();
    }

    pub fn toggle(&self) {
        let mut controller = self.controller;
        controller.write().toggle(None);
    }

    pub fn activate(&self, index: usize) {
        let mut controller = self.controller;
        controller.write().activate_at(index);
    }

    pub fn sync_route(&self, path: &str, route_param: Option<&str>) {
        let mut controller = self.controller;
        controller.write().sync_route(path, route_param);
    }

    /// Sign out without holding the controller borrow across the await.
    /// Further clicks are ignored until the redirect.
    pub fn logout(&self) {
        let mut controller = self.controller;
        let Some(auth) = controller.write().begin_logout() else {
            return;
        };
        spawn(async move {
            let result = auth.logout().await;
            controller.write().complete_logout(result);
        });
    }
}

/// Mount a role sidebar: browser collaborators, hydrated from `localStorage`,
/// configured by the `SidebarSettings` the app provides.
pub fn use_sidebar(role: Role, current_path: &str) -> UseSidebarReturn {
    let navigator = navigator();
    let slot = use_context::<NavigationSlot>();
    let settings = use_context::<SidebarSettings>();
    let current_path = current_path.to_string();

    let controller = use_signal(move || {
        let store: Rc<dyn KeyValueStore> = Rc::new(LocalStorageStore::new());
        let deps = SidebarDeps {
            router: Rc::new(DioxusRouter::new(navigator, slot, &current_path)),
            auth: Rc::new(HttpAuthSession::new(&settings, Rc::clone(&store))),
            window: Rc::new(WebWindow),
            store,
        };
        SidebarController::initialize(role.config(), settings, deps)
    });

    UseSidebarReturn { controller }
}

/// State passed by the navigation that led to the current page, if any.
/// Pages reached by back/forward or a plain link get `None`.
pub fn use_navigation_state() -> Option<NavigationState> {
    let slot = use_context::<NavigationSlot>();
    let route = use_route::<Route>().to_string();
    let pushed = slot.0.read().clone()?;
    pushed.state_for(&route).cloned()
}
