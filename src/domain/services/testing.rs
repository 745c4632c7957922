// In-memory collaborators for controller tests

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;

use super::collaborators::{AuthSession, BrowserWindow, KeyValueStore, Router};
use crate::domain::models::{NavigationState, RoutedState};
use crate::shared::errors::{AppError, Result};

/// Router whose entries keep the state they were pushed with, and which can
/// snapshot a store key at the moment each navigation is dispatched.
#[derive(Default)]
pub struct RecordingRouter {
    pub path: RefCell<String>,
    pub state: RefCell<Option<RoutedState>>,
    pub navigations: RefCell<Vec<(String, Option<NavigationState>)>>,
    watched: RefCell<Option<(Rc<dyn KeyValueStore>, String)>>,
    pub watched_at_navigate: RefCell<Vec<Option<String>>>,
}

impl RecordingRouter {
    pub fn at(path: &str) -> Self {
        let router = Self::default();
        *router.path.borrow_mut() = path.to_string();
        router
    }

    /// State pushed for the current path
    pub fn with_state(self, state: NavigationState) -> Self {
        let path = self.path.borrow().clone();
        *self.state.borrow_mut() = Some(RoutedState::new(path, state));
        self
    }

    pub fn watch(&self, store: Rc<dyn KeyValueStore>, key: &str) {
        *self.watched.borrow_mut() = Some((store, key.to_string()));
    }

    /// History traversal: the location changes, no state is pushed.
    pub fn go_to(&self, path: &str) {
        *self.path.borrow_mut() = path.to_string();
    }

    pub fn last(&self) -> Option<(String, Option<NavigationState>)> {
        self.navigations.borrow().last().cloned()
    }
}

impl Router for RecordingRouter {
    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn navigation_state_at(&self, path: &str) -> Option<NavigationState> {
        self.state.borrow().as_ref()?.state_for(path).cloned()
    }

    fn navigate(&self, path: &str, state: Option<NavigationState>) {
        if let Some((store, key)) = self.watched.borrow().as_ref() {
            self.watched_at_navigate.borrow_mut().push(store.get(key));
        }
        *self.path.borrow_mut() = path.to_string();
        *self.state.borrow_mut() = state.clone().map(|state| RoutedState::new(path, state));
        self.navigations.borrow_mut().push((path.to_string(), state));
    }
}

#[derive(Default)]
pub struct FakeAuth {
    pub calls: Cell<usize>,
    pub fail: bool,
}

#[async_trait(?Send)]
impl AuthSession for FakeAuth {
    async fn logout(&self) -> Result<()> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            return Err(AppError::Auth("session expired".to_string()));
        }
        Ok(())
    }
}

pub struct FakeWindow {
    pub width: Cell<f64>,
    pub redirects: RefCell<Vec<String>>,
}

impl FakeWindow {
    pub fn with_width(width: f64) -> Self {
        Self {
            width: Cell::new(width),
            redirects: RefCell::new(Vec::new()),
        }
    }
}

impl BrowserWindow for FakeWindow {
    fn inner_width(&self) -> f64 {
        self.width.get()
    }

    fn redirect(&self, href: &str) {
        self.redirects.borrow_mut().push(href.to_string());
    }
}

/// Store whose writes always fail; reads see nothing
#[derive(Default)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(AppError::StorageUnavailable)
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Err(AppError::StorageUnavailable)
    }
}
