// Business logic services
// Framework-agnostic, 100% testable

pub mod collaborators;
pub mod sidebar_controller;

#[cfg(test)]
pub(crate) mod testing;

pub use collaborators::{AuthSession, BrowserWindow, KeyValueStore, Router};
pub use sidebar_controller::{SidebarController, SidebarDeps};
