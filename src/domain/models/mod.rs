// Domain models for the role sidebars
// Pure Rust, no framework dependencies

pub mod menu;
pub mod navigation;
pub mod role;
pub mod sidebar;

pub use menu::{is_item_active, IconId, MatchMode, MenuEntry, MenuItem};
pub use navigation::{NavigationState, RoutedState};
pub use role::{Role, RoleConfig};
pub use sidebar::{decode_open_flag, resolve_identifier, IdentifierSource, SidebarState};
