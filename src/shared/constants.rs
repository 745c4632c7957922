//! Storage keys, sentinels and paths shared by both role sidebars.

/// Viewports at or below this width render the sidebar as a drawer.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Stored value of an open sidebar.
pub const OPEN_SENTINEL: &str = "1";
/// Stored value of a closed sidebar. Any other value reads as open.
pub const CLOSED_SENTINEL: &str = "0";

pub const SIDEBAR_KEY_PREFIX: &str = "sidebar_";
pub const SIDEBAR_KEY_SUFFIX: &str = "_open";

pub const PROFESSOR_ID_KEY: &str = "professorId";
pub const PERIOD_KEY: &str = "period";

/// Navigation-state marker set on every sidebar-initiated transition.
pub const FROM_SIDEBAR_KEY: &str = "fromSidebar";

/// Placeholder interpolated with the resolved identifier in target paths.
pub const ID_PLACEHOLDER: &str = ":id";

pub const ROOT_PATH: &str = "/";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

/// Build the persistent key holding the open flag of a role's sidebar.
pub fn sidebar_open_key(role_key: &str) -> String {
    format!("{SIDEBAR_KEY_PREFIX}{role_key}{SIDEBAR_KEY_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_open_key() {
        assert_eq!(sidebar_open_key("admin"), "sidebar_admin_open");
        assert_eq!(sidebar_open_key("profe"), "sidebar_profe_open");
    }
}
