//! Structured logging for the sidebar controller
//!
//! Every state transition and collaborator call is logged with an
//! `operation` field so traces from both roles can be filtered together.

/// Operations that emit log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Hydrate,
    Toggle,
    Navigate,
    ResolveIdentifier,
    Logout,
    Storage,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Hydrate => "hydrate",
            LogOperation::Toggle => "toggle",
            LogOperation::Navigate => "navigate",
            LogOperation::ResolveIdentifier => "resolve_identifier",
            LogOperation::Logout => "logout",
            LogOperation::Storage => "storage",
        }
    }
}

/// Log the open flag read on mount
pub fn log_hydrate(role: &str, stored: Option<&str>, is_open: bool) {
    tracing::debug!(
        operation = LogOperation::Hydrate.as_str(),
        role = role,
        stored = stored,
        is_open = is_open,
        "Sidebar state hydrated"
    );
}

/// Log an open/close transition
pub fn log_toggle(role: &str, from: bool, to: bool) {
    tracing::debug!(
        operation = LogOperation::Toggle.as_str(),
        role = role,
        from = from,
        to = to,
        "Sidebar visibility changed"
    );
}

/// Log a sidebar-initiated navigation
pub fn log_navigate(role: &str, path: &str, auto_closed: bool) {
    tracing::info!(
        operation = LogOperation::Navigate.as_str(),
        role = role,
        path = path,
        auto_closed = auto_closed,
        "Navigating from sidebar"
    );
}

/// Log a navigation that fell back to the role root for lack of identifier
pub fn log_missing_identifier(role: &str, template: &str, fallback: &str) {
    tracing::warn!(
        operation = LogOperation::ResolveIdentifier.as_str(),
        role = role,
        template = template,
        fallback = fallback,
        "No identifier resolved, using role root"
    );
}

/// Log the identifier picked from navigation state, route or storage
pub fn log_identifier_resolved(role: &str, source: &str, identifier: &str) {
    tracing::trace!(
        operation = LogOperation::ResolveIdentifier.as_str(),
        role = role,
        source = source,
        identifier = identifier,
        "Identifier resolved"
    );
}

/// Log logout start
pub fn log_logout_start(role: &str) {
    tracing::info!(
        operation = LogOperation::Logout.as_str(),
        role = role,
        "Signing out"
    );
}

/// Log an operation dropped because a logout is pending
pub fn log_blocked_by_logout(role: &str, attempted: &str) {
    tracing::debug!(
        operation = LogOperation::Logout.as_str(),
        role = role,
        attempted = attempted,
        "Ignored while signing out"
    );
}

/// Log logout sign-out failure (the redirect still happens)
pub fn log_logout_error(role: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::Logout.as_str(),
        role = role,
        error = error,
        "Sign-out failed"
    );
}

/// Log a best-effort store write that failed
pub fn log_storage_write_failed(key: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Storage.as_str(),
        key = key,
        error = error,
        "Persistent store write failed"
    );
}
