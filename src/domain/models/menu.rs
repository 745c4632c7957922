use serde::{Deserialize, Serialize};

use crate::shared::constants::ID_PLACEHOLDER;

/// Icons available to menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    Home,
    UserGraduate,
    ChalkboardTeacher,
    Book,
    FileAlt,
    Newspaper,
    University,
    ListAlt,
    CalendarAlt,
    ExclamationTriangle,
    Robot,
    User,
    Star,
    SignOut,
    Times,
}

impl IconId {
    pub fn glyph(&self) -> &'static str {
        match self {
            IconId::Home => "🏠",
            IconId::UserGraduate => "🎓",
            IconId::ChalkboardTeacher => "👨‍🏫",
            IconId::Book => "📘",
            IconId::FileAlt => "📄",
            IconId::Newspaper => "📰",
            IconId::University => "🏛️",
            IconId::ListAlt => "📋",
            IconId::CalendarAlt => "📅",
            IconId::ExclamationTriangle => "⚠️",
            IconId::Robot => "🤖",
            IconId::User => "👤",
            IconId::Star => "⭐",
            IconId::SignOut => "🚪",
            IconId::Times => "✕",
        }
    }
}

/// How a menu entry is compared against the current path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    Exact,
    Prefix,
    Contains,
}

impl MatchMode {
    pub fn matches(&self, current_path: &str, pattern: &str) -> bool {
        match self {
            MatchMode::Exact => current_path == pattern,
            MatchMode::Prefix => current_path.starts_with(pattern),
            MatchMode::Contains => current_path.contains(pattern),
        }
    }
}

/// One navigation entry of a role sidebar.
///
/// `target_path` may contain the `:id` placeholder, filled in with the
/// resolved identifier by [`MenuItem::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub label: String,
    pub icon: IconId,
    pub target_path: String,
    pub match_mode: MatchMode,
    /// Pattern used for highlighting when it differs from the target.
    #[serde(default)]
    pub match_path: Option<String>,
    /// Extra paths tested with the same match mode.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// String pairs merged into the navigation state on activation.
    #[serde(default)]
    pub extra_state: Vec<(String, String)>,
}

impl MenuItem {
    pub fn new(label: &str, icon: IconId, target_path: &str, match_mode: MatchMode) -> Self {
        Self {
            label: label.to_string(),
            icon,
            target_path: target_path.to_string(),
            match_mode,
            match_path: None,
            aliases: Vec::new(),
            extra_state: Vec::new(),
        }
    }

    pub fn with_match_path(mut self, pattern: &str) -> Self {
        self.match_path = Some(pattern.to_string());
        self
    }

    pub fn with_alias(mut self, path: &str) -> Self {
        self.aliases.push(path.to_string());
        self
    }

    pub fn with_state(mut self, key: &str, value: &str) -> Self {
        self.extra_state.push((key.to_string(), value.to_string()));
        self
    }

    pub fn needs_identifier(&self) -> bool {
        self.target_path.contains(ID_PLACEHOLDER)
    }

    /// Interpolate the identifier into the target path.
    ///
    /// Returns `None` when the target needs an identifier and none is known.
    pub fn resolve_target(&self, identifier: Option<&str>) -> Option<String> {
        if !self.needs_identifier() {
            return Some(self.target_path.clone());
        }
        let id = identifier.filter(|id| !id.is_empty())?;
        Some(
            self.target_path
                .replace(ID_PLACEHOLDER, &urlencoding::encode(id)),
        )
    }

    /// Concrete copy of this item for the given identifier. Targets that
    /// cannot be built fall back to `root_path`.
    pub fn resolve(&self, identifier: Option<&str>, root_path: &str) -> MenuItem {
        let target_path = self
            .resolve_target(identifier)
            .unwrap_or_else(|| root_path.to_string());
        let fill = |path: &String| match identifier {
            Some(id) if !id.is_empty() => path.replace(ID_PLACEHOLDER, &urlencoding::encode(id)),
            _ => path.clone(),
        };
        MenuItem {
            target_path,
            match_path: self.match_path.as_ref().map(&fill),
            aliases: self.aliases.iter().map(&fill).collect(),
            ..self.clone()
        }
    }
}

/// Whether `item` is highlighted for `current_path`.
pub fn is_item_active(item: &MenuItem, current_path: &str) -> bool {
    let primary = item.match_path.as_deref().unwrap_or(&item.target_path);
    std::iter::once(primary)
        .chain(item.aliases.iter().map(String::as_str))
        .any(|pattern| item.match_mode.matches(current_path, pattern))
}

/// A resolved item and its highlight flag, as rendered by the view
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub item: MenuItem,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(target: &str, mode: MatchMode) -> MenuItem {
        MenuItem::new("Item", IconId::Home, target, mode)
    }

    #[test]
    fn test_exact_requires_equality() {
        let home = item("/administrador", MatchMode::Exact);
        assert!(is_item_active(&home, "/administrador"));
        assert!(!is_item_active(&home, "/administrador/gestionarAlumnos"));
        assert!(!is_item_active(&home, "/administrador/"));
    }

    #[test]
    fn test_prefix_matches_sub_routes() {
        let alumnos = item("/administrador/gestionarAlumnos", MatchMode::Prefix);
        assert!(is_item_active(&alumnos, "/administrador/gestionarAlumnos"));
        assert!(is_item_active(&alumnos, "/administrador/gestionarAlumnos/42"));
        assert!(!is_item_active(&alumnos, "/administrador/gestionarProfesores"));
        assert!(!is_item_active(&alumnos, "/x/administrador/gestionarAlumnos"));
    }

    #[test]
    fn test_contains_matches_substrings() {
        let alumnos = item("/administrador/gestionarAlumnos", MatchMode::Contains);
        assert!(is_item_active(&alumnos, "/administrador/gestionarAlumnos/42"));
        assert!(is_item_active(&alumnos, "/x/administrador/gestionarAlumnos"));
        assert!(!is_item_active(&alumnos, "/administrador"));
    }

    #[test]
    fn test_match_path_overrides_target() {
        let clases = item("/profesor/:id/clases", MatchMode::Contains).with_match_path("/clases");
        assert!(is_item_active(&clases, "/profesor/7/clases"));
        assert!(is_item_active(&clases, "/profesor/null/clases"));
        assert!(!is_item_active(&clases, "/profesor/7/ets"));
    }

    #[test]
    fn test_alias_uses_same_mode() {
        let home = item("/profesor/:id", MatchMode::Exact)
            .with_alias("/profesor")
            .resolve(Some("7"), "/profesor");
        assert!(is_item_active(&home, "/profesor/7"));
        assert!(is_item_active(&home, "/profesor"));
        assert!(!is_item_active(&home, "/profesor/7/clases"));
    }

    #[test]
    fn test_resolve_target_interpolates() {
        let ets = item("/profesor/:id/ets", MatchMode::Contains);
        assert_eq!(ets.resolve_target(Some("42")).as_deref(), Some("/profesor/42/ets"));
        assert_eq!(ets.resolve_target(None), None);
        assert_eq!(ets.resolve_target(Some("")), None);
    }

    #[test]
    fn test_resolve_target_encodes_identifier() {
        let info = item("/profesor/informacionPersonal/:id", MatchMode::Contains);
        assert_eq!(
            info.resolve_target(Some("a b")).as_deref(),
            Some("/profesor/informacionPersonal/a%20b")
        );
    }

    #[test]
    fn test_resolve_falls_back_to_root() {
        let ets = item("/profesor/:id/ets", MatchMode::Contains);
        assert_eq!(ets.resolve(None, "/profesor").target_path, "/profesor");
    }

    #[test]
    fn test_static_target_needs_no_identifier() {
        let chat = item("/profesor/Chat", MatchMode::Contains);
        assert!(!chat.needs_identifier());
        assert_eq!(chat.resolve(None, "/profesor").target_path, "/profesor/Chat");
    }
}
