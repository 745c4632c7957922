use std::collections::BTreeMap;

use crate::shared::constants::CLOSED_SENTINEL;

/// Mutable state of one mounted sidebar
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarState {
    pub is_open: bool,
    pub current_path: String,
    /// Ambient session values (professorId, period).
    pub session_context: BTreeMap<String, String>,
}

impl SidebarState {
    pub fn new(is_open: bool, current_path: impl Into<String>) -> Self {
        Self {
            is_open,
            current_path: current_path.into(),
            session_context: BTreeMap::new(),
        }
    }
}

/// Decode the stored open flag: only the closed sentinel reads as closed.
pub fn decode_open_flag(stored: Option<&str>) -> bool {
    stored != Some(CLOSED_SENTINEL)
}

/// Where a resolved identifier came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierSource {
    NavigationState,
    RouteParam,
    Storage,
}

impl IdentifierSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierSource::NavigationState => "navigation_state",
            IdentifierSource::RouteParam => "route_param",
            IdentifierSource::Storage => "storage",
        }
    }
}

/// Pick the identifier by precedence: navigation state, route param, stored.
pub fn resolve_identifier(
    navigation_state_id: Option<&str>,
    route_param_id: Option<&str>,
    stored_id: Option<&str>,
) -> Option<(String, IdentifierSource)> {
    [
        (navigation_state_id, IdentifierSource::NavigationState),
        (route_param_id, IdentifierSource::RouteParam),
        (stored_id, IdentifierSource::Storage),
    ]
    .into_iter()
    .find_map(|(candidate, source)| {
        candidate
            .filter(|id| !id.is_empty())
            .map(|id| (id.to_string(), source))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(nav: Option<&str>, param: Option<&str>, stored: Option<&str>) -> Option<String> {
        resolve_identifier(nav, param, stored).map(|(id, _)| id)
    }

    #[test]
    fn test_open_flag_defaults_true() {
        assert!(decode_open_flag(None));
        assert!(decode_open_flag(Some("1")));
        assert!(decode_open_flag(Some("")));
        assert!(decode_open_flag(Some("false")));
        assert!(decode_open_flag(Some("00")));
        assert!(!decode_open_flag(Some("0")));
    }

    #[test]
    fn test_identifier_precedence() {
        assert_eq!(resolved(Some("7"), Some("9"), Some("3")).as_deref(), Some("7"));
        assert_eq!(resolved(None, Some("9"), Some("3")).as_deref(), Some("9"));
        assert_eq!(resolved(None, None, Some("3")).as_deref(), Some("3"));
        assert_eq!(resolved(None, None, None), None);
    }

    #[test]
    fn test_identifier_source() {
        assert_eq!(
            resolve_identifier(None, Some("9"), None),
            Some(("9".to_string(), IdentifierSource::RouteParam))
        );
    }

    #[test]
    fn test_empty_candidates_are_skipped() {
        assert_eq!(resolved(Some(""), None, Some("3")).as_deref(), Some("3"));
    }
}
