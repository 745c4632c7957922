use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::constants::FROM_SIDEBAR_KEY;

/// State object carried alongside an in-app navigation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationState(Map<String, Value>);

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String view of a value; numbers are rendered, other types ignored.
    pub fn get_str(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn is_from_sidebar(&self) -> bool {
        matches!(self.0.get(FROM_SIDEBAR_KEY), Some(Value::Bool(true)))
    }
}

/// Navigation state bound to the location it was pushed for
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedState {
    pub path: String,
    pub state: NavigationState,
}

impl RoutedState {
    pub fn new(path: impl Into<String>, state: NavigationState) -> Self {
        Self {
            path: path.into(),
            state,
        }
    }

    /// The state, as long as `current_path` is still the pushed location.
    /// Back/forward and plain links land elsewhere and see nothing.
    pub fn state_for(&self, current_path: &str) -> Option<&NavigationState> {
        (self.path == current_path).then_some(&self.state)
    }
}
