//! Entries of the fixed bottom navigation bar.

use serde::{Deserialize, Serialize};

/// One entry in the bottom tab bar, identifying a named view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    /// Tab identifier, expected to be unique.
    pub id: String,
    /// Label under the icon.
    pub label: String,
    /// Icon key such as `home` or `credit_card`.
    pub icon: String,
    /// Initial-mount hint carried by the data; the active tab lives in UI state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl NavigationItem {
    /// Creates a navigation item without the initial-mount hint.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            active: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_flag_is_optional() {
        let item: NavigationItem =
            serde_json::from_str(r#"{"id":"menu","label":"منو","icon":"apps"}"#).unwrap();
        assert_eq!(item, NavigationItem::new("menu", "منو", "apps"));

        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("active"));
    }
}
