//! News Preferences Value Object
//!
//! The filter a user wants applied to headline lookups. Each field is
//! passed verbatim to the headlines provider; nothing here interprets
//! them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsPreferences {
    pub sources: Option<String>,
    /// Free-text query (`q` on the wire)
    #[serde(rename = "q")]
    pub query: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
}

impl NewsPreferences {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.sources.is_none()
            && self.query.is_none()
            && self.category.is_none()
            && self.language.is_none()
            && self.country.is_none()
    }

    /// `None` for a record with every field unset
    pub fn into_non_empty(self) -> Option<Self> {
        (!self.is_empty()).then_some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_preferences_collapse_to_none() {
        assert!(NewsPreferences::default().is_empty());
        assert_eq!(NewsPreferences::default().into_non_empty(), None);
    }

    #[test]
    fn test_single_field_is_enough() {
        let prefs = NewsPreferences {
            country: Some("us".to_string()),
            ..Default::default()
        };
        assert_eq!(prefs.clone().into_non_empty(), Some(prefs));
    }

    #[test]
    fn test_query_uses_q_on_the_wire() {
        let prefs = NewsPreferences {
            query: Some("rust".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&prefs).unwrap();
        assert_eq!(json["q"], "rust");
        assert!(json.get("query").is_none());
    }
}
