//! Category icons as a closed set
//!
//! The dashboard stored free-text icon names and resolved them at runtime
//! against an icon library, silently rendering nothing for typos. Here the
//! set is finite and an unknown name is an explicit error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned for an icon name outside the known set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category icon '{0}'")]
pub struct UnknownIconError(pub String);

/// Icons a category can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryIcon {
    Music,
    Sports,
    Food,
    Art,
    Technology,
    Business,
    Health,
    Travel,
    Education,
    Community,
}

impl CategoryIcon {
    /// Wire identifier, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryIcon::Music => "music",
            CategoryIcon::Sports => "sports",
            CategoryIcon::Food => "food",
            CategoryIcon::Art => "art",
            CategoryIcon::Technology => "technology",
            CategoryIcon::Business => "business",
            CategoryIcon::Health => "health",
            CategoryIcon::Travel => "travel",
            CategoryIcon::Education => "education",
            CategoryIcon::Community => "community",
        }
    }

    /// Console glyph used in table output
    pub fn glyph(&self) -> &'static str {
        match self {
            CategoryIcon::Music => "♪",
            CategoryIcon::Sports => "⚽",
            CategoryIcon::Food => "🍴",
            CategoryIcon::Art => "🎨",
            CategoryIcon::Technology => "💻",
            CategoryIcon::Business => "💼",
            CategoryIcon::Health => "♥",
            CategoryIcon::Travel => "✈",
            CategoryIcon::Education => "🎓",
            CategoryIcon::Community => "👥",
        }
    }
}

impl fmt::Display for CategoryIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryIcon {
    type Err = UnknownIconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "music" => Ok(CategoryIcon::Music),
            "sports" => Ok(CategoryIcon::Sports),
            "food" => Ok(CategoryIcon::Food),
            "art" => Ok(CategoryIcon::Art),
            "technology" => Ok(CategoryIcon::Technology),
            "business" => Ok(CategoryIcon::Business),
            "health" => Ok(CategoryIcon::Health),
            "travel" => Ok(CategoryIcon::Travel),
            "education" => Ok(CategoryIcon::Education),
            "community" => Ok(CategoryIcon::Community),
            other => Err(UnknownIconError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_icons_should_parse() {
        assert_eq!("music".parse(), Ok(CategoryIcon::Music));
        assert_eq!("technology".parse(), Ok(CategoryIcon::Technology));
    }

    #[test]
    fn unknown_icon_should_be_an_explicit_error_not_a_silent_fallback() {
        let err = "no-such-icon".parse::<CategoryIcon>().unwrap_err();
        assert_eq!(err, UnknownIconError("no-such-icon".to_string()));
    }

    #[test]
    fn serde_representation_should_match_as_str() {
        let json = serde_json::to_string(&CategoryIcon::Travel).unwrap();
        assert_eq!(json, "\"travel\"");
        let icon: CategoryIcon = serde_json::from_str("\"health\"").unwrap();
        assert_eq!(icon.as_str(), "health");
    }
}
