//! Resource kinds known to the admin console
//!
//! A closed set rather than stringly-typed lookups: an unknown kind is a
//! parse error, never a silent no-op.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a kind identifier is not in the known set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource kind '{0}' (expected one of: banner, blog, category, faq, event-type, user)")]
pub struct UnknownKindError(pub String);

/// The resource types managed by the backoffice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Banner,
    Blog,
    Category,
    Faq,
    EventType,
    User,
}

impl ResourceKind {
    /// All kinds, in navigation order
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Banner,
        ResourceKind::Blog,
        ResourceKind::Category,
        ResourceKind::Faq,
        ResourceKind::EventType,
        ResourceKind::User,
    ];

    /// Canonical identifier used on the command line and in routes
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Banner => "banner",
            ResourceKind::Blog => "blog",
            ResourceKind::Category => "category",
            ResourceKind::Faq => "faq",
            ResourceKind::EventType => "event-type",
            ResourceKind::User => "user",
        }
    }

    /// Human-readable plural label for list headings
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Banner => "Banners",
            ResourceKind::Blog => "Blogs",
            ResourceKind::Category => "Categories",
            ResourceKind::Faq => "FAQs",
            ResourceKind::EventType => "Event Types",
            ResourceKind::User => "Users",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "banner" => Ok(ResourceKind::Banner),
            "blog" => Ok(ResourceKind::Blog),
            "category" => Ok(ResourceKind::Category),
            "faq" => Ok(ResourceKind::Faq),
            "event-type" => Ok(ResourceKind::EventType),
            "user" => Ok(ResourceKind::User),
            other => Err(UnknownKindError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kinds_should_parse() {
        assert_eq!("banner".parse(), Ok(ResourceKind::Banner));
        assert_eq!("event-type".parse(), Ok(ResourceKind::EventType));
        assert_eq!("user".parse(), Ok(ResourceKind::User));
    }

    #[test]
    fn unknown_kind_should_be_an_explicit_error() {
        let err = "gizmo".parse::<ResourceKind>().unwrap_err();
        assert_eq!(err, UnknownKindError("gizmo".to_string()));
        assert!(err.to_string().contains("gizmo"));
    }

    #[test]
    fn display_should_round_trip_through_from_str() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.to_string().parse::<ResourceKind>(), Ok(kind));
        }
    }

    #[test]
    fn labels_should_be_plural_headings() {
        assert_eq!(ResourceKind::Category.label(), "Categories");
        assert_eq!(ResourceKind::EventType.label(), "Event Types");
    }
}
