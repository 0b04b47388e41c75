//! Domain value objects: Kind, Casing, FileRole.
//!
//! # Design
//!
//! These are pure value types: `Copy` and compared by value.
//! Every per-kind fact (casing rule, conventional location, advisory
//! message) is answered by a `match` here; adding a kind is a
//! compile error everywhere it is not yet handled.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Kind ─────────────────────────────────────────────────────────────────────

/// The thing being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Asset,
    Component,
    Duck,
    Service,
    View,
    Report,
}

impl Kind {
    /// Every kind, in the order they are offered to the user.
    pub const ALL: [Kind; 6] = [
        Self::Asset,
        Self::Component,
        Self::Duck,
        Self::Report,
        Self::Service,
        Self::View,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::Component => "component",
            Self::Duck => "duck",
            Self::Service => "service",
            Self::View => "view",
            Self::Report => "report",
        }
    }

    /// Naming convention enforced for identifiers of this kind.
    pub const fn casing(self) -> Casing {
        match self {
            Self::Asset | Self::Component | Self::View => Casing::UpperCamel,
            Self::Duck | Self::Service | Self::Report => Casing::LowerCamel,
        }
    }

    /// Conventional project-relative directory that holds things of this kind.
    ///
    /// `None` for components, which are placed wherever the caller says.
    pub const fn location(self) -> Option<&'static str> {
        match self {
            Self::Asset => Some("src/assets"),
            Self::View => Some("src/views"),
            Self::Duck => Some("src/ducks"),
            Self::Service => Some("src/services"),
            Self::Report => Some("src/services/agGrid/reports"),
            Self::Component => None,
        }
    }

    /// Manual follow-up the user has to do after generation, if any.
    pub const fn advisory(self) -> Option<&'static str> {
        match self {
            Self::Duck => Some("Remember to add reference to duck and epic"),
            Self::Report => Some("Remember to add report and layout constants to the application"),
            _ => None,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Asset => "Reusable component under src/assets",
            Self::Component => "Container/presentational component at a chosen location",
            Self::Duck => "Actions, constants, epics, reducer and selectors",
            Self::Service => "Empty service module",
            Self::View => "Routed view component under src/views",
            Self::Report => "Grid report with columns and layouts",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asset" => Ok(Self::Asset),
            "component" | "cmp" => Ok(Self::Component),
            "duck" => Ok(Self::Duck),
            "service" => Ok(Self::Service),
            "view" => Ok(Self::View),
            "report" => Ok(Self::Report),
            other => Err(DomainError::UnknownKind(other.to_string())),
        }
    }
}

// ── Casing ───────────────────────────────────────────────────────────────────

/// Identifier casing convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Casing {
    /// `UserCard`
    UpperCamel,
    /// `userProfile`
    LowerCamel,
}

impl Casing {
    pub const fn label(self) -> &'static str {
        match self {
            Self::UpperCamel => "UpperCamelCase",
            Self::LowerCamel => "lowerCamelCase",
        }
    }

    /// Regex source the identifier has to match in full.
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::UpperCamel => r"^([A-Z]+)([A-Z]?[a-z]+)+$",
            Self::LowerCamel => r"^([a-z]+)([A-Z]?[a-z]+)+$",
        }
    }

    pub const fn example(self) -> &'static str {
        match self {
            Self::UpperCamel => "UserCard",
            Self::LowerCamel => "userProfile",
        }
    }
}

impl fmt::Display for Casing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── FileRole ─────────────────────────────────────────────────────────────────

/// What a generated file is for. One template exists per (Kind, FileRole).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileRole {
    Types,
    Container,
    Presentational,
    Spec,
    Story,
    Index,
    Actions,
    Constants,
    Epics,
    Reducers,
    Selectors,
    Columns,
    Layouts,
}

impl FileRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Types => "types",
            Self::Container => "container",
            Self::Presentational => "presentational",
            Self::Spec => "spec",
            Self::Story => "story",
            Self::Index => "index",
            Self::Actions => "actions",
            Self::Constants => "constants",
            Self::Epics => "epics",
            Self::Reducers => "reducers",
            Self::Selectors => "selectors",
            Self::Columns => "columns",
            Self::Layouts => "layouts",
        }
    }
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!(Kind::from_str("duck").unwrap(), Kind::Duck);
        assert_eq!(Kind::from_str("VIEW").unwrap(), Kind::View);
        assert_eq!(Kind::from_str(" report ").unwrap(), Kind::Report);
        assert_eq!(Kind::from_str("cmp").unwrap(), Kind::Component);
    }

    #[test]
    fn unknown_kind_is_error() {
        assert_eq!(
            Kind::from_str("widget"),
            Err(DomainError::UnknownKind("widget".into()))
        );
    }

    #[test]
    fn kind_display_round_trips_through_from_str() {
        for kind in Kind::ALL {
            assert_eq!(Kind::from_str(&kind.to_string()).unwrap(), kind);
        }
    }

    #[test]
    fn upper_camel_kinds() {
        assert_eq!(Kind::Asset.casing(), Casing::UpperCamel);
        assert_eq!(Kind::Component.casing(), Casing::UpperCamel);
        assert_eq!(Kind::View.casing(), Casing::UpperCamel);
    }

    #[test]
    fn lower_camel_kinds() {
        assert_eq!(Kind::Duck.casing(), Casing::LowerCamel);
        assert_eq!(Kind::Service.casing(), Casing::LowerCamel);
        assert_eq!(Kind::Report.casing(), Casing::LowerCamel);
    }

    #[test]
    fn only_component_has_no_fixed_location() {
        for kind in Kind::ALL {
            assert_eq!(kind.location().is_none(), kind == Kind::Component);
        }
    }

    #[test]
    fn advisory_only_for_duck_and_report() {
        assert!(Kind::Duck.advisory().is_some());
        assert!(Kind::Report.advisory().is_some());
        assert!(Kind::Service.advisory().is_none());
        assert!(Kind::Component.advisory().is_none());
    }
}
