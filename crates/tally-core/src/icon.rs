//! Icon key enum as the single source of truth for icon identity.
//!
//! The key set is closed at build time; extending it means adding both a
//! variant here and a handle in [`IconKey::handle`]. String lookup at the
//! UI boundary yields absence for unknown keys, never a default icon.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical icon identities selectable for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKey {
    Album,
    Anvil,
    Apple,
    AppWindow,
    Armchair,
    Book,
    Briefcase,
    Library,
    Star,
}

/// A renderable icon reference for UI code.
///
/// `name` is the stable asset name in the icon set; `label` is a
/// human-readable caption for pickers and tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconHandle {
    pub name: &'static str,
    pub label: &'static str,
}

impl IconKey {
    /// Every icon key, in picker display order.
    pub const ALL: [Self; 9] = [
        Self::Album,
        Self::Anvil,
        Self::Apple,
        Self::AppWindow,
        Self::Armchair,
        Self::Book,
        Self::Briefcase,
        Self::Library,
        Self::Star,
    ];

    /// Canonical string key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Album => "album",
            Self::Anvil => "anvil",
            Self::Apple => "apple",
            Self::AppWindow => "app-window",
            Self::Armchair => "armchair",
            Self::Book => "book",
            Self::Briefcase => "briefcase",
            Self::Library => "library",
            Self::Star => "star",
        }
    }

    /// Resolves a string key, yielding `None` for anything outside the set.
    #[must_use]
    pub fn lookup(key: &str) -> Option<Self> {
        key.parse().ok()
    }

    /// The rendering-layer handle for this key.
    #[must_use]
    pub const fn handle(self) -> IconHandle {
        match self {
            Self::Album => IconHandle {
                name: "album",
                label: "Album",
            },
            Self::Anvil => IconHandle {
                name: "anvil",
                label: "Anvil",
            },
            Self::Apple => IconHandle {
                name: "apple",
                label: "Apple",
            },
            Self::AppWindow => IconHandle {
                name: "app-window",
                label: "App window",
            },
            Self::Armchair => IconHandle {
                name: "armchair",
                label: "Armchair",
            },
            Self::Book => IconHandle {
                name: "book",
                label: "Book",
            },
            Self::Briefcase => IconHandle {
                name: "briefcase",
                label: "Briefcase",
            },
            Self::Library => IconHandle {
                name: "library",
                label: "Library",
            },
            Self::Star => IconHandle {
                name: "star",
                label: "Star",
            },
        }
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IconKey {
    type Err = UnknownIconKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "album" => Ok(Self::Album),
            "anvil" => Ok(Self::Anvil),
            "apple" => Ok(Self::Apple),
            "app-window" => Ok(Self::AppWindow),
            "armchair" => Ok(Self::Armchair),
            "book" => Ok(Self::Book),
            "briefcase" => Ok(Self::Briefcase),
            "library" => Ok(Self::Library),
            "star" => Ok(Self::Star),
            _ => Err(UnknownIconKey(s.to_string())),
        }
    }
}

impl Serialize for IconKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for IconKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for strings outside the icon key set.
#[derive(Debug, Clone, Error)]
#[error("unknown icon key: {0}")]
pub struct UnknownIconKey(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_all_variants() {
        for key in IconKey::ALL {
            let s = key.to_string();
            let parsed: IconKey = s.parse().expect("should parse");
            assert_eq!(parsed, key, "roundtrip failed for {key:?}");
        }
    }

    #[test]
    fn lookup_unknown_yields_absence() {
        assert_eq!(IconKey::lookup("rocket"), None);
        assert_eq!(IconKey::lookup(""), None);
        assert_eq!(IconKey::lookup("Briefcase"), None);
    }

    #[test]
    fn lookup_known_keys() {
        assert_eq!(IconKey::lookup("briefcase"), Some(IconKey::Briefcase));
        assert_eq!(IconKey::lookup("app-window"), Some(IconKey::AppWindow));
    }

    #[test]
    fn unknown_key_errors() {
        let result: Result<IconKey, _> = "rocket".parse();
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "unknown icon key: rocket");
    }

    #[test]
    fn handle_name_matches_key() {
        for key in IconKey::ALL {
            assert_eq!(key.handle().name, key.as_str());
            assert!(!key.handle().label.is_empty());
        }
    }

    #[test]
    fn serde_uses_string_key() {
        let json = serde_json::to_string(&IconKey::AppWindow).unwrap();
        assert_eq!(json, "\"app-window\"");
        let parsed: IconKey = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, IconKey::AppWindow);
    }

    #[test]
    fn serde_rejects_unknown_key() {
        let result: Result<IconKey, _> = serde_json::from_str("\"rocket\"");
        assert!(result.is_err());
    }
}
