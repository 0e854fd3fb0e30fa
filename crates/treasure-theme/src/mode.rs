//! Appearance modes that drive theme value resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The light or dark presentation mode a theme value is resolved under.
///
/// The mode is always supplied by the caller. Nothing in this crate keeps a
/// "current" mode, so the same `(id, mode)` pair resolves to the same value
/// for the whole lifetime of a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    Light,
    Dark,
}

impl AppearanceMode {
    /// Every mode, in a fixed order. A complete theme entry has a value for each.
    pub const ALL: [AppearanceMode; 2] = [AppearanceMode::Light, AppearanceMode::Dark];

    /// The mode the host switches to when the user toggles appearance.
    pub fn toggled(self) -> Self {
        match self {
            AppearanceMode::Light => AppearanceMode::Dark,
            AppearanceMode::Dark => AppearanceMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AppearanceMode::Light => "light",
            AppearanceMode::Dark => "dark",
        }
    }
}

impl fmt::Display for AppearanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name an appearance mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown appearance mode '{0}' (expected 'light' or 'dark')")]
pub struct ParseModeError(pub String);

impl FromStr for AppearanceMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(AppearanceMode::Light),
            "dark" => Ok(AppearanceMode::Dark),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alternates() {
        assert_eq!(AppearanceMode::Light.toggled(), AppearanceMode::Dark);
        assert_eq!(AppearanceMode::Dark.toggled(), AppearanceMode::Light);
        assert_eq!(AppearanceMode::Light.toggled().toggled(), AppearanceMode::Light);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Dark".parse::<AppearanceMode>(), Ok(AppearanceMode::Dark));
        assert_eq!(" light ".parse::<AppearanceMode>(), Ok(AppearanceMode::Light));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "dim".parse::<AppearanceMode>().unwrap_err();
        assert!(err.to_string().contains("dim"));
    }

    #[test]
    fn test_display_round_trips() {
        for mode in AppearanceMode::ALL {
            assert_eq!(mode.to_string().parse::<AppearanceMode>(), Ok(mode));
        }
    }
}
