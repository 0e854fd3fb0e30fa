//! Theme component tables: identifier to per-mode primitive value.
//!
//! A [`ThemeComponent`] holds one primitive kind (colors, fonts or images).
//! Tables are built wholesale from catalog rows and never patched afterwards.
//!
//! # Example
//!
//! ```rust
//! use treasure_theme::{AppearanceMode, Color, ThemeComponent, ThemeEntry};
//!
//! let colors = ThemeComponent::build([
//!     ThemeEntry::new("primary", Color::DARK_GRAY, Color::WHITE),
//!     ThemeEntry::new("secondary", Color::RED, Color::WHITE),
//! ]);
//!
//! assert_eq!(colors.resolve("primary", AppearanceMode::Dark), Ok(&Color::WHITE));
//! assert!(colors.resolve("tertiary", AppearanceMode::Light).is_err());
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ComponentKind, LookupError};
use crate::mode::AppearanceMode;
use crate::primitives::{Color, Font, Image};

/// One catalog row: an identifier with its light and dark values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeEntry<T> {
    pub id: String,
    pub light: T,
    pub dark: T,
}

impl<T> ThemeEntry<T> {
    pub fn new(id: impl Into<String>, light: T, dark: T) -> Self {
        Self {
            id: id.into(),
            light,
            dark,
        }
    }

    /// Uses the same value in both modes.
    pub fn fixed(id: impl Into<String>, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(id, value.clone(), value)
    }
}

/// Primitive kinds that can be stored in a theme component table.
///
/// The kind is carried into lookup errors so callers can tell which
/// namespace an identifier was missing from.
pub trait ThemeValue: Clone {
    const KIND: ComponentKind;
}

impl ThemeValue for Color {
    const KIND: ComponentKind = ComponentKind::Color;
}

impl ThemeValue for Font {
    const KIND: ComponentKind = ComponentKind::Font;
}

impl ThemeValue for Image {
    const KIND: ComponentKind = ComponentKind::Image;
}

/// A table mapping identifiers to mode-specific values of one primitive kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeComponent<T> {
    values: HashMap<String, HashMap<AppearanceMode, T>>,
}

pub type ColorTable = ThemeComponent<Color>;
pub type FontTable = ThemeComponent<Font>;
pub type ImageTable = ThemeComponent<Image>;

impl<T: ThemeValue> ThemeComponent<T> {
    /// Creates a table with no identifiers.
    pub fn empty() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Builds a table from catalog rows.
    ///
    /// Every row supplies both modes, so the result is complete. When two
    /// rows share an identifier the later row wins.
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ThemeEntry<T>>,
    {
        let mut values = HashMap::new();
        for entry in entries {
            values.insert(
                entry.id,
                HashMap::from([
                    (AppearanceMode::Light, entry.light),
                    (AppearanceMode::Dark, entry.dark),
                ]),
            );
        }
        Self { values }
    }

    /// Wraps an already-shaped map, possibly missing some modes.
    ///
    /// This is the import path for tables that did not come from a catalog.
    /// Missing modes are kept as they are and surface as
    /// [`LookupError::MissingModeValue`] when resolved.
    pub fn from_values(values: HashMap<String, HashMap<AppearanceMode, T>>) -> Self {
        Self { values }
    }

    /// Resolves an identifier under the given mode.
    ///
    /// There is no fallback: an unknown id or an absent mode is an error.
    pub fn resolve(&self, id: &str, mode: AppearanceMode) -> Result<&T, LookupError> {
        let by_mode = self
            .values
            .get(id)
            .ok_or_else(|| LookupError::UnknownIdentifier {
                kind: T::KIND,
                id: id.to_string(),
            })?;
        by_mode.get(&mode).ok_or_else(|| LookupError::MissingModeValue {
            kind: T::KIND,
            id: id.to_string(),
            mode,
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    /// Returns the first mode the identifier has no value for.
    ///
    /// `None` means the identifier is either complete or unknown.
    pub fn missing_mode(&self, id: &str) -> Option<AppearanceMode> {
        let by_mode = self.values.get(id)?;
        AppearanceMode::ALL
            .into_iter()
            .find(|mode| !by_mode.contains_key(mode))
    }

    /// Returns `true` if the identifier exists and has a value for every mode.
    pub fn is_complete(&self, id: &str) -> bool {
        self.contains(id) && self.missing_mode(id).is_none()
    }

    /// All identifiers, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.values.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T: ThemeValue> Default for ThemeComponent<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: ThemeValue> FromIterator<ThemeEntry<T>> for ThemeComponent<T> {
    fn from_iter<I: IntoIterator<Item = ThemeEntry<T>>>(iter: I) -> Self {
        Self::build(iter)
    }
}
