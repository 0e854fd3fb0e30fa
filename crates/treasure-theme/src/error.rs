//! Lookup and registry build errors.
//!
//! Two families of failure exist and they propagate differently:
//!
//! - [`LookupError`] is returned by a single query against an assembled
//!   registry. It is reported to the caller and never aborts anything else.
//! - [`RegistryError`] is returned while building or assembling. No registry
//!   value exists when one of these is returned.

use std::fmt;

use thiserror::Error;

use crate::mode::AppearanceMode;

/// The namespace an identifier lives in.
///
/// Each primitive kind has its own table, so a color id and a font id may
/// share a name without conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Color,
    Font,
    Image,
    Style,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ComponentKind::Color => "color",
            ComponentKind::Font => "font",
            ComponentKind::Image => "image",
            ComponentKind::Style => "style",
        })
    }
}

/// Error returned when a query cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No entry with this identifier exists in the table.
    #[error("unknown {kind} identifier '{id}'")]
    UnknownIdentifier { kind: ComponentKind, id: String },
    /// The identifier exists but has no value for the requested mode.
    #[error("{kind} '{id}' has no value for {mode} mode")]
    MissingModeValue {
        kind: ComponentKind,
        id: String,
        mode: AppearanceMode,
    },
}

impl LookupError {
    /// The identifier that failed to resolve.
    pub fn id(&self) -> &str {
        match self {
            LookupError::UnknownIdentifier { id, .. } | LookupError::MissingModeValue { id, .. } => {
                id
            }
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            LookupError::UnknownIdentifier { kind, .. } | LookupError::MissingModeValue { kind, .. } => {
                *kind
            }
        }
    }
}

/// The field a cross-reference originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// `title_style_id` of a navigation bar, must name a label style.
    TitleStyle,
    /// `image_style_id` of a navigation bar, must name an image style.
    ImageStyle,
    TextColor,
    TextFont,
    BackgroundColor,
    BottomLineColor,
    DividerColor,
}

impl ReferenceKind {
    /// The table the referenced identifier must be found in.
    pub fn target(self) -> ComponentKind {
        match self {
            ReferenceKind::TitleStyle | ReferenceKind::ImageStyle => ComponentKind::Style,
            ReferenceKind::TextFont => ComponentKind::Font,
            ReferenceKind::TextColor
            | ReferenceKind::BackgroundColor
            | ReferenceKind::BottomLineColor
            | ReferenceKind::DividerColor => ComponentKind::Color,
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReferenceKind::TitleStyle => "title style",
            ReferenceKind::ImageStyle => "image style",
            ReferenceKind::TextColor => "text color",
            ReferenceKind::TextFont => "text font",
            ReferenceKind::BackgroundColor => "background color",
            ReferenceKind::BottomLineColor => "bottom line color",
            ReferenceKind::DividerColor => "divider color",
        })
    }
}

/// Error returned when styles or tables cannot be assembled into a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A style references an identifier that does not resolve.
    ///
    /// Style references also fail this way when the target exists but is
    /// of the wrong variant (a title style that is not a label).
    #[error("style '{source_id}' references missing {kind} '{missing_id}'")]
    BrokenReference {
        source_id: String,
        missing_id: String,
        kind: ReferenceKind,
    },
    /// A referenced theme component lacks a value for one mode.
    #[error("style '{source_id}' references {kind} '{id}', which has no {mode} value")]
    IncompleteComponent {
        source_id: String,
        id: String,
        kind: ReferenceKind,
        mode: AppearanceMode,
    },
    /// A size that must be strictly positive is zero, negative or not finite.
    #[error("style '{source_id}' has a non-positive {field}")]
    InvalidDimension {
        source_id: String,
        field: &'static str,
    },
    /// A catalog keyed a style under a different id than the style carries.
    #[error("style keyed as '{key}' declares id '{style_id}'")]
    MismatchedId { key: String, style_id: String },
}

impl RegistryError {
    /// The style whose definition caused the failure.
    pub fn source_id(&self) -> &str {
        match self {
            RegistryError::BrokenReference { source_id, .. }
            | RegistryError::IncompleteComponent { source_id, .. }
            | RegistryError::InvalidDimension { source_id, .. } => source_id,
            RegistryError::MismatchedId { key, .. } => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_identifier_display() {
        let err = LookupError::UnknownIdentifier {
            kind: ComponentKind::Color,
            id: "nonexistent".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("color"));
        assert!(msg.contains("nonexistent"));
        assert_eq!(err.id(), "nonexistent");
    }

    #[test]
    fn test_missing_mode_display() {
        let err = LookupError::MissingModeValue {
            kind: ComponentKind::Font,
            id: "primary".to_string(),
            mode: AppearanceMode::Dark,
        };
        assert_eq!(err.to_string(), "font 'primary' has no value for dark mode");
        assert_eq!(err.kind(), ComponentKind::Font);
    }

    #[test]
    fn test_broken_reference_display() {
        let err = RegistryError::BrokenReference {
            source_id: "nav_bar_style".to_string(),
            missing_id: "ghost".to_string(),
            kind: ReferenceKind::TitleStyle,
        };
        let msg = err.to_string();
        assert!(msg.contains("nav_bar_style"));
        assert!(msg.contains("title style"));
        assert!(msg.contains("ghost"));
        assert_eq!(err.source_id(), "nav_bar_style");
    }

    #[test]
    fn test_reference_targets() {
        assert_eq!(ReferenceKind::TitleStyle.target(), ComponentKind::Style);
        assert_eq!(ReferenceKind::TextFont.target(), ComponentKind::Font);
        assert_eq!(ReferenceKind::DividerColor.target(), ComponentKind::Color);
    }
}
