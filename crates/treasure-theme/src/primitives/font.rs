//! Font descriptors.

use serde::{Deserialize, Serialize};

/// The typeface a font draws from.
///
/// Serialized as a string; `"system"` selects the platform font and any
/// other value is taken as a family name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FontFamily {
    /// The platform's system font.
    System,
    /// A font bundled with or installed for the application, by name.
    Named(String),
}

impl From<String> for FontFamily {
    fn from(name: String) -> Self {
        if name.eq_ignore_ascii_case("system") {
            FontFamily::System
        } else {
            FontFamily::Named(name)
        }
    }
}

impl From<FontFamily> for String {
    fn from(family: FontFamily) -> Self {
        match family {
            FontFamily::System => "system".to_string(),
            FontFamily::Named(name) => name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

/// A font at a concrete point size.
///
/// # Example
///
/// ```rust
/// use treasure_theme::{Font, FontWeight};
///
/// let title = Font::system(30.0).with_weight(FontWeight::Bold);
/// assert_eq!(title.size, 30.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    #[serde(default = "system_family")]
    pub family: FontFamily,
    pub size: f32,
    #[serde(default)]
    pub weight: FontWeight,
}

fn system_family() -> FontFamily {
    FontFamily::System
}

impl Font {
    pub fn system(size: f32) -> Self {
        Self {
            family: FontFamily::System,
            size,
            weight: FontWeight::Regular,
        }
    }

    pub fn named(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: FontFamily::Named(family.into()),
            size,
            weight: FontWeight::Regular,
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}
