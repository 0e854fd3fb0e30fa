//! Properties shared by every element style.

use serde::{Deserialize, Serialize};

use crate::primitives::{Color, ColorParseError};

/// Edge insets in points, ordered top, left, bottom, right.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Insets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl Insets {
    pub const ZERO: Insets = Insets::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub const fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}

impl From<[f32; 4]> for Insets {
    fn from([top, left, bottom, right]: [f32; 4]) -> Self {
        Self::new(top, left, bottom, right)
    }
}

impl From<Insets> for [f32; 4] {
    fn from(insets: Insets) -> Self {
        [insets.top, insets.left, insets.bottom, insets.right]
    }
}

/// A color that is either fixed or looked up in the color table.
///
/// Literal colors ignore the appearance mode entirely. In serialized form a
/// literal is a plain color string (`"#F2F2F2"`, `white`) and a reference is
/// a map `{ theme: primary }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ColorValueRepr", into = "ColorValueRepr")]
pub enum ColorValue {
    Literal(Color),
    Theme(String),
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ColorValueRepr {
    Literal(String),
    Theme { theme: String },
}

impl TryFrom<ColorValueRepr> for ColorValue {
    type Error = ColorParseError;

    fn try_from(repr: ColorValueRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorValueRepr::Literal(s) => s.parse().map(ColorValue::Literal),
            ColorValueRepr::Theme { theme } => Ok(ColorValue::Theme(theme)),
        }
    }
}

impl From<ColorValue> for ColorValueRepr {
    fn from(value: ColorValue) -> Self {
        match value {
            ColorValue::Literal(color) => ColorValueRepr::Literal(color.to_hex()),
            ColorValue::Theme(theme) => ColorValueRepr::Theme { theme },
        }
    }
}

impl ColorValue {
    /// Creates a reference into the color table.
    pub fn theme(id: impl Into<String>) -> Self {
        ColorValue::Theme(id.into())
    }

    /// The referenced color identifier, if this is not a literal.
    pub fn theme_id(&self) -> Option<&str> {
        match self {
            ColorValue::Literal(_) => None,
            ColorValue::Theme(id) => Some(id),
        }
    }
}

impl From<Color> for ColorValue {
    fn from(color: Color) -> Self {
        ColorValue::Literal(color)
    }
}

/// Decoration and layout common to all element styles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicProps {
    pub background_color: Option<ColorValue>,
    pub layout_margins: Insets,
}

impl BasicProps {
    pub fn with_margins(layout_margins: impl Into<Insets>) -> Self {
        Self {
            background_color: None,
            layout_margins: layout_margins.into(),
        }
    }

    pub fn background(mut self, color: impl Into<ColorValue>) -> Self {
        self.background_color = Some(color.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insets_from_array_order() {
        let insets = Insets::from([12.0, 24.0, 12.0, 6.0]);
        assert_eq!(insets.top, 12.0);
        assert_eq!(insets.left, 24.0);
        assert_eq!(insets.bottom, 12.0);
        assert_eq!(insets.right, 6.0);
    }

    #[test]
    fn test_color_value_theme_id() {
        assert_eq!(ColorValue::theme("primary").theme_id(), Some("primary"));
        assert_eq!(ColorValue::from(Color::RED).theme_id(), None);
    }

    #[test]
    fn test_basic_props_builder() {
        let props = BasicProps::with_margins([1.0, 2.0, 3.0, 4.0]).background(Color::WHITE);
        assert_eq!(props.background_color, Some(ColorValue::Literal(Color::WHITE)));
        assert_eq!(props.layout_margins, Insets::new(1.0, 2.0, 3.0, 4.0));
    }
}
