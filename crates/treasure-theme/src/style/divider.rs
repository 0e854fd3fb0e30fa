use serde::{Deserialize, Serialize};

use super::props::{BasicProps, ColorValue};

/// Style for a horizontal divider line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividerStyle {
    pub id: String,
    #[serde(default)]
    pub basic_props: BasicProps,
    pub height: f32,
    pub color: ColorValue,
}

impl DividerStyle {
    /// Creates a divider with zero layout margins.
    pub fn new(id: impl Into<String>, height: f32, color: impl Into<ColorValue>) -> Self {
        Self {
            id: id.into(),
            basic_props: BasicProps::default(),
            height,
            color: color.into(),
        }
    }
}
