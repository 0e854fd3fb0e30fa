use serde::{Deserialize, Serialize};

use super::props::{BasicProps, ColorValue};
use crate::primitives::Color;

/// When the line under a navigation bar is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BottomLineVisibility {
    #[default]
    AlwaysVisible,
    /// Shown once the content underneath has scrolled away from the top.
    VisibleByContentOffset,
    Hidden,
}

/// Style for a navigation bar.
///
/// The title and image are styled by other entries of the same registry,
/// referenced by id: `title_style_id` must name a label style and
/// `image_style_id` an image style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavBarStyle {
    pub id: String,
    #[serde(default)]
    pub basic_props: BasicProps,
    pub title_style_id: String,
    pub image_style_id: String,
    pub bottom_line_color: ColorValue,
    #[serde(default)]
    pub bottom_line_height: f32,
    #[serde(default)]
    pub bottom_line_visibility: BottomLineVisibility,
}

impl NavBarStyle {
    pub fn new(
        id: impl Into<String>,
        title_style_id: impl Into<String>,
        image_style_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            basic_props: BasicProps::default(),
            title_style_id: title_style_id.into(),
            image_style_id: image_style_id.into(),
            bottom_line_color: ColorValue::Literal(Color::CLEAR),
            bottom_line_height: 0.0,
            bottom_line_visibility: BottomLineVisibility::Hidden,
        }
    }

    pub fn with_basic_props(mut self, basic_props: BasicProps) -> Self {
        self.basic_props = basic_props;
        self
    }

    pub fn bottom_line(
        mut self,
        color: impl Into<ColorValue>,
        height: f32,
        visibility: BottomLineVisibility,
    ) -> Self {
        self.bottom_line_color = color.into();
        self.bottom_line_height = height;
        self.bottom_line_visibility = visibility;
        self
    }
}
