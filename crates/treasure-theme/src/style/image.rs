use serde::{Deserialize, Serialize};

use super::props::{BasicProps, Insets};

/// Style for an image element with a fixed frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageStyle {
    pub id: String,
    #[serde(default)]
    pub basic_props: BasicProps,
    pub image_height: f32,
    pub image_width: f32,
}

impl ImageStyle {
    pub fn new(id: impl Into<String>, image_width: f32, image_height: f32) -> Self {
        Self {
            id: id.into(),
            basic_props: BasicProps::default(),
            image_height,
            image_width,
        }
    }

    pub fn with_basic_props(mut self, basic_props: BasicProps) -> Self {
        self.basic_props = basic_props;
        self
    }

    pub fn layout_margins(mut self, margins: impl Into<Insets>) -> Self {
        self.basic_props.layout_margins = margins.into();
        self
    }
}
