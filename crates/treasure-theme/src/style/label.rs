use serde::{Deserialize, Serialize};

use super::props::{BasicProps, Insets};

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlignment {
    #[default]
    Leading,
    Center,
    Trailing,
}

/// Style for a text label.
///
/// Text color and font are identifiers into the registry's color and font
/// tables, so a single label style follows the appearance mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub id: String,
    #[serde(default)]
    pub basic_props: BasicProps,
    pub text_color: String,
    pub text_font: String,
    #[serde(default)]
    pub alignment: TextAlignment,
    /// Maximum number of lines; `0` means unbounded.
    #[serde(default)]
    pub number_of_lines: u32,
}

impl LabelStyle {
    pub fn new(
        id: impl Into<String>,
        text_color: impl Into<String>,
        text_font: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            basic_props: BasicProps::default(),
            text_color: text_color.into(),
            text_font: text_font.into(),
            alignment: TextAlignment::Leading,
            number_of_lines: 0,
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

    pub fn alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn number_of_lines(mut self, lines: u32) -> Self {
        self.number_of_lines = lines;
        self
    }
}
