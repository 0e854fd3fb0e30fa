//! Element styles: structured, variant-typed descriptions of UI elements.
//!
//! This module provides:
//!
//! - [`ElementStyle`]: the tagged union over all element style variants
//! - [`LabelStyle`], [`ImageStyle`], [`NavBarStyle`], [`DividerStyle`]
//! - [`BasicProps`], [`Insets`] and [`ColorValue`] shared by every variant
//!
//! Styles never embed appearance-dependent values. Colors and fonts that
//! must follow the appearance mode are referenced by identifier and
//! resolved through the registry's theme tables at render time. Styles that
//! build on other styles (a navigation bar's title) reference them by id
//! as well, so composition is explicit and checked when the registry is
//! assembled.

mod divider;
mod image;
mod label;
mod nav_bar;
mod props;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ReferenceKind;

pub use divider::DividerStyle;
pub use image::ImageStyle;
pub use label::{LabelStyle, TextAlignment};
pub use nav_bar::{BottomLineVisibility, NavBarStyle};
pub use props::{BasicProps, ColorValue, Insets};

/// Element styles keyed by their own id.
pub type StyleMap = HashMap<String, ElementStyle>;

/// Discriminant of [`ElementStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    Label,
    Image,
    NavBar,
    Divider,
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StyleKind::Label => "label",
            StyleKind::Image => "image",
            StyleKind::NavBar => "nav_bar",
            StyleKind::Divider => "divider",
        })
    }
}

/// A style definition for one class of UI element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementStyle {
    Label(LabelStyle),
    Image(ImageStyle),
    NavBar(NavBarStyle),
    Divider(DividerStyle),
}

impl ElementStyle {
    /// The style's own lookup key.
    pub fn id(&self) -> &str {
        match self {
            ElementStyle::Label(s) => &s.id,
            ElementStyle::Image(s) => &s.id,
            ElementStyle::NavBar(s) => &s.id,
            ElementStyle::Divider(s) => &s.id,
        }
    }

    pub fn kind(&self) -> StyleKind {
        match self {
            ElementStyle::Label(_) => StyleKind::Label,
            ElementStyle::Image(_) => StyleKind::Image,
            ElementStyle::NavBar(_) => StyleKind::NavBar,
            ElementStyle::Divider(_) => StyleKind::Divider,
        }
    }

    pub fn basic_props(&self) -> &BasicProps {
        match self {
            ElementStyle::Label(s) => &s.basic_props,
            ElementStyle::Image(s) => &s.basic_props,
            ElementStyle::NavBar(s) => &s.basic_props,
            ElementStyle::Divider(s) => &s.basic_props,
        }
    }

    pub fn layout_margins(&self) -> Insets {
        self.basic_props().layout_margins
    }

    pub fn as_label(&self) -> Option<&LabelStyle> {
        match self {
            ElementStyle::Label(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageStyle> {
        match self {
            ElementStyle::Image(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_nav_bar(&self) -> Option<&NavBarStyle> {
        match self {
            ElementStyle::NavBar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_divider(&self) -> Option<&DividerStyle> {
        match self {
            ElementStyle::Divider(s) => Some(s),
            _ => None,
        }
    }

    /// Every identifier this style points at, with the field it came from.
    ///
    /// Literal colors are not references and are not listed.
    pub fn references(&self) -> Vec<(ReferenceKind, &str)> {
        let mut refs = Vec::new();
        if let Some(id) = self
            .basic_props()
            .background_color
            .as_ref()
            .and_then(ColorValue::theme_id)
        {
            refs.push((ReferenceKind::BackgroundColor, id));
        }

        match self {
            ElementStyle::Label(s) => {
                refs.push((ReferenceKind::TextColor, s.text_color.as_str()));
                refs.push((ReferenceKind::TextFont, s.text_font.as_str()));
            }
            ElementStyle::Image(_) => {}
            ElementStyle::NavBar(s) => {
                refs.push((ReferenceKind::TitleStyle, s.title_style_id.as_str()));
                refs.push((ReferenceKind::ImageStyle, s.image_style_id.as_str()));
                if let Some(id) = s.bottom_line_color.theme_id() {
                    refs.push((ReferenceKind::BottomLineColor, id));
                }
            }
            ElementStyle::Divider(s) => {
                if let Some(id) = s.color.theme_id() {
                    refs.push((ReferenceKind::DividerColor, id));
                }
            }
        }
        refs
    }

    /// Dimension fields that must be finite and strictly positive.
    pub(crate) fn positive_dimensions(&self) -> Vec<(&'static str, f32)> {
        match self {
            ElementStyle::Image(s) => vec![
                ("image_height", s.image_height),
                ("image_width", s.image_width),
            ],
            ElementStyle::Divider(s) => vec![("height", s.height)],
            ElementStyle::Label(_) | ElementStyle::NavBar(_) => Vec::new(),
        }
    }
}

impl From<LabelStyle> for ElementStyle {
    fn from(style: LabelStyle) -> Self {
        ElementStyle::Label(style)
    }
}

impl From<ImageStyle> for ElementStyle {
    fn from(style: ImageStyle) -> Self {
        ElementStyle::Image(style)
    }
}

impl From<NavBarStyle> for ElementStyle {
    fn from(style: NavBarStyle) -> Self {
        ElementStyle::NavBar(style)
    }
}

impl From<DividerStyle> for ElementStyle {
    fn from(style: DividerStyle) -> Self {
        ElementStyle::Divider(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Color;

    #[test]
    fn test_label_references_theme_tables() {
        let style: ElementStyle = LabelStyle::new("primary_label", "primary", "body").into();
        assert_eq!(style.kind(), StyleKind::Label);
        assert_eq!(
            style.references(),
            vec![
                (ReferenceKind::TextColor, "primary"),
                (ReferenceKind::TextFont, "body"),
            ]
        );
    }

    #[test]
    fn test_nav_bar_references_styles_and_colors() {
        let style: ElementStyle = NavBarStyle::new("nav", "title", "icon")
            .with_basic_props(BasicProps::default().background(ColorValue::theme("surface")))
            .bottom_line(
                Color::LIGHT_GRAY,
                1.0,
                BottomLineVisibility::VisibleByContentOffset,
            )
            .into();

        assert_eq!(
            style.references(),
            vec![
                (ReferenceKind::BackgroundColor, "surface"),
                (ReferenceKind::TitleStyle, "title"),
                (ReferenceKind::ImageStyle, "icon"),
            ]
        );
    }

    #[test]
    fn test_literal_divider_has_no_references() {
        let style: ElementStyle =
            DividerStyle::new("horizontal_divider", 1.0, Color::RED).into();
        assert!(style.references().is_empty());
        assert_eq!(style.layout_margins(), Insets::ZERO);
    }

    #[test]
    fn test_accessors_match_variant() {
        let style: ElementStyle = ImageStyle::new("icon", 20.0, 20.0).into();
        assert!(style.as_image().is_some());
        assert!(style.as_label().is_none());
        assert!(style.as_nav_bar().is_none());
        assert!(style.as_divider().is_none());
        assert_eq!(style.id(), "icon");
    }

    #[test]
    fn test_label_defaults() {
        let label = LabelStyle::new("l", "c", "f");
        assert_eq!(label.alignment, TextAlignment::Leading);
        assert_eq!(label.number_of_lines, 0);
    }
}
