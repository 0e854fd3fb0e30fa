//! Catalogs: the authoring layer that produces tables and style maps.
//!
//! A catalog is usually a plain enum listing every entry explicitly in
//! [`ComponentPlate::ALL`] or [`StylePlate::ALL`]. The order of that slice
//! is the build order, which makes duplicate-id handling deterministic:
//! the later entry wins.
//!
//! # Example
//!
//! ```rust
//! use treasure_theme::{AppearanceMode, Color, ComponentPlate};
//!
//! #[derive(Clone, Copy)]
//! enum Palette {
//!     Primary,
//!     Secondary,
//! }
//!
//! impl ComponentPlate for Palette {
//!     type Value = Color;
//!     const ALL: &'static [Self] = &[Palette::Primary, Palette::Secondary];
//!
//!     fn id(self) -> &'static str {
//!         match self {
//!             Palette::Primary => "primary",
//!             Palette::Secondary => "secondary",
//!         }
//!     }
//!
//!     fn light(self) -> Color {
//!         match self {
//!             Palette::Primary => Color::DARK_GRAY,
//!             Palette::Secondary => Color::RED,
//!         }
//!     }
//!
//!     fn dark(self) -> Color {
//!         Color::WHITE
//!     }
//! }
//!
//! let colors = Palette::to_component();
//! assert_eq!(colors.resolve("secondary", AppearanceMode::Light), Ok(&Color::RED));
//! ```

use crate::component::{ThemeComponent, ThemeEntry, ThemeValue};
use crate::error::RegistryError;
use crate::style::{ElementStyle, StyleMap};
use crate::validate::check_style_links;

/// A catalog of theme component entries of one primitive kind.
pub trait ComponentPlate: Copy + 'static {
    type Value: ThemeValue;

    /// Every entry, in build order.
    const ALL: &'static [Self];

    fn id(self) -> &'static str;

    fn light(self) -> Self::Value;

    fn dark(self) -> Self::Value;

    fn entry(self) -> ThemeEntry<Self::Value> {
        ThemeEntry::new(self.id(), self.light(), self.dark())
    }

    fn entries() -> Vec<ThemeEntry<Self::Value>> {
        Self::ALL.iter().map(|plate| plate.entry()).collect()
    }

    fn to_component() -> ThemeComponent<Self::Value> {
        ThemeComponent::build(Self::entries())
    }
}

/// A catalog of element styles.
pub trait StylePlate: Copy + 'static {
    /// Every entry, in build order.
    const ALL: &'static [Self];

    fn id(self) -> &'static str;

    fn to_style(self) -> ElementStyle;

    fn entries() -> Vec<(String, ElementStyle)> {
        Self::ALL
            .iter()
            .map(|plate| (plate.id().to_string(), plate.to_style()))
            .collect()
    }

    /// Builds and checks the style map. See [`build_styles`].
    fn to_styles() -> Result<StyleMap, RegistryError> {
        build_styles(Self::entries())
    }
}

/// Builds a style map from ordered `(id, style)` pairs.
///
/// Later entries with a duplicate id replace earlier ones. The result is
/// checked before it is returned: every key must equal its style's own id
/// and navigation bar title/image references must name styles of the
/// right variant in the same map. Theme table references are checked when
/// the registry is assembled, since the tables are not known here.
pub fn build_styles<I>(entries: I) -> Result<StyleMap, RegistryError>
where
    I: IntoIterator<Item = (String, ElementStyle)>,
{
    let mut styles = StyleMap::new();
    for (id, style) in entries {
        styles.insert(id, style);
    }
    check_style_links(&styles)?;
    Ok(styles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReferenceKind;
    use crate::primitives::Color;
    use crate::style::{DividerStyle, ImageStyle, LabelStyle, NavBarStyle};

    #[test]
    fn test_build_styles_last_wins() {
        let styles = build_styles([
            (
                "rule".to_string(),
                DividerStyle::new("rule", 1.0, Color::RED).into(),
            ),
            (
                "rule".to_string(),
                DividerStyle::new("rule", 2.0, Color::BLUE).into(),
            ),
        ])
        .unwrap();

        assert_eq!(styles.len(), 1);
        let rule = styles["rule"].as_divider().unwrap();
        assert_eq!(rule.height, 2.0);
    }

    #[test]
    fn test_build_styles_rejects_dangling_title() {
        let err = build_styles([
            (
                "icon".to_string(),
                ImageStyle::new("icon", 20.0, 20.0).into(),
            ),
            (
                "nav".to_string(),
                NavBarStyle::new("nav", "missing_title", "icon").into(),
            ),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            RegistryError::BrokenReference {
                source_id: "nav".to_string(),
                missing_id: "missing_title".to_string(),
                kind: ReferenceKind::TitleStyle,
            }
        );
    }

    #[derive(Clone, Copy)]
    enum Plate {
        Title,
        Icon,
        Nav,
    }

    impl StylePlate for Plate {
        const ALL: &'static [Self] = &[Plate::Title, Plate::Icon, Plate::Nav];

        fn id(self) -> &'static str {
            match self {
                Plate::Title => "title",
                Plate::Icon => "icon",
                Plate::Nav => "nav",
            }
        }

        fn to_style(self) -> ElementStyle {
            match self {
                Plate::Title => LabelStyle::new(self.id(), "primary", "primary").into(),
                Plate::Icon => ImageStyle::new(self.id(), 20.0, 20.0).into(),
                Plate::Nav => NavBarStyle::new(self.id(), "title", "icon").into(),
            }
        }
    }

    #[test]
    fn test_style_plate_entries_follow_all_order() {
        let ids: Vec<String> = Plate::entries().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["title", "icon", "nav"]);
        assert_eq!(Plate::to_styles().unwrap().len(), 3);
    }
}
