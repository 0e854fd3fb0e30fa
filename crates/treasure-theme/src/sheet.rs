//! YAML theme sheets.
//!
//! A theme sheet describes a whole registry in one document, as an
//! alternative to authoring catalogs in code:
//!
//! ```yaml
//! colors:
//!   primary: { light: darkGray, dark: white }
//! fonts:
//!   primary: { light: { size: 30 }, dark: { size: 30 } }
//! images:
//!   logo: { light: logo, dark: logo }
//! styles:
//!   - type: label
//!     id: primary_label
//!     text_color: primary
//!     text_font: primary
//!     number_of_lines: 1
//!     basic_props:
//!       layout_margins: [12, 24, 12, 12]
//!   - type: divider
//!     id: horizontal_divider
//!     height: 1
//!     color: "#ff5647"
//! ```
//!
//! Every color, font and image entry must give both `light` and `dark`.
//! The `styles` sequence is the catalog order, so a repeated id replaces
//! the earlier entry.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::catalog::build_styles;
use crate::component::{ThemeComponent, ThemeEntry, ThemeValue};
use crate::error::RegistryError;
use crate::primitives::{Color, Font, Image};
use crate::registry::StyleRegistry;
use crate::style::ElementStyle;

/// Error returned when a theme sheet cannot be read or turned into a registry.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("failed to read theme sheet '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid theme sheet: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// The light and dark value of one sheet entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModeValues<T> {
    pub light: T,
    pub dark: T,
}

/// A deserialized theme sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSheet {
    pub colors: BTreeMap<String, ModeValues<Color>>,
    pub fonts: BTreeMap<String, ModeValues<Font>>,
    pub images: BTreeMap<String, ModeValues<Image>>,
    pub styles: Vec<ElementStyle>,
}

impl ThemeSheet {
    pub fn from_yaml(source: &str) -> Result<Self, SheetError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SheetError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| SheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading theme sheet");
        Self::from_yaml(&source)
    }

    pub fn to_yaml(&self) -> Result<String, SheetError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Builds and validates the registry described by this sheet.
    pub fn into_registry(self) -> Result<StyleRegistry, SheetError> {
        let styles = build_styles(
            self.styles
                .into_iter()
                .map(|style| (style.id().to_string(), style)),
        )?;
        let registry = StyleRegistry::assemble(
            styles,
            table(self.colors),
            table(self.fonts),
            table(self.images),
        )?;
        Ok(registry)
    }
}

fn table<T: ThemeValue>(entries: BTreeMap<String, ModeValues<T>>) -> ThemeComponent<T> {
    ThemeComponent::build(
        entries
            .into_iter()
            .map(|(id, values)| ThemeEntry::new(id, values.light, values.dark)),
    )
}

impl StyleRegistry {
    /// Parses a YAML theme sheet and assembles it. See [`ThemeSheet`].
    pub fn from_yaml(source: &str) -> Result<Self, SheetError> {
        ThemeSheet::from_yaml(source)?.into_registry()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReferenceKind;
    use crate::registry::StyleProvider;
    use crate::style::{BottomLineVisibility, ColorValue, Insets, TextAlignment};
    use crate::AppearanceMode;

    const SHEET: &str = r##"
colors:
  primary: { light: darkGray, dark: white }
  secondary: { light: "#FF0000", dark: white }
fonts:
  primary: { light: { size: 30 }, dark: { size: 30 } }
  secondary:
    light: { family: Avenir, size: 20, weight: bold }
    dark: { family: Avenir, size: 20, weight: bold }
images:
  logo: { light: logo, dark: logo_dark }
styles:
  - type: label
    id: primary_label
    text_color: primary
    text_font: primary
    alignment: center
    number_of_lines: 1
    basic_props:
      layout_margins: [12, 24, 12, 12]
  - type: image
    id: image_nav_bar
    image_height: 20
    image_width: 20
  - type: nav_bar
    id: nav_bar_style
    basic_props:
      background_color: "#F2F2F2"
      layout_margins: [12, 20, 12, 12]
    title_style_id: primary_label
    image_style_id: image_nav_bar
    bottom_line_color: { theme: secondary }
    bottom_line_height: 1
    bottom_line_visibility: visible_by_content_offset
  - type: divider
    id: horizontal_divider
    height: 1
    color: "#ff5647"
"##;

    #[test]
    fn test_sheet_builds_registry() {
        let registry = StyleRegistry::from_yaml(SHEET).unwrap();

        assert_eq!(registry.color_for("primary", AppearanceMode::Light), Ok(&Color::DARK_GRAY));
        assert_eq!(registry.color_for("secondary", AppearanceMode::Light), Ok(&Color::RED));
        assert_eq!(
            registry.image_for("logo", AppearanceMode::Dark).map(Image::name),
            Ok("logo_dark")
        );

        let label = registry.resolve_label("primary_label", AppearanceMode::Light).unwrap();
        assert_eq!(label.alignment, TextAlignment::Center);
        assert_eq!(label.layout_margins, Insets::new(12.0, 24.0, 12.0, 12.0));

        let nav = registry.style_for("nav_bar_style").unwrap().as_nav_bar().unwrap();
        assert_eq!(
            nav.basic_props.background_color,
            Some(ColorValue::Literal(Color::rgb(0xF2, 0xF2, 0xF2)))
        );
        assert_eq!(nav.bottom_line_color, ColorValue::theme("secondary"));
        assert_eq!(
            nav.bottom_line_visibility,
            BottomLineVisibility::VisibleByContentOffset
        );
    }

    #[test]
    fn test_named_font_family() {
        let registry = StyleRegistry::from_yaml(SHEET).unwrap();
        let font = registry.font_for("secondary", AppearanceMode::Light).unwrap();
        assert_eq!(font, &Font::named("Avenir", 20.0).with_weight(crate::FontWeight::Bold));
    }

    #[test]
    fn test_entry_missing_a_mode_is_rejected() {
        let result = ThemeSheet::from_yaml("colors:\n  primary: { light: white }\n");
        assert!(matches!(result, Err(SheetError::Parse(_))));
    }

    #[test]
    fn test_broken_reference_surfaces_as_registry_error() {
        let source = r#"
styles:
  - type: label
    id: primary_label
    text_color: primary
    text_font: primary
"#;
        match StyleRegistry::from_yaml(source) {
            Err(SheetError::Registry(RegistryError::BrokenReference { kind, .. })) => {
                assert_eq!(kind, ReferenceKind::TextColor);
            }
            other => panic!("expected broken reference, got {:?}", other),
        }
    }

    #[test]
    fn test_sheet_yaml_round_trip() {
        let sheet = ThemeSheet::from_yaml(SHEET).unwrap();
        let reparsed = ThemeSheet::from_yaml(&sheet.to_yaml().unwrap()).unwrap();
        assert_eq!(sheet, reparsed);
    }
}
