//! The assembled, read-only style registry.
//!
//! [`StyleRegistry`] aggregates one style map and the color, font and image
//! tables. It is built once at startup and handed by reference to the
//! rendering engine, which queries it through [`StyleProvider`].
//!
//! # Design
//!
//! The registry holds no notion of a current appearance mode. Every theme
//! query takes the mode as an argument, so the same `(id, mode)` pair always
//! resolves to the same value and a mode switch needs no invalidation.
//!
//! There are no mutation methods. A registry can be shared between threads
//! without locking; replacing it wholesale is the job of
//! [`SharedRegistry`](crate::SharedRegistry).
//!
//! # Example
//!
//! ```rust
//! use treasure_theme::{
//!     AppearanceMode, Color, Font, LabelStyle, StyleRegistry, ThemeComponent, ThemeEntry,
//! };
//!
//! let registry = StyleRegistry::builder()
//!     .colors(ThemeComponent::build([
//!         ThemeEntry::new("primary", Color::DARK_GRAY, Color::WHITE),
//!     ]))
//!     .fonts(ThemeComponent::build([ThemeEntry::fixed("primary", Font::system(30.0))]))
//!     .style(LabelStyle::new("primary_label", "primary", "primary").number_of_lines(1))
//!     .build()
//!     .unwrap();
//!
//! let label = registry.resolve_label("primary_label", AppearanceMode::Dark).unwrap();
//! assert_eq!(label.color, Color::WHITE);
//! ```

use tracing::debug;

use crate::catalog::build_styles;
use crate::component::{ColorTable, FontTable, ImageTable};
use crate::error::{ComponentKind, LookupError, RegistryError};
use crate::mode::AppearanceMode;
use crate::primitives::{Color, Font, Image};
use crate::style::{ColorValue, ElementStyle, Insets, StyleMap, TextAlignment};
use crate::validate::validate_styles;

/// The query surface the rendering engine is written against.
///
/// Identifiers are matched exactly and case-sensitively.
pub trait StyleProvider: Send + Sync {
    fn style_for(&self, id: &str) -> Result<&ElementStyle, LookupError>;

    fn color_for(&self, id: &str, mode: AppearanceMode) -> Result<&Color, LookupError>;

    fn font_for(&self, id: &str, mode: AppearanceMode) -> Result<&Font, LookupError>;

    fn image_for(&self, id: &str, mode: AppearanceMode) -> Result<&Image, LookupError>;
}

/// All element styles and theme tables for one application session.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    styles: StyleMap,
    colors: ColorTable,
    fonts: FontTable,
    images: ImageTable,
}

impl StyleRegistry {
    /// Assembles a registry, validating every cross-reference.
    ///
    /// # Errors
    ///
    /// Returns the first [`RegistryError`] found. Nothing is constructed in
    /// that case.
    pub fn assemble(
        styles: StyleMap,
        colors: ColorTable,
        fonts: FontTable,
        images: ImageTable,
    ) -> Result<Self, RegistryError> {
        validate_styles(&styles, &colors, &fonts, &images)?;
        debug!(
            styles = styles.len(),
            colors = colors.len(),
            fonts = fonts.len(),
            images = images.len(),
            "style registry assembled"
        );
        Ok(Self {
            styles,
            colors,
            fonts,
            images,
        })
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Resolves a color that may be literal or a theme reference.
    ///
    /// Literal colors are returned unchanged whatever the mode.
    pub fn resolve_color_value(
        &self,
        value: &ColorValue,
        mode: AppearanceMode,
    ) -> Result<Color, LookupError> {
        match value {
            ColorValue::Literal(color) => Ok(*color),
            ColorValue::Theme(id) => self.color_for(id, mode).copied(),
        }
    }

    /// Resolves a label style's color and font references under `mode`.
    pub fn resolve_label(&self, id: &str, mode: AppearanceMode) -> Result<ResolvedLabel, LookupError> {
        let style = self.style_for(id)?;
        let label = style.as_label().ok_or_else(|| LookupError::UnknownIdentifier {
            kind: ComponentKind::Style,
            id: id.to_string(),
        })?;

        Ok(ResolvedLabel {
            color: *self.color_for(&label.text_color, mode)?,
            font: self.font_for(&label.text_font, mode)?.clone(),
            alignment: label.alignment,
            number_of_lines: label.number_of_lines,
            layout_margins: label.basic_props.layout_margins,
        })
    }

    pub fn styles(&self) -> &StyleMap {
        &self.styles
    }

    /// Style ids, sorted.
    pub fn style_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.styles.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    pub fn fonts(&self) -> &FontTable {
        &self.fonts
    }

    pub fn images(&self) -> &ImageTable {
        &self.images
    }
}

impl StyleProvider for StyleRegistry {
    fn style_for(&self, id: &str) -> Result<&ElementStyle, LookupError> {
        self.styles
            .get(id)
            .ok_or_else(|| LookupError::UnknownIdentifier {
                kind: ComponentKind::Style,
                id: id.to_string(),
            })
    }

    fn color_for(&self, id: &str, mode: AppearanceMode) -> Result<&Color, LookupError> {
        self.colors.resolve(id, mode)
    }

    fn font_for(&self, id: &str, mode: AppearanceMode) -> Result<&Font, LookupError> {
        self.fonts.resolve(id, mode)
    }

    fn image_for(&self, id: &str, mode: AppearanceMode) -> Result<&Image, LookupError> {
        self.images.resolve(id, mode)
    }
}

/// A label style with its theme references resolved for one mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLabel {
    pub color: Color,
    pub font: Font,
    pub alignment: TextAlignment,
    pub number_of_lines: u32,
    pub layout_margins: Insets,
}

/// Fluent builder for [`StyleRegistry`].
///
/// Tables left unset are empty. Styles added with [`style`](Self::style)
/// are kept in call order, so a repeated id replaces the earlier one.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    styles: Vec<(String, ElementStyle)>,
    colors: ColorTable,
    fonts: FontTable,
    images: ImageTable,
}

impl RegistryBuilder {
    pub fn style(mut self, style: impl Into<ElementStyle>) -> Self {
        let style = style.into();
        self.styles.push((style.id().to_string(), style));
        self
    }

    pub fn styles<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, ElementStyle)>,
    {
        self.styles.extend(entries);
        self
    }

    pub fn colors(mut self, colors: ColorTable) -> Self {
        self.colors = colors;
        self
    }

    pub fn fonts(mut self, fonts: FontTable) -> Self {
        self.fonts = fonts;
        self
    }

    pub fn images(mut self, images: ImageTable) -> Self {
        self.images = images;
        self
    }

    pub fn build(self) -> Result<StyleRegistry, RegistryError> {
        let styles = build_styles(self.styles)?;
        StyleRegistry::assemble(styles, self.colors, self.fonts, self.images)
    }
}
