//! # Treasure Theme - appearance-aware styles for Treasure hosts
//!
//! `treasure-theme` holds the look-and-feel data a Treasure rendering host
//! consumes: theme component tables that map an identifier and an
//! [`AppearanceMode`] to a concrete color, font or image, and element styles
//! that describe labels, images, navigation bars and dividers in terms of
//! those identifiers.
//!
//! ## Two tiers
//!
//! - **Theme components** ([`ThemeComponent`]): `id -> {light, dark} -> value`,
//!   one table per primitive kind.
//! - **Element styles** ([`ElementStyle`]): layout plus references to theme
//!   components and to other styles. A style written once adapts to both
//!   appearance modes because it only names its colors and fonts.
//!
//! Both tiers are assembled into a [`StyleRegistry`], validated once, and
//! then only read. Resolution is stateless: the mode is an argument to every
//! query.
//!
//! ## Quick Start
//!
//! ```rust
//! use treasure_theme::{
//!     AppearanceMode, Color, DividerStyle, Font, LabelStyle, StyleProvider, StyleRegistry,
//!     ThemeComponent, ThemeEntry,
//! };
//!
//! let registry = StyleRegistry::builder()
//!     .colors(ThemeComponent::build([
//!         ThemeEntry::new("primary", Color::DARK_GRAY, Color::WHITE),
//!         ThemeEntry::new("secondary", Color::RED, Color::WHITE),
//!     ]))
//!     .fonts(ThemeComponent::build([ThemeEntry::fixed("primary", Font::system(30.0))]))
//!     .style(LabelStyle::new("primary_label", "primary", "primary"))
//!     .style(DividerStyle::new("horizontal_divider", 1.0, Color::from_hex("#ff5647").unwrap()))
//!     .build()
//!     .expect("styles reference known components");
//!
//! assert!(registry.style_for("primary_label").is_ok());
//! assert_eq!(registry.color_for("primary", AppearanceMode::Light), Ok(&Color::DARK_GRAY));
//! assert_eq!(registry.color_for("primary", AppearanceMode::Dark), Ok(&Color::WHITE));
//! assert!(registry.color_for("nonexistent", AppearanceMode::Light).is_err());
//! ```
//!
//! ## Authoring
//!
//! Styles and tables are authored as catalogs ([`ComponentPlate`],
//! [`StylePlate`]) with an explicit entry order, or loaded from a YAML
//! [`ThemeSheet`].

pub mod catalog;
pub mod component;
pub mod error;
pub mod mode;
pub mod primitives;
pub mod registry;
pub mod shared;
pub mod sheet;
pub mod style;
mod validate;

pub use catalog::{build_styles, ComponentPlate, StylePlate};
pub use component::{ColorTable, FontTable, ImageTable, ThemeComponent, ThemeEntry, ThemeValue};
pub use error::{ComponentKind, LookupError, ReferenceKind, RegistryError};
pub use mode::{AppearanceMode, ParseModeError};
pub use primitives::{Color, ColorParseError, Font, FontFamily, FontWeight, Image};
pub use registry::{RegistryBuilder, ResolvedLabel, StyleProvider, StyleRegistry};
pub use shared::SharedRegistry;
pub use sheet::{ModeValues, SheetError, ThemeSheet};
pub use style::{
    BasicProps, BottomLineVisibility, ColorValue, DividerStyle, ElementStyle, ImageStyle, Insets,
    LabelStyle, NavBarStyle, StyleKind, StyleMap, TextAlignment,
};
pub use validate::validate_styles;
