//! The application's catalogs.
//!
//! Identifiers defined here are the contract with the UI description file:
//! the description names styles such as `"primary_label"` and the renderer
//! looks them up verbatim.

mod colors;
mod fonts;
mod images;
mod styles;

pub use colors::ColorPlate;
pub use fonts::FontPlate;
pub use images::LocalImages;
pub use styles::StylesPlate;

use treasure_theme::{ComponentPlate, RegistryError, StylePlate, StyleRegistry};

/// Assembles the application's registry from the four catalogs.
pub fn app_theme() -> Result<StyleRegistry, RegistryError> {
    StyleRegistry::assemble(
        StylesPlate::to_styles()?,
        ColorPlate::to_component(),
        FontPlate::to_component(),
        LocalImages::to_component(),
    )
}
