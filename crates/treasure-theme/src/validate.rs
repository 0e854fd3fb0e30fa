//! Cross-reference validation between element styles and theme tables.

use tracing::warn;

use crate::component::{ColorTable, FontTable, ImageTable, ThemeComponent, ThemeValue};
use crate::error::{ComponentKind, ReferenceKind, RegistryError};
use crate::style::{ElementStyle, StyleKind, StyleMap};

/// Checks that every style is keyed by its own id and that navigation bar
/// title/image references name styles of the right variant in `styles`.
pub(crate) fn check_style_links(styles: &StyleMap) -> Result<(), RegistryError> {
    for (key, style) in sorted(styles) {
        if key != style.id() {
            return Err(fail(RegistryError::MismatchedId {
                key: key.to_string(),
                style_id: style.id().to_string(),
            }));
        }

        for (kind, target) in style.references() {
            let expected = match kind {
                ReferenceKind::TitleStyle => StyleKind::Label,
                ReferenceKind::ImageStyle => StyleKind::Image,
                _ => continue,
            };
            let found = styles.get(target).map(ElementStyle::kind);
            if found != Some(expected) {
                return Err(fail(RegistryError::BrokenReference {
                    source_id: key.to_string(),
                    missing_id: target.to_string(),
                    kind,
                }));
            }
        }
    }
    Ok(())
}

/// Full validation of styles against the theme tables they reference.
///
/// Styles are visited in sorted id order so the reported error is stable
/// when several references are broken at once.
pub fn validate_styles(
    styles: &StyleMap,
    colors: &ColorTable,
    fonts: &FontTable,
    images: &ImageTable,
) -> Result<(), RegistryError> {
    check_style_links(styles)?;

    for (key, style) in sorted(styles) {
        for (field, value) in style.positive_dimensions() {
            if !(value.is_finite() && value > 0.0) {
                return Err(fail(RegistryError::InvalidDimension {
                    source_id: key.to_string(),
                    field,
                }));
            }
        }

        for (kind, target) in style.references() {
            match kind.target() {
                ComponentKind::Color => check_component(key, kind, target, colors)?,
                ComponentKind::Font => check_component(key, kind, target, fonts)?,
                ComponentKind::Image => check_component(key, kind, target, images)?,
                ComponentKind::Style => {}
            }
        }
    }
    Ok(())
}

fn check_component<T: ThemeValue>(
    source_id: &str,
    kind: ReferenceKind,
    id: &str,
    table: &ThemeComponent<T>,
) -> Result<(), RegistryError> {
    if !table.contains(id) {
        return Err(fail(RegistryError::BrokenReference {
            source_id: source_id.to_string(),
            missing_id: id.to_string(),
            kind,
        }));
    }
    if let Some(mode) = table.missing_mode(id) {
        return Err(fail(RegistryError::IncompleteComponent {
            source_id: source_id.to_string(),
            id: id.to_string(),
            kind,
            mode,
        }));
    }
    Ok(())
}

fn sorted(styles: &StyleMap) -> Vec<(&str, &ElementStyle)> {
    let mut entries: Vec<(&str, &ElementStyle)> =
        styles.iter().map(|(k, v)| (k.as_str(), v)).collect();
    entries.sort_unstable_by_key(|(k, _)| *k);
    entries
}

fn fail(err: RegistryError) -> RegistryError {
    warn!(error = %err, "style validation failed");
    err
}
