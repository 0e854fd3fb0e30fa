//! A stand-in for the Treasure rendering host.
//!
//! The real host parses a UI description and builds views. This one keeps
//! the same contract with the theme layer: it receives a registry once at
//! construction, is pointed at a local UI description file, and resolves
//! each element's style by identifier under the mode it is rendering for.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};
use treasure_theme::{
    AppearanceMode, BottomLineVisibility, Color, ElementStyle, Image, Insets, LookupError,
    ResolvedLabel, StyleProvider, StyleRegistry,
};

#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to read UI description '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// An element style with every theme reference resolved for one mode.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedElement {
    Label(ResolvedLabel),
    Image {
        width: f32,
        height: f32,
        layout_margins: Insets,
    },
    NavBar {
        background: Option<Color>,
        title: ResolvedLabel,
        image_size: (f32, f32),
        bottom_line_color: Color,
        bottom_line_height: f32,
        bottom_line_visibility: BottomLineVisibility,
        layout_margins: Insets,
    },
    Divider {
        height: f32,
        color: Color,
    },
}

/// A local UI description handed to the host.
#[derive(Debug, Clone)]
pub struct UiDocument {
    pub path: PathBuf,
    pub source: String,
}

/// Hosts rendering against a single style registry.
#[derive(Debug, Clone)]
pub struct RenderHost {
    registry: Arc<StyleRegistry>,
    document: Option<UiDocument>,
}

impl RenderHost {
    pub fn new(registry: Arc<StyleRegistry>) -> Self {
        debug!(styles = registry.styles().len(), "render host configured");
        Self {
            registry,
            document: None,
        }
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Loads a local UI description. Parsing it is the engine's concern;
    /// the host only keeps the source.
    pub fn load_from_local(&mut self, path: impl AsRef<Path>) -> Result<&UiDocument, HostError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| HostError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), bytes = source.len(), "loaded UI description");
        Ok(&*self.document.insert(UiDocument {
            path: path.to_path_buf(),
            source,
        }))
    }

    pub fn document(&self) -> Option<&UiDocument> {
        self.document.as_ref()
    }

    /// Resolves the style `id` for rendering under `mode`.
    ///
    /// A failure is logged and returned; it never affects other elements.
    pub fn render_element(&self, id: &str, mode: AppearanceMode) -> Result<RenderedElement, LookupError> {
        let result = self.resolve_element(id, mode);
        if let Err(err) = &result {
            warn!(id, %mode, error = %err, "element style did not resolve");
        }
        result
    }

    fn resolve_element(&self, id: &str, mode: AppearanceMode) -> Result<RenderedElement, LookupError> {
        let registry = &*self.registry;
        match registry.style_for(id)? {
            ElementStyle::Label(_) => registry.resolve_label(id, mode).map(RenderedElement::Label),
            ElementStyle::Image(image) => Ok(RenderedElement::Image {
                width: image.image_width,
                height: image.image_height,
                layout_margins: image.basic_props.layout_margins,
            }),
            ElementStyle::NavBar(nav) => {
                let image = registry.style_for(&nav.image_style_id)?;
                let image_size = image
                    .as_image()
                    .map(|s| (s.image_width, s.image_height))
                    .unwrap_or_default();
                let background = nav
                    .basic_props
                    .background_color
                    .as_ref()
                    .map(|c| registry.resolve_color_value(c, mode))
                    .transpose()?;
                Ok(RenderedElement::NavBar {
                    background,
                    title: registry.resolve_label(&nav.title_style_id, mode)?,
                    image_size,
                    bottom_line_color: registry.resolve_color_value(&nav.bottom_line_color, mode)?,
                    bottom_line_height: nav.bottom_line_height,
                    bottom_line_visibility: nav.bottom_line_visibility,
                    layout_margins: nav.basic_props.layout_margins,
                })
            }
            ElementStyle::Divider(divider) => Ok(RenderedElement::Divider {
                height: divider.height,
                color: registry.resolve_color_value(&divider.color, mode)?,
            }),
        }
    }
}

/// Locates bundled images on disk by resource name.
#[derive(Debug, Clone)]
pub struct BundledImages {
    root: PathBuf,
}

impl BundledImages {
    /// File extensions tried in order.
    pub const EXTENSIONS: &'static [&'static str] = &["png", "pdf", "svg"];

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn locate(&self, image: &Image) -> Option<PathBuf> {
        Self::EXTENSIONS
            .iter()
            .map(|ext| self.root.join(format!("{}.{}", image.name(), ext)))
            .find(|path| path.is_file())
    }
}
