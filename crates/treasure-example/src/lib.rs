//! Example host application for the Treasure UI framework.
//!
//! The application is glue: it builds the style registry from its catalogs
//! (see [`plates`]), hands it to a [`RenderHost`](host::RenderHost) once, and
//! points the host at a local UI description.

pub mod cli;
pub mod host;
pub mod plates;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use treasure_theme::{StyleRegistry, ThemeSheet};

use crate::cli::{Cli, Command};
use crate::host::{BundledImages, RenderHost};

/// Builds the registry from a YAML sheet when one is given, otherwise from
/// the built-in catalogs.
pub fn load_registry(sheet: Option<&std::path::Path>) -> Result<StyleRegistry> {
    match sheet {
        Some(path) => ThemeSheet::from_path(path)?
            .into_registry()
            .with_context(|| format!("theme sheet '{}' is invalid", path.display())),
        None => plates::app_theme().context("built-in theme catalogs are invalid"),
    }
}

/// Runs one CLI invocation and returns what should be printed.
pub fn run(cli: Cli) -> Result<String> {
    let mode = cli.mode.resolve();
    let registry = Arc::new(load_registry(cli.sheet.as_deref())?);
    info!(%mode, "style registry ready");

    let mut host = RenderHost::new(Arc::clone(&registry));
    if let Some(ui) = &cli.ui {
        host.load_from_local(ui)?;
    }

    let output = match cli.command {
        Command::Styles => cli::styles_report(&host, mode),
        Command::Colors => cli::colors_report(&registry, mode),
        Command::Fonts => cli::fonts_report(&registry, mode),
        Command::Images { assets } => {
            cli::images_report(&registry, mode, &BundledImages::new(assets))
        }
        Command::Check => format!(
            "ok: {} styles, {} colors, {} fonts, {} images\n",
            registry.styles().len(),
            registry.colors().len(),
            registry.fonts().len(),
            registry.images().len()
        ),
    };
    Ok(output)
}
