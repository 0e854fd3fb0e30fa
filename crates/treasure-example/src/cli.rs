//! Command-line interface for inspecting the application theme.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use console::Style;
use dark_light::Mode as OsThemeMode;
use treasure_theme::{AppearanceMode, Color, Font, FontFamily, StyleRegistry};

use crate::host::{BundledImages, RenderHost, RenderedElement};

/// Inspect the styles a Treasure host would render with.
#[derive(Debug, Parser)]
#[command(name = "treasure-example", version, about)]
pub struct Cli {
    /// Appearance mode to resolve theme values for.
    #[arg(long, value_enum, default_value_t = ModeArg::Auto, global = true)]
    pub mode: ModeArg,

    /// Load the theme from a YAML sheet instead of the built-in catalogs.
    #[arg(long, global = true)]
    pub sheet: Option<PathBuf>,

    /// Local UI description handed to the host.
    #[arg(long, global = true)]
    pub ui: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show every element style resolved for the mode.
    Styles,
    /// Show the color table for the mode.
    Colors,
    /// Show the font table for the mode.
    Fonts,
    /// Show the image table and where each image is bundled.
    Images {
        #[arg(long, default_value = "assets")]
        assets: PathBuf,
    },
    /// Assemble the registry and report whether it is valid.
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Light,
    Dark,
    /// Follow the operating system setting.
    Auto,
}

impl ModeArg {
    pub fn resolve(self) -> AppearanceMode {
        match self {
            ModeArg::Light => AppearanceMode::Light,
            ModeArg::Dark => AppearanceMode::Dark,
            ModeArg::Auto => match dark_light::detect() {
                OsThemeMode::Dark => AppearanceMode::Dark,
                OsThemeMode::Light => AppearanceMode::Light,
            },
        }
    }
}

fn swatch(color: Color) -> String {
    let block = Style::new().color256(color.to_ansi256()).apply_to("██");
    format!("{} {}", block, color)
}

fn describe_font(font: &Font) -> String {
    let family = match &font.family {
        FontFamily::System => "system",
        FontFamily::Named(name) => name.as_str(),
    };
    format!("{} {}pt {:?}", family, font.size, font.weight)
}

/// Renders every style through the host, one block per style.
pub fn styles_report(host: &RenderHost, mode: AppearanceMode) -> String {
    let title = Style::new().bold();
    let muted = Style::new().dim();
    let mut out = String::new();

    for id in host.registry().style_ids() {
        let _ = writeln!(out, "{}", title.apply_to(id));
        match host.render_element(id, mode) {
            Ok(RenderedElement::Label(label)) => {
                let _ = writeln!(out, "  label  {}", swatch(label.color));
                let _ = writeln!(
                    out,
                    "  font   {}  align {:?}  lines {}",
                    describe_font(&label.font),
                    label.alignment,
                    label.number_of_lines
                );
            }
            Ok(RenderedElement::Image { width, height, .. }) => {
                let _ = writeln!(out, "  image  {}x{}", width, height);
            }
            Ok(RenderedElement::NavBar {
                background,
                title,
                image_size,
                bottom_line_color,
                bottom_line_height,
                bottom_line_visibility,
                ..
            }) => {
                if let Some(bg) = background {
                    let _ = writeln!(out, "  background {}", swatch(bg));
                }
                let _ = writeln!(out, "  title  {}", swatch(title.color));
                let _ = writeln!(out, "  image  {}x{}", image_size.0, image_size.1);
                let _ = writeln!(
                    out,
                    "  bottom line {} {}pt {:?}",
                    swatch(bottom_line_color),
                    bottom_line_height,
                    bottom_line_visibility
                );
            }
            Ok(RenderedElement::Divider { height, color }) => {
                let _ = writeln!(out, "  divider {} {}pt", swatch(color), height);
            }
            Err(err) => {
                let _ = writeln!(out, "  {}", muted.apply_to(format!("unresolved: {}", err)));
            }
        }
    }
    out
}

pub fn colors_report(registry: &StyleRegistry, mode: AppearanceMode) -> String {
    let mut out = String::new();
    for id in registry.colors().ids() {
        let line = match registry.colors().resolve(id, mode) {
            Ok(color) => swatch(*color),
            Err(err) => err.to_string(),
        };
        let _ = writeln!(out, "{:<16} {}", id, line);
    }
    out
}

pub fn fonts_report(registry: &StyleRegistry, mode: AppearanceMode) -> String {
    let mut out = String::new();
    for id in registry.fonts().ids() {
        let line = match registry.fonts().resolve(id, mode) {
            Ok(font) => describe_font(font),
            Err(err) => err.to_string(),
        };
        let _ = writeln!(out, "{:<16} {}", id, line);
    }
    out
}

pub fn images_report(registry: &StyleRegistry, mode: AppearanceMode, bundle: &BundledImages) -> String {
    let mut out = String::new();
    for id in registry.images().ids() {
        let line = match registry.images().resolve(id, mode) {
            Ok(image) => match bundle.locate(image) {
                Some(path) => format!("{} -> {}", image, path.display()),
                None => format!("{} (not bundled)", image),
            },
            Err(err) => err.to_string(),
        };
        let _ = writeln!(out, "{:<16} {}", id, line);
    }
    out
}
