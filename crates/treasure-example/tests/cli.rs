use std::path::Path;

use clap::Parser;
use treasure_example::cli::Cli;
use treasure_example::{load_registry, plates, run};
use treasure_theme::{AppearanceMode, StyleProvider};

fn assets() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
}

#[test]
fn test_check_with_builtin_catalogs() {
    let cli = Cli::try_parse_from(["treasure-example", "--mode", "light", "check"]).unwrap();
    let output = run(cli).unwrap();
    assert_eq!(output, "ok: 4 styles, 2 colors, 2 fonts, 1 images\n");
}

#[test]
fn test_bundled_sheet_matches_catalogs() {
    let from_sheet = load_registry(Some(&assets().join("theme.yaml"))).unwrap();
    let from_plates = plates::app_theme().unwrap();

    assert_eq!(from_sheet.style_ids(), from_plates.style_ids());
    for id in from_plates.style_ids() {
        assert_eq!(from_sheet.style_for(id), from_plates.style_for(id));
    }
    for mode in AppearanceMode::ALL {
        for id in from_plates.colors().ids() {
            assert_eq!(from_sheet.color_for(id, mode), from_plates.color_for(id, mode));
        }
        for id in from_plates.fonts().ids() {
            assert_eq!(from_sheet.font_for(id, mode), from_plates.font_for(id, mode));
        }
    }
}

#[test]
fn test_invalid_sheet_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = dir.path().join("broken.yaml");
    std::fs::write(
        &sheet,
        "styles:\n  - type: nav_bar\n    id: nav\n    title_style_id: ghost\n    image_style_id: ghost\n    bottom_line_color: white\n",
    )
    .unwrap();

    let err = load_registry(Some(&sheet)).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("broken.yaml"), "{}", message);
    assert!(message.contains("ghost"), "{}", message);
}

#[test]
fn test_styles_with_ui_description() {
    let ui = assets().join("blocks_ui.json");
    let cli = Cli::try_parse_from([
        "treasure-example",
        "--mode",
        "dark",
        "--ui",
        ui.to_str().unwrap(),
        "styles",
    ])
    .unwrap();
    let output = run(cli).unwrap();
    assert!(output.contains("nav_bar_style"));
    assert!(output.contains("#FFFFFF"));
}

#[test]
fn test_missing_ui_description_fails() {
    let cli = Cli::try_parse_from([
        "treasure-example",
        "--ui",
        "/nonexistent/blocks_ui.json",
        "--mode",
        "light",
        "check",
    ])
    .unwrap();
    assert!(run(cli).is_err());
}
