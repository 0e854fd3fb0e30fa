use treasure_theme::{
    BasicProps, BottomLineVisibility, Color, ComponentPlate, DividerStyle, ElementStyle,
    ImageStyle, LabelStyle, NavBarStyle, StylePlate, TextAlignment,
};

use super::{ColorPlate, FontPlate};

/// Element styles referenced by the bundled UI description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylesPlate {
    PrimaryLabel,
    NavBarImage,
    NavBarStyle,
    HorizontalDivider,
}

impl StylePlate for StylesPlate {
    const ALL: &'static [Self] = &[
        StylesPlate::PrimaryLabel,
        StylesPlate::NavBarImage,
        StylesPlate::NavBarStyle,
        StylesPlate::HorizontalDivider,
    ];

    fn id(self) -> &'static str {
        match self {
            StylesPlate::PrimaryLabel => "primary_label",
            StylesPlate::NavBarImage => "image_nav_bar",
            StylesPlate::NavBarStyle => "nav_bar_style",
            StylesPlate::HorizontalDivider => "horizontal_divider",
        }
    }

    fn to_style(self) -> ElementStyle {
        match self {
            StylesPlate::PrimaryLabel => LabelStyle::new(
                self.id(),
                ColorPlate::Primary.id(),
                FontPlate::Primary.id(),
            )
            .layout_margins([12.0, 24.0, 12.0, 12.0])
            .alignment(TextAlignment::Leading)
            .number_of_lines(1)
            .into(),
            StylesPlate::NavBarImage => ImageStyle::new(self.id(), 20.0, 20.0)
                .layout_margins([0.0, 0.0, 0.0, 0.0])
                .into(),
            StylesPlate::NavBarStyle => NavBarStyle::new(
                self.id(),
                StylesPlate::PrimaryLabel.id(),
                StylesPlate::NavBarImage.id(),
            )
            .with_basic_props(
                BasicProps::with_margins([12.0, 20.0, 12.0, 12.0])
                    .background(Color::rgb(0xF2, 0xF2, 0xF2)),
            )
            .bottom_line(
                Color::rgb(0xCC, 0xCC, 0xCC),
                1.0,
                BottomLineVisibility::VisibleByContentOffset,
            )
            .into(),
            StylesPlate::HorizontalDivider => {
                DividerStyle::new(self.id(), 1.0, Color::rgb(0xFF, 0x56, 0x47)).into()
            }
        }
    }
}
