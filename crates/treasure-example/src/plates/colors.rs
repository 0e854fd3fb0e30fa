use treasure_theme::{Color, ComponentPlate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPlate {
    Primary,
    Secondary,
}

impl ComponentPlate for ColorPlate {
    type Value = Color;

    const ALL: &'static [Self] = &[ColorPlate::Primary, ColorPlate::Secondary];

    fn id(self) -> &'static str {
        match self {
            ColorPlate::Primary => "primary",
            ColorPlate::Secondary => "secondary",
        }
    }

    fn light(self) -> Color {
        match self {
            ColorPlate::Primary => Color::DARK_GRAY,
            ColorPlate::Secondary => Color::RED,
        }
    }

    fn dark(self) -> Color {
        match self {
            ColorPlate::Primary => Color::WHITE,
            ColorPlate::Secondary => Color::WHITE,
        }
    }
}
