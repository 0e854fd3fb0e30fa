use treasure_theme::{ComponentPlate, Font};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontPlate {
    Primary,
    Secondary,
}

impl FontPlate {
    fn size(self) -> f32 {
        match self {
            FontPlate::Primary => 30.0,
            FontPlate::Secondary => 20.0,
        }
    }
}

impl ComponentPlate for FontPlate {
    type Value = Font;

    const ALL: &'static [Self] = &[FontPlate::Primary, FontPlate::Secondary];

    fn id(self) -> &'static str {
        match self {
            FontPlate::Primary => "primary",
            FontPlate::Secondary => "secondary",
        }
    }

    fn light(self) -> Font {
        Font::system(self.size())
    }

    fn dark(self) -> Font {
        Font::system(self.size())
    }
}
