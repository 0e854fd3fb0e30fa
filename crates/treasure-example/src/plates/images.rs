use treasure_theme::{ComponentPlate, Image};

/// Images bundled under `assets/`, one file per mode-independent name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalImages {
    Logo,
}

impl ComponentPlate for LocalImages {
    type Value = Image;

    const ALL: &'static [Self] = &[LocalImages::Logo];

    fn id(self) -> &'static str {
        match self {
            LocalImages::Logo => "logo",
        }
    }

    fn light(self) -> Image {
        Image::named(self.id())
    }

    fn dark(self) -> Image {
        Image::named(self.id())
    }
}
