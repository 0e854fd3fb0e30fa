//! Bundled image references.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A local, bundled image resource identified by name.
///
/// The registry never loads image data. Resolving an image yields the
/// resource name, which the host's image loader turns into pixels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Image {
    name: String,
}

impl Image {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
