//! Publishing a registry to concurrent readers.

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::registry::StyleRegistry;

/// A shared slot holding the registry readers should use.
///
/// Readers take a snapshot with [`current`](Self::current) and keep using it
/// for as long as they like. A reload builds a complete new registry first
/// and then [`publish`](Self::publish)es it, so a reader sees either the old
/// registry or the new one, never a mix.
///
/// # Example
///
/// ```rust
/// use treasure_theme::{SharedRegistry, StyleRegistry};
///
/// let shared = SharedRegistry::new(StyleRegistry::builder().build().unwrap());
/// let before = shared.current();
///
/// shared.publish(StyleRegistry::builder().build().unwrap());
/// assert!(!std::sync::Arc::ptr_eq(&before, &shared.current()));
/// ```
#[derive(Debug)]
pub struct SharedRegistry {
    inner: RwLock<Arc<StyleRegistry>>,
}

impl SharedRegistry {
    pub fn new(registry: StyleRegistry) -> Self {
        Self::from_arc(Arc::new(registry))
    }

    pub fn from_arc(registry: Arc<StyleRegistry>) -> Self {
        Self {
            inner: RwLock::new(registry),
        }
    }

    /// Returns the registry currently published.
    pub fn current(&self) -> Arc<StyleRegistry> {
        // The slot only ever holds a complete Arc, so a poisoned lock still
        // guards a consistent value.
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Replaces the published registry, returning the previous one.
    pub fn publish(&self, registry: StyleRegistry) -> Arc<StyleRegistry> {
        let next = Arc::new(registry);
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        debug!(styles = next.styles().len(), "publishing style registry");
        std::mem::replace(&mut *guard, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{ThemeComponent, ThemeEntry};
    use crate::primitives::Color;
    use crate::registry::StyleProvider;
    use crate::AppearanceMode;
    use std::thread;

    fn with_primary(color: Color) -> StyleRegistry {
        StyleRegistry::builder()
            .colors(ThemeComponent::build([ThemeEntry::fixed("primary", color)]))
            .build()
            .unwrap()
    }

    #[test]
    fn test_snapshot_survives_publish() {
        let shared = SharedRegistry::new(with_primary(Color::RED));
        let snapshot = shared.current();

        let previous = shared.publish(with_primary(Color::BLUE));

        assert!(Arc::ptr_eq(&snapshot, &previous));
        assert_eq!(snapshot.color_for("primary", AppearanceMode::Light), Ok(&Color::RED));
        assert_eq!(
            shared.current().color_for("primary", AppearanceMode::Light),
            Ok(&Color::BLUE)
        );
    }

    #[test]
    fn test_readers_see_whole_registries() {
        let shared = Arc::new(SharedRegistry::new(with_primary(Color::RED)));

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for _ in 0..200 {
                        let registry = shared.current();
                        let color = *registry
                            .color_for("primary", AppearanceMode::Dark)
                            .unwrap();
                        assert!(color == Color::RED || color == Color::BLUE);
                    }
                })
            })
            .collect();

        for _ in 0..50 {
            shared.publish(with_primary(Color::BLUE));
            shared.publish(with_primary(Color::RED));
        }

        for reader in readers {
            reader.join().unwrap();
        }
    }
}
