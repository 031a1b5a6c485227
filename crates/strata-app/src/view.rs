//! Presentation state for the generated maps.
//!
//! The generator produces two layers, a height map and a color map, but a
//! consumer presents exactly one at a time. [`LayerView`] tracks which layer
//! is active and whether the presented texture is stale; toggling flips
//! between the two layers and marks the cached texture dirty.

/// The map layer currently presented to the consumer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapLayer {
    /// The grayscale height field.
    Height,
    /// The derived color field.
    Color,
}

/// Tracks the active map layer and whether its texture needs regeneration.
#[derive(Clone, Copy, Debug)]
pub struct LayerView {
    active: MapLayer,
    dirty: bool,
}

impl LayerView {
    /// Create a view presenting the color map.
    pub fn new() -> Self {
        Self {
            active: MapLayer::Color,
            dirty: true,
        }
    }

    /// The layer currently presented.
    pub fn active(&self) -> MapLayer {
        self.active
    }

    /// Flip between the height and color layers.
    ///
    /// Switching layers invalidates the cached texture.
    pub fn toggle(&mut self) {
        self.active = match self.active {
            MapLayer::Height => MapLayer::Color,
            MapLayer::Color => MapLayer::Height,
        };
        self.dirty = true;
    }

    /// Returns `true` if the presented texture needs regeneration.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag after re-uploading the texture.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

impl Default for LayerView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_color_layer() {
        let view = LayerView::new();
        assert_eq!(view.active(), MapLayer::Color);
        assert!(view.is_dirty(), "A fresh view has no texture yet");
    }

    #[test]
    fn test_toggle_flips_between_layers() {
        let mut view = LayerView::new();
        view.toggle();
        assert_eq!(view.active(), MapLayer::Height);
        view.toggle();
        assert_eq!(view.active(), MapLayer::Color);
    }

    #[test]
    fn test_toggle_marks_dirty() {
        let mut view = LayerView::new();
        view.clear_dirty();
        assert!(!view.is_dirty());
        view.toggle();
        assert!(view.is_dirty());
    }
}
