use crate::raster::{Cel, Image, Layer, Mask};

/// Stable address of a cel: owning layer index plus frame position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CelRef {
    pub layer: usize,
    pub frame: i32,
}

/// Stable address of an image slot in a layer's stock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageRef {
    pub layer: usize,
    pub index: i32,
}

/// Animated document: layer stack, edit cursor and selection mask.
#[derive(Clone, Debug)]
pub struct Sprite {
    width: i32,
    height: i32,
    /// Timeline length in frames.
    pub frames: i32,
    /// Frame position the editor is currently on.
    pub frame: i32,
    pub layers: Vec<Layer>,
    /// Index of the layer edits apply to.
    pub active_layer: Option<usize>,
    pub mask: Mask,
}

impl Sprite {
    pub fn new(width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0, "sprite must have area");
        Self {
            width,
            height,
            frames: 1,
            frame: 0,
            layers: Vec::new(),
            active_layer: None,
            mask: Mask::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Layer under edit, if one is selected.
    pub fn layer(&self) -> Option<&Layer> {
        self.layers.get(self.active_layer?)
    }

    pub fn layer_mut(&mut self) -> Option<&mut Layer> {
        let index = self.active_layer?;
        self.layers.get_mut(index)
    }

    /// Append a layer and make it the active one.
    pub fn add_layer(&mut self, layer: Layer) -> usize {
        self.layers.push(layer);
        let index = self.layers.len() - 1;
        self.active_layer = Some(index);
        index
    }

    /// Cel addressed by `at`, if layer and frame both resolve.
    pub fn cel_at(&self, at: CelRef) -> Option<&Cel> {
        self.layers.get(at.layer)?.cel(at.frame)
    }

    pub fn cel_at_mut(&mut self, at: CelRef) -> Option<&mut Cel> {
        self.layers.get_mut(at.layer)?.cel_mut(at.frame)
    }

    /// Stock image addressed by `at`.
    pub fn stock_image(&self, at: ImageRef) -> Option<&Image> {
        self.layers.get(at.layer)?.stock.get(at.index)
    }

    pub fn stock_image_mut(&mut self, at: ImageRef) -> Option<&mut Image> {
        self.layers.get_mut(at.layer)?.stock.get_mut(at.index)
    }
}
