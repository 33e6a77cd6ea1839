mod mask_ops;
mod move_tool;

pub use move_tool::{MoveState, MoveTool};

use crate::color::Rgba;
use crate::history::History;
use crate::raster::{Image, ImageRef, Sprite};

/// Resolved view of the cel under the edit cursor.
#[derive(Clone, Copy, Debug)]
pub struct ResolvedImage<'a> {
    pub image: &'a Image,
    pub x: i32,
    pub y: i32,
    /// Cel opacity clamped to 0..=255.
    pub opacity: i32,
}

/// Editing session: one sprite, its undo journal and the background color
/// used by clearing operations.
///
/// Every operation takes the session explicitly; there is no process-wide
/// "current sprite".
#[derive(Clone, Debug)]
pub struct Editor {
    pub sprite: Sprite,
    pub history: History,
    pub background: Rgba,
}

impl Editor {
    pub fn new(sprite: Sprite) -> Self {
        Self {
            sprite,
            history: History::new(),
            background: Rgba::WHITE,
        }
    }

    /// Image of the active layer at the current frame.
    ///
    /// `None` when no layer is active, the layer is not image-bearing, the
    /// frame has no cel, or the cel's image index is stale.
    pub fn image(&self) -> Option<&Image> {
        let layer = self.sprite.layer()?;
        if !layer.is_image() {
            return None;
        }
        let cel = layer.cel(self.sprite.frame)?;
        layer.stock.get(cel.image())
    }

    /// Like `image`, with the cel's placement and clamped opacity.
    pub fn resolve_image(&self) -> Option<ResolvedImage<'_>> {
        let layer = self.sprite.layer()?;
        if !layer.is_image() {
            return None;
        }
        let cel = layer.cel(self.sprite.frame)?;
        let image = layer.stock.get(cel.image())?;
        Some(ResolvedImage {
            image,
            x: cel.x(),
            y: cel.y(),
            opacity: cel.opacity().clamp(0, 255),
        })
    }

    /// Address of the image under the edit cursor plus the cel offset, for
    /// mutation paths that need to re-borrow the image mutably.
    pub(crate) fn resolve_target(&self) -> Option<(ImageRef, i32, i32)> {
        let layer_index = self.sprite.active_layer?;
        let layer = self.sprite.layers.get(layer_index)?;
        if !layer.is_image() {
            return None;
        }
        let cel = layer.cel(self.sprite.frame)?;
        layer.stock.get(cel.image())?;
        Some((
            ImageRef {
                layer: layer_index,
                index: cel.image(),
            },
            cel.x(),
            cel.y(),
        ))
    }

    /// Revert the latest closed transaction.
    pub fn undo(&mut self) -> bool {
        let Editor {
            sprite, history, ..
        } = self;
        history.undo(sprite)
    }

    /// Reapply the latest undone transaction.
    pub fn redo(&mut self) -> bool {
        let Editor {
            sprite, history, ..
        } = self;
        history.redo(sprite)
    }
}
