use super::Editor;
use crate::raster::{Cel, Image, Layer};

impl Editor {
    /// Clear the masked region of the current image to the background color.
    ///
    /// An empty mask clears the whole image. A mask that misses the image
    /// entirely is a successful no-op. The touched rectangle is snapshotted
    /// into an undo transaction first when recording is enabled.
    pub fn clear_masked_region(&mut self) {
        let Some((target, x, y)) = self.resolve_target() else {
            return;
        };
        let bg = self.background;
        let Editor {
            sprite, history, ..
        } = self;

        if sprite.mask.is_empty() {
            if history.is_enabled() {
                if let Some(image) = sprite.stock_image(target) {
                    history.open();
                    history.record_image(image, target, 0, 0, image.width(), image.height());
                    history.close();
                }
            }
            if let Some(image) = sprite.stock_image_mut(target) {
                image.clear(bg);
            }
            return;
        }

        let Some(image) = sprite
            .layers
            .get(target.layer)
            .and_then(|l| l.stock.get(target.index))
        else {
            return;
        };
        let x1 = sprite.mask.x.max(0);
        let y1 = sprite.mask.y.max(0);
        let x2 = (image.width() - 1).min(sprite.mask.x + sprite.mask.w - 1);
        let y2 = (image.height() - 1).min(sprite.mask.y + sprite.mask.h - 1);
        if x1 > x2 || y1 > y2 {
            // the selection misses the image entirely
            return;
        }

        if history.is_enabled() {
            history.open();
            history.record_image(image, target, x1, y1, x2 - x1 + 1, y2 - y1 + 1);
            history.close();
        }

        let mask = &sprite.mask;
        let Some(image) = sprite
            .layers
            .get_mut(target.layer)
            .and_then(|l| l.stock.get_mut(target.index))
        else {
            return;
        };
        for v in 0..mask.h {
            for u in 0..mask.w {
                if mask.contains(u, v) {
                    image.put_pixel(u + mask.x - x, v + mask.y - y, bg);
                }
            }
        }
    }

    /// Copy the masked region of the current image into a brand-new layer.
    ///
    /// The layer owns a single cel at the current frame, positioned at the
    /// mask origin, with the extracted image in its own stock. It is not
    /// attached to the sprite; the caller decides where it goes.
    pub fn extract_mask_to_layer(&self) -> Option<Layer> {
        if self.sprite.mask.is_empty() {
            return None;
        }
        let resolved = self.resolve_image()?;
        let mask = &self.sprite.mask;

        let mut dst = Image::new(mask.w, mask.h)?;
        for v in 0..mask.h {
            for u in 0..mask.w {
                if !mask.contains(u, v) {
                    continue;
                }
                // source reads outside the image keep the cleared value
                let src_x = u + mask.x - resolved.x;
                let src_y = v + mask.y - resolved.y;
                if let Some(color) = resolved.image.get_pixel(src_x, src_y) {
                    dst.put_pixel(u, v, color);
                }
            }
        }

        let mut layer = Layer::new("Selection");
        let image = layer.stock.add(dst);
        let mut cel = Cel::new(self.sprite.frame, image);
        cel.set_position(mask.x, mask.y);
        layer.add_cel(cel);

        log::debug!("extracted {}x{} selection into a new layer", mask.w, mask.h);
        Some(layer)
    }
}
