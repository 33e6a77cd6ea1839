use crate::raster::Layer;

/// Placement of one stock image at a single frame of a layer's timeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cel {
    frame: i32,
    image: i32,
    x: i32,
    y: i32,
    opacity: i32,
}

impl Cel {
    /// New cel at the origin, fully opaque.
    pub fn new(frame: i32, image: i32) -> Self {
        Self {
            frame,
            image,
            x: 0,
            y: 0,
            opacity: 255,
        }
    }

    pub fn frame(&self) -> i32 {
        self.frame
    }

    /// Index into the owning layer's stock; negative means no image.
    pub fn image(&self) -> i32 {
        self.image
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Stored opacity, unclamped; resolution clamps on read.
    pub fn opacity(&self) -> i32 {
        self.opacity
    }

    /// Move the cel to another frame. The cel must be detached from its
    /// layer first, or the one-cel-per-frame invariant breaks.
    pub fn set_frame(&mut self, frame: i32) {
        self.frame = frame;
    }

    pub fn set_image(&mut self, image: i32) {
        self.image = image;
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Unchecked; callers keep values inside 0..=255 themselves.
    pub fn set_opacity(&mut self, opacity: i32) {
        self.opacity = opacity;
    }

    /// First cel on an earlier frame sharing this cel's image index.
    ///
    /// Two cels with the same index show the same pixels, so the earliest
    /// match tells the UI this frame repeats an existing one without
    /// comparing any pixel data.
    pub fn find_link<'a>(&self, layer: &'a Layer) -> Option<&'a Cel> {
        layer
            .cels()
            .iter()
            .find(|link| link.frame < self.frame && link.image == self.image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer_with_shared_image(frames: &[i32], image: i32) -> Layer {
        let mut layer = Layer::new("test");
        for &frame in frames {
            layer.add_cel(Cel::new(frame, image));
        }
        layer
    }

    #[test]
    fn new_cel_defaults() {
        let cel = Cel::new(3, 7);
        assert_eq!(cel.frame(), 3);
        assert_eq!(cel.image(), 7);
        assert_eq!((cel.x(), cel.y()), (0, 0));
        assert_eq!(cel.opacity(), 255);
    }

    #[test]
    fn clone_is_independent() {
        let mut cel = Cel::new(1, 2);
        cel.set_position(5, 6);
        cel.set_opacity(128);

        let mut copy = cel.clone();
        assert_eq!(copy, cel);

        copy.set_position(9, 9);
        copy.set_opacity(10);
        assert_eq!((cel.x(), cel.y()), (5, 6));
        assert_eq!(cel.opacity(), 128);
    }

    #[test]
    fn find_link_returns_first_match() {
        let layer = layer_with_shared_image(&[0, 2, 5], 7);
        let link = layer.cel(5).unwrap().find_link(&layer).unwrap();
        assert_eq!(link.frame(), 0);
    }

    #[test]
    fn find_link_skips_other_images_and_later_frames() {
        let mut layer = Layer::new("test");
        layer.add_cel(Cel::new(0, 1));
        layer.add_cel(Cel::new(2, 7));
        layer.add_cel(Cel::new(5, 7));

        assert_eq!(layer.cel(2).unwrap().find_link(&layer), None);
        assert_eq!(layer.cel(5).unwrap().find_link(&layer).unwrap().frame(), 2);
        assert_eq!(layer.cel(0).unwrap().find_link(&layer), None);
    }

    #[test]
    fn set_opacity_stores_unclamped() {
        let mut cel = Cel::new(0, 0);
        cel.set_opacity(300);
        assert_eq!(cel.opacity(), 300);
    }
}
