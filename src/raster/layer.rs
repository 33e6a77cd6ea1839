use crate::raster::{Cel, Image, Stock};

/// What a layer holds; only image layers carry drawable cels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerKind {
    Image,
    Group,
}

/// How a layer composites over the ones below it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
}

/// Timeline of cels plus the stock of images they reference.
///
/// The timeline is kept sorted by frame and holds at most one cel per
/// frame position.
#[derive(Clone, Debug)]
pub struct Layer {
    pub name: String,
    pub visible: bool,
    pub blend_mode: BlendMode,
    kind: LayerKind,
    cels: Vec<Cel>,
    pub stock: Stock,
}

impl Layer {
    /// New image-bearing layer with an empty timeline and stock.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            blend_mode: BlendMode::Normal,
            kind: LayerKind::Image,
            cels: Vec::new(),
            stock: Stock::new(),
        }
    }

    /// New group layer; groups never resolve images.
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            kind: LayerKind::Group,
            ..Self::new(name)
        }
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn is_image(&self) -> bool {
        self.kind == LayerKind::Image
    }

    /// Cels in frame order.
    pub fn cels(&self) -> &[Cel] {
        &self.cels
    }

    /// Cel at a frame position, if any.
    pub fn cel(&self, frame: i32) -> Option<&Cel> {
        self.cels.iter().find(|c| c.frame() == frame)
    }

    pub fn cel_mut(&mut self, frame: i32) -> Option<&mut Cel> {
        self.cels.iter_mut().find(|c| c.frame() == frame)
    }

    /// Attach a cel, keeping the timeline sorted by frame.
    pub fn add_cel(&mut self, cel: Cel) {
        debug_assert!(
            self.cel(cel.frame()).is_none(),
            "layer already has a cel at frame {}",
            cel.frame()
        );
        let at = self.cels.partition_point(|c| c.frame() < cel.frame());
        self.cels.insert(at, cel);
    }

    /// Detach and return the cel at a frame.
    pub fn remove_cel(&mut self, frame: i32) -> Option<Cel> {
        let at = self.cels.iter().position(|c| c.frame() == frame)?;
        Some(self.cels.remove(at))
    }

    /// Image shown at a frame with the cel's offset. `None` for group
    /// layers, frames without a cel and stale image indices.
    pub fn image_at(&self, frame: i32) -> Option<(&Image, i32, i32)> {
        if !self.is_image() {
            return None;
        }
        let cel = self.cel(frame)?;
        let image = self.stock.get(cel.image())?;
        Some((image, cel.x(), cel.y()))
    }
}
