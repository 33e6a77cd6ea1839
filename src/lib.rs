pub mod color;
pub mod editor;
pub mod export;
pub mod history;
pub mod raster;

pub use color::Rgba;
pub use editor::{Editor, MoveState, MoveTool, ResolvedImage};
pub use export::ExportFormat;
pub use history::{CelField, History};
pub use raster::{
    BlendMode, Cel, CelRef, Image, ImageRef, Layer, LayerKind, Mask, Sprite, Stock,
};
