pub mod cel;
pub mod image;
pub mod layer;
pub mod mask;
pub mod sprite;
pub mod stock;

pub use cel::Cel;
pub use image::Image;
pub use layer::{BlendMode, Layer, LayerKind};
pub use mask::Mask;
pub use sprite::{CelRef, ImageRef, Sprite};
pub use stock::Stock;
