//! Rendering data module
//!
//! Produces backend-agnostic draw lists; no GPU or window code lives here.

pub mod scene;
pub mod shapes;
pub mod sprite;
pub mod vertex;

pub use scene::{Scene, TextAlign, TextItem, build_scene};
pub use sprite::SpriteAsset;
pub use vertex::{SpriteVertex, Vertex};
