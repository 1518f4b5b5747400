pub mod blob;
pub mod camera;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod noise;
pub mod palette;
pub mod params;
pub mod particles;
pub mod pointer;
pub mod proximity;
pub mod rings;
pub mod scene;
pub mod smoothing;

pub use blob::{BlobState, BlobUniforms};
pub use camera::Camera;
pub use constants::*;
pub use error::SceneError;
pub use geometry::{Mesh, MeshVertex};
pub use palette::BlobPalette;
pub use params::{ProximityStrategy, SceneParams};
pub use particles::{Anchor, ParticleField};
pub use pointer::{PointerCell, PointerState};
pub use proximity::{LineBuffer, ProximityGraph};
pub use rings::OrbitalRings;
pub use scene::Scene;

// Shaders bundled as string constants
pub static BLOB_WGSL: &str = include_str!("../shaders/blob.wgsl");
pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");
pub static LINES_WGSL: &str = include_str!("../shaders/lines.wgsl");
