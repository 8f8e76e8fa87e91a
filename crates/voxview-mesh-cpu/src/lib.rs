//! CPU meshing: per-face triangle emission with corner occlusion brightness.
#![forbid(unsafe_code)]

mod builder;
pub mod face;
mod mesh_build;

pub use builder::{MeshBuilder, occlusion_brightness};
pub use face::{FACE_TABLE, Face};
pub use mesh_build::MeshData;

use voxview_volume::{Volume, Voxel};

/// One-shot helper: mesh `vol` with a neighbor border of `border` cells.
pub fn build_mesh(vol: &Volume<Voxel>, border: usize) -> MeshData {
    MeshBuilder::new(border).build(vol)
}
