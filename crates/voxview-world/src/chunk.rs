use serde::{Deserialize, Serialize};
use voxview_geom::{IVec3, Mat4, Vec3};

/// Chunk extent along x, in voxels.
pub const X_SIZE: i32 = 64;
/// Chunk extent along z, in voxels.
pub const Z_SIZE: i32 = 64;
/// Lowest world y covered by every chunk column.
pub const Y_BEGIN: i32 = 0;
/// One past the highest world y covered by every chunk column.
pub const Y_END: i32 = 64;

/// Identifies one vertical column of the world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkId {
    pub x: i32,
    pub z: i32,
}

impl ChunkId {
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    #[inline]
    pub fn offset(self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            z: self.z + dz,
        }
    }

    #[inline]
    pub fn chebyshev_distance(self, other: ChunkId) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }

    #[inline]
    pub fn begin_coord(self) -> IVec3 {
        begin_coord(self)
    }

    #[inline]
    pub fn end_coord(self) -> IVec3 {
        end_coord(self)
    }
}

impl std::fmt::Display for ChunkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

impl From<(i32, i32)> for ChunkId {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<ChunkId> for (i32, i32) {
    fn from(value: ChunkId) -> Self {
        (value.x, value.z)
    }
}

/// Inclusive lower corner of the world cells owned by `id`.
#[inline]
pub fn begin_coord(id: ChunkId) -> IVec3 {
    IVec3::new(id.x * X_SIZE, Y_BEGIN, id.z * Z_SIZE)
}

/// Exclusive upper corner of the world cells owned by `id`.
#[inline]
pub fn end_coord(id: ChunkId) -> IVec3 {
    IVec3::new((id.x + 1) * X_SIZE, Y_END, (id.z + 1) * Z_SIZE)
}

/// Column containing a world-space position. Floors, so negative positions
/// land in the chunk extending toward negative infinity.
#[inline]
pub fn chunk_at(pos: Vec3) -> ChunkId {
    // Floor to the cell first: dividing a tiny negative by the extent can
    // underflow to -0.0 and floor into chunk 0.
    let cell = pos.floor();
    ChunkId {
        x: cell.x.div_euclid(X_SIZE),
        z: cell.z.div_euclid(Z_SIZE),
    }
}

/// Model-to-world placement for a chunk mesh built in chunk-local space.
#[inline]
pub fn calc_translation(id: ChunkId) -> Mat4 {
    Mat4::from_translation(Vec3::new(
        (X_SIZE * id.x) as f32,
        0.0,
        (Z_SIZE * id.z) as f32,
    ))
}
