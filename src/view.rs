use voxview_world::ChunkId;

/// Chunks within Chebyshev distance `radius` of `center`, rows of increasing
/// z, each row in increasing x.
pub fn visible_chunks(center: ChunkId, radius: u32) -> Vec<ChunkId> {
    let r = radius as i32;
    let side = 2 * radius as usize + 1;
    let mut out = Vec::with_capacity(side * side);
    for dz in -r..=r {
        for dx in -r..=r {
            out.push(center.offset(dx, dz));
        }
    }
    out
}
