use voxview_geom::IVec3;
use voxview_volume::{Volume, Voxel};

/// Produces the voxels of a world range plus a neighbor border.
///
/// The output has `(end - begin) + 2 * border` cells per axis and output cell
/// `v` holds world cell `begin + v - border`. Implementations must be a pure
/// function of the world cell: the same cell must come out identical no
/// matter which range requested it, so a chunk's border agrees with its
/// neighbor's interior.
///
/// Panics when `begin > end` on any axis.
pub trait VolumeSampler {
    fn sample(&self, begin: IVec3, end: IVec3, border: usize) -> Volume<Voxel>;
}

impl<F> VolumeSampler for F
where
    F: Fn(IVec3, IVec3, usize) -> Volume<Voxel>,
{
    fn sample(&self, begin: IVec3, end: IVec3, border: usize) -> Volume<Voxel> {
        self(begin, end, border)
    }
}

/// Output dimensions for a bordered sample of `[begin, end)`.
pub fn bordered_dims(begin: IVec3, end: IVec3, border: usize) -> (usize, usize, usize) {
    assert!(
        begin.all_le(end),
        "sample range begin {:?} exceeds end {:?}",
        begin,
        end
    );
    let d = end - begin;
    (
        d.x as usize + 2 * border,
        d.y as usize + 2 * border,
        d.z as usize + 2 * border,
    )
}

/// Fills a bordered volume by evaluating `solid_at` once per world cell.
pub fn fill_volume<F>(begin: IVec3, end: IVec3, border: usize, mut solid_at: F) -> Volume<Voxel>
where
    F: FnMut(IVec3) -> bool,
{
    let (sx, sy, sz) = bordered_dims(begin, end, border);
    let origin = begin - IVec3::splat(border as i32);
    let mut cells = Vec::with_capacity(sx * sy * sz);
    for vz in 0..sz {
        for vy in 0..sy {
            for vx in 0..sx {
                let world = origin + IVec3::new(vx as i32, vy as i32, vz as i32);
                cells.push(if solid_at(world) {
                    Voxel::Solid
                } else {
                    Voxel::Empty
                });
            }
        }
    }
    Volume::from_cells(sx, sy, sz, cells)
}
