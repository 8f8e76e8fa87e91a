use std::time::Instant;

use voxview_geom::{IVec3, Vec3};
use voxview_volume::{Volume, Voxel};

use crate::face::Face;
use crate::mesh_build::MeshData;

/// Brightness of a lattice corner touched by `solid` of its 8 cells.
///
/// Fully open (0) and fully buried (8) corners never belong to a visible
/// face and get no value.
#[inline]
pub fn occlusion_brightness(solid: u8) -> Option<u8> {
    if solid > 0 && solid < 8 {
        Some((8 - solid) << 5)
    } else {
        None
    }
}

fn elapsed_ms(start: Instant) -> u32 {
    start.elapsed().as_millis().min(u128::from(u32::MAX)) as u32
}

#[derive(Default)]
struct MesherPerf {
    faces_ms: u32,
    occlusion_ms: u32,
    lookup_ms: u32,
    total_ms: u32,
}

fn log_mesher_perf(dims: (usize, usize, usize), triangles: usize, perf: &MesherPerf) {
    log::info!(
        target: "perf",
        "ms faces={} occlusion={} lookup={} total={} mesh_build dims=({}, {}, {}) tris={}",
        perf.faces_ms,
        perf.occlusion_ms,
        perf.lookup_ms,
        perf.total_ms,
        dims.0,
        dims.1,
        dims.2,
        triangles
    );
}

/// Turns a bordered voxel volume into a per-face triangle mesh with
/// per-vertex occlusion brightness.
///
/// Only the interior `[border, size - border)` is meshed; the border cells
/// are read as neighbors so faces on the chunk edge cull against the
/// adjacent chunk. Output positions are chunk-local with the first interior
/// cell at the origin.
#[derive(Clone, Copy, Debug)]
pub struct MeshBuilder {
    border: usize,
}

impl MeshBuilder {
    /// Panics when `border` is zero.
    pub fn new(border: usize) -> Self {
        assert!(border >= 1, "mesh builder needs a neighbor border of at least 1");
        Self { border }
    }

    #[inline]
    pub fn border(&self) -> usize {
        self.border
    }

    pub fn build(&self, vol: &Volume<Voxel>) -> MeshData {
        let b = self.border;
        let total_start = Instant::now();

        let t = Instant::now();
        let mut mesh = MeshData::default();
        let keys = self.emit_faces(vol, &mut mesh);
        let faces_ms = elapsed_ms(t);

        let t = Instant::now();
        let lattice = corner_brightness(vol, b);
        let occlusion_ms = elapsed_ms(t);

        let t = Instant::now();
        mesh.brightnesses = keys
            .iter()
            .map(|&k| match *lattice.at_ivec(k) {
                Some(v) => v,
                None => panic!("no occlusion brightness for emitted corner {:?}", k),
            })
            .collect();
        let lookup_ms = elapsed_ms(t);

        let perf = MesherPerf {
            faces_ms,
            occlusion_ms,
            lookup_ms,
            total_ms: elapsed_ms(total_start),
        };
        log_mesher_perf(
            (vol.size_x(), vol.size_y(), vol.size_z()),
            mesh.triangle_count(),
            &perf,
        );
        mesh
    }

    // Writes positions and normals; returns the lattice key of every vertex.
    fn emit_faces(&self, vol: &Volume<Voxel>, mesh: &mut MeshData) -> Vec<IVec3> {
        let b = self.border;
        let origin = IVec3::splat(b as i32);
        let mut exposed: Vec<(IVec3, Face)> = Vec::new();
        vol.for_each_in_border(b, b, b, |x, y, z| {
            if vol.at(x, y, z).is_empty() {
                return;
            }
            let cell = IVec3::new(x as i32, y as i32, z as i32);
            for face in Face::ALL {
                if vol.at_ivec(cell + face.delta()).is_empty() {
                    exposed.push((cell, face));
                }
            }
        });

        mesh.reserve_faces(exposed.len());
        let mut keys = Vec::with_capacity(exposed.len() * 6);
        for (cell, face) in exposed {
            let normal = face.normal();
            for corner in face.corners() {
                let key = cell + corner;
                mesh.positions.push(Vec3::from(key - origin));
                mesh.normals.push(normal);
                keys.push(key);
            }
        }
        keys
    }
}

/// Occlusion brightness for every lattice corner in `[b, size - b]`.
fn corner_brightness(vol: &Volume<Voxel>, b: usize) -> Volume<Option<u8>> {
    let mut lattice = Volume::new(vol.size_x() + 1, vol.size_y() + 1, vol.size_z() + 1, None);
    vol.for_each_vertex_in_border(b, b, b, |x, y, z| {
        let mut solid = 0u8;
        for cz in z - 1..=z {
            for cy in y - 1..=y {
                for cx in x - 1..=x {
                    if vol.at(cx, cy, cz).is_solid() {
                        solid += 1;
                    }
                }
            }
        }
        *lattice.at_mut(x, y, z) = occlusion_brightness(solid);
    });
    lattice
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_voxel() -> Volume<Voxel> {
        let mut v = Volume::new(3, 3, 3, Voxel::Empty);
        *v.at_mut(1, 1, 1) = Voxel::Solid;
        v
    }

    #[test]
    fn brightness_steps() {
        assert_eq!(occlusion_brightness(0), None);
        assert_eq!(occlusion_brightness(1), Some(224));
        assert_eq!(occlusion_brightness(4), Some(128));
        assert_eq!(occlusion_brightness(7), Some(32));
        assert_eq!(occlusion_brightness(8), None);
    }

    #[test]
    fn lone_voxel_corners_are_brightest() {
        let lattice = corner_brightness(&single_voxel(), 1);
        for z in 1..=2 {
            for y in 1..=2 {
                for x in 1..=2 {
                    assert_eq!(*lattice.at(x, y, z), Some(224));
                }
            }
        }
        assert_eq!(*lattice.at(0, 0, 0), None);
    }

    #[test]
    #[should_panic]
    fn zero_border_rejected() {
        MeshBuilder::new(0);
    }

    #[test]
    fn emitted_keys_are_offset_by_border() {
        let mut mesh = MeshData::default();
        let keys = MeshBuilder::new(1).emit_faces(&single_voxel(), &mut mesh);
        assert_eq!(keys.len(), 36);
        // Sized up front for exactly the six exposed faces
        assert!(mesh.positions.capacity() >= 36);
        for (k, p) in keys.iter().zip(&mesh.positions) {
            assert_eq!(Vec3::from(*k - IVec3::ONE), *p);
        }
    }
}
