use voxview_geom::IVec3;
use voxview_volume::{Heightmap, Volume, Voxel};

use crate::chunk::{X_SIZE, Y_BEGIN, Y_END, Z_SIZE};
use crate::sampler::{VolumeSampler, bordered_dims};

/// Two-step terrain: quantize the sine field into per-column heights, then
/// fill each column from the bottom up to and including its height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightmapSampler {
    pub scale_x: f32,
    pub scale_z: f32,
    /// World height the unit field maps onto.
    pub height: f32,
}

impl Default for HeightmapSampler {
    fn default() -> Self {
        Self {
            scale_x: X_SIZE as f32,
            scale_z: Z_SIZE as f32,
            height: (Y_END - Y_BEGIN) as f32,
        }
    }
}

impl HeightmapSampler {
    /// Column height at world `(x, z)`, clamped into `u8`.
    pub fn height_at(&self, x: i32, z: i32) -> u8 {
        let s = (x as f32 / self.scale_x).sin();
        let c = (z as f32 / self.scale_z).cos();
        let h = (self.height * 0.5 * (s * c + 1.0)).floor();
        h.clamp(0.0, u8::MAX as f32) as u8
    }

    /// Heights for the `x_size * z_size` columns starting at world `(x0, z0)`.
    pub fn sample_heightmap(&self, x0: i32, z0: i32, x_size: usize, z_size: usize) -> Heightmap {
        let mut hm = Heightmap::new(x_size, z_size);
        for z in 0..z_size {
            for x in 0..x_size {
                hm.set(x, z, self.height_at(x0 + x as i32, z0 + z as i32));
            }
        }
        hm
    }
}

/// Expands column heights into a volume whose lowest layer sits at world `y0`.
pub fn volume_from_heightmap(hm: &Heightmap, y0: i32, sy: usize) -> Volume<Voxel> {
    let mut vol = Volume::new(hm.x_size(), sy, hm.z_size(), Voxel::Empty);
    for z in 0..hm.z_size() {
        for x in 0..hm.x_size() {
            let h = hm.at(x, z) as i32;
            for y in 0..sy {
                if y0 + y as i32 <= h {
                    *vol.at_mut(x, y, z) = Voxel::Solid;
                } else {
                    break;
                }
            }
        }
    }
    vol
}

impl VolumeSampler for HeightmapSampler {
    fn sample(&self, begin: IVec3, end: IVec3, border: usize) -> Volume<Voxel> {
        let (sx, sy, sz) = bordered_dims(begin, end, border);
        let b = border as i32;
        let hm = self.sample_heightmap(begin.x - b, begin.z - b, sx, sz);
        volume_from_heightmap(&hm, begin.y - b, sy)
    }
}
