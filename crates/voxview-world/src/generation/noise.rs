use fastnoise_lite::{FastNoiseLite, NoiseType};
use voxview_geom::IVec3;
use voxview_volume::{Volume, Voxel};

use crate::chunk::{Y_BEGIN, Y_END};
use crate::sampler::{VolumeSampler, bordered_dims, fill_volume};
use crate::worldgen::WorldGenParams;

/// Column heights from 2D OpenSimplex2 noise, remapped from `[-1, 1]` into
/// `[min_y_ratio * H, max_y_ratio * H]` where `H` is the world column height.
pub struct NoiseSampler {
    noise: FastNoiseLite,
    min_h: f32,
    max_h: f32,
}

impl NoiseSampler {
    pub fn new(params: &WorldGenParams) -> Self {
        let mut noise = FastNoiseLite::with_seed(params.seed);
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        noise.set_frequency(Some(params.noise_frequency));
        let h = (Y_END - Y_BEGIN) as f32;
        Self {
            noise,
            min_h: Y_BEGIN as f32 + params.min_y_ratio * h,
            max_h: Y_BEGIN as f32 + params.max_y_ratio * h,
        }
    }

    pub fn height_at(&self, x: i32, z: i32) -> i32 {
        let n = self.noise.get_noise_2d(x as f32, z as f32);
        ((n + 1.0) * 0.5 * (self.max_h - self.min_h) + self.min_h).floor() as i32
    }
}

impl VolumeSampler for NoiseSampler {
    fn sample(&self, begin: IVec3, end: IVec3, border: usize) -> Volume<Voxel> {
        let (sx, _, sz) = bordered_dims(begin, end, border);
        let origin = begin - IVec3::splat(border as i32);
        let mut heights = Vec::with_capacity(sx * sz);
        for z in 0..sz as i32 {
            for x in 0..sx as i32 {
                heights.push(self.height_at(origin.x + x, origin.z + z));
            }
        }
        fill_volume(begin, end, border, |p| {
            let lx = (p.x - origin.x) as usize;
            let lz = (p.z - origin.z) as usize;
            p.y <= heights[lz * sx + lx]
        })
    }
}
