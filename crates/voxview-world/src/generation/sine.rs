use voxview_geom::IVec3;
use voxview_volume::{Volume, Voxel};

use crate::chunk::{X_SIZE, Y_BEGIN, Y_END, Z_SIZE};
use crate::sampler::{VolumeSampler, fill_volume};

/// Rolling hills from a product of sines.
///
/// The field is `0.5 * (sin(x / scale_x) * cos(z / scale_z) + 1)`, which
/// stays in `[0, 1]`. A cell is solid when `y / scale_y` is at or below it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SineSampler {
    pub scale_x: f32,
    pub scale_y: f32,
    pub scale_z: f32,
}

impl Default for SineSampler {
    fn default() -> Self {
        Self {
            scale_x: X_SIZE as f32,
            scale_y: (Y_END - Y_BEGIN) as f32,
            scale_z: Z_SIZE as f32,
        }
    }
}

impl SineSampler {
    #[inline]
    pub fn field(&self, x: i32, z: i32) -> f32 {
        let s = (x as f32 / self.scale_x).sin();
        let c = (z as f32 / self.scale_z).cos();
        0.5 * (s * c + 1.0)
    }

    #[inline]
    pub fn is_solid(&self, p: IVec3) -> bool {
        p.y as f32 / self.scale_y <= self.field(p.x, p.z)
    }
}

impl VolumeSampler for SineSampler {
    fn sample(&self, begin: IVec3, end: IVec3, border: usize) -> Volume<Voxel> {
        fill_volume(begin, end, border, |p| self.is_solid(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_stays_in_unit_range() {
        let s = SineSampler::default();
        for x in (-500..500).step_by(7) {
            for z in (-500..500).step_by(11) {
                let f = s.field(x, z);
                assert!((0.0..=1.0).contains(&f), "field {} at ({}, {})", f, x, z);
            }
        }
    }

    #[test]
    fn bottom_layer_always_solid() {
        let s = SineSampler::default();
        let v = s.sample(IVec3::new(-3, 0, 5), IVec3::new(4, 1, 9), 0);
        assert!(v.cells().iter().all(|c| c.is_solid()));
    }

    #[test]
    fn above_unit_height_is_empty() {
        let s = SineSampler::default();
        let top = s.scale_y as i32 + 1;
        let v = s.sample(IVec3::new(0, top, 0), IVec3::new(8, top + 4, 8), 0);
        assert!(!v.has_solid());
    }
}
