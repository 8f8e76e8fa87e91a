//! Terrain generators behind [`VolumeSampler`].

mod heightmap;
mod noise;
mod sine;

pub use heightmap::{HeightmapSampler, volume_from_heightmap};
pub use noise::NoiseSampler;
pub use sine::SineSampler;

use voxview_geom::IVec3;
use voxview_volume::{Volume, Voxel};

use crate::sampler::VolumeSampler;
use crate::worldgen::{SamplerKind, WorldGenParams};

/// Runtime-selected sampler.
pub enum AnySampler {
    Sine(SineSampler),
    Heightmap(HeightmapSampler),
    Noise(NoiseSampler),
}

impl AnySampler {
    pub fn from_params(params: &WorldGenParams) -> Self {
        match params.sampler {
            SamplerKind::Sine => AnySampler::Sine(SineSampler::default()),
            SamplerKind::Heightmap => AnySampler::Heightmap(HeightmapSampler::default()),
            SamplerKind::Noise => AnySampler::Noise(NoiseSampler::new(params)),
        }
    }

    pub fn kind(&self) -> SamplerKind {
        match self {
            AnySampler::Sine(_) => SamplerKind::Sine,
            AnySampler::Heightmap(_) => SamplerKind::Heightmap,
            AnySampler::Noise(_) => SamplerKind::Noise,
        }
    }
}

impl VolumeSampler for AnySampler {
    fn sample(&self, begin: IVec3, end: IVec3, border: usize) -> Volume<Voxel> {
        match self {
            AnySampler::Sine(s) => s.sample(begin, end, border),
            AnySampler::Heightmap(s) => s.sample(begin, end, border),
            AnySampler::Noise(s) => s.sample(begin, end, border),
        }
    }
}
