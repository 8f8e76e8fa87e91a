//! Chunk addressing, terrain sampling, and worldgen parameters.
#![forbid(unsafe_code)]

pub mod chunk;
pub mod generation;
pub mod sampler;
pub mod worldgen;

pub use chunk::{ChunkId, begin_coord, calc_translation, chunk_at, end_coord};
pub use generation::{AnySampler, HeightmapSampler, NoiseSampler, SineSampler};
pub use sampler::{VolumeSampler, bordered_dims, fill_volume};
pub use worldgen::{SamplerKind, WorldGenConfig, WorldGenParams};
