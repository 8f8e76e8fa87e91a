//! Chunk caches: sampled volumes and built meshes, each bounded with LRU eviction.
#![forbid(unsafe_code)]

mod lru_store;
mod mesh_cache;
mod volume_cache;

pub use lru_store::{CacheStats, LruStore, Timestamped};
pub use mesh_cache::{ChunkMeshCache, TimestampedMesh};
pub use volume_cache::ChunkVolumeCache;

use std::num::NonZeroUsize;

use voxview_mesh_cpu::MeshData;
use voxview_world::{ChunkId, VolumeSampler};

/// Capacities for the two cache layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheCapacities {
    pub meshes: NonZeroUsize,
    pub volumes: NonZeroUsize,
}

/// Volume and mesh caches wired together: a mesh miss samples through the
/// volume cache.
pub struct Runtime<S> {
    volumes: ChunkVolumeCache<S>,
    meshes: ChunkMeshCache,
}

impl<S: VolumeSampler> Runtime<S> {
    pub fn new(sampler: S, border: usize, caps: CacheCapacities) -> Self {
        Self {
            volumes: ChunkVolumeCache::new(sampler, border, caps.volumes),
            meshes: ChunkMeshCache::new(caps.meshes),
        }
    }

    pub fn with_mesh<R>(&mut self, id: ChunkId, f: impl FnOnce(&MeshData) -> R) -> R {
        self.meshes.with(id, &mut self.volumes, f)
    }

    pub fn volumes(&self) -> &ChunkVolumeCache<S> {
        &self.volumes
    }

    pub fn meshes(&self) -> &ChunkMeshCache {
        &self.meshes
    }

    pub fn log_stats(&self) {
        log::info!("mesh cache: {}", self.meshes.stats());
        log::info!("volume cache: {}", self.volumes.stats());
    }
}
