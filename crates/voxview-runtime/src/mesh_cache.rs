use std::num::NonZeroUsize;

use voxview_mesh_cpu::{MeshBuilder, MeshData};
use voxview_world::{ChunkId, VolumeSampler};

use crate::lru_store::{CacheStats, LruStore, Timestamped};
use crate::volume_cache::ChunkVolumeCache;

/// A cached chunk mesh together with its last access time.
pub type TimestampedMesh = Timestamped<MeshData>;

/// Built chunk meshes with least-recently-used eviction.
pub struct ChunkMeshCache {
    store: LruStore<ChunkId, MeshData>,
}

impl ChunkMeshCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            store: LruStore::new(capacity),
        }
    }

    /// Runs `f` on the mesh of `id`. A miss pulls the volume through
    /// `volumes` and builds the mesh with the volume cache's border.
    pub fn with<S, R>(
        &mut self,
        id: ChunkId,
        volumes: &mut ChunkVolumeCache<S>,
        f: impl FnOnce(&MeshData) -> R,
    ) -> R
    where
        S: VolumeSampler,
    {
        let mesh = self.store.get_or_insert_with(id, || {
            log::debug!("Building mesh at {}", id);
            let builder = MeshBuilder::new(volumes.border());
            volumes.with(id, |vol| builder.build(vol))
        });
        f(mesh)
    }

    #[inline]
    pub fn contains(&self, id: ChunkId) -> bool {
        self.store.contains(&id)
    }

    #[inline]
    pub fn last_access(&self, id: ChunkId) -> Option<u64> {
        self.store.last_access(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> NonZeroUsize {
        self.store.capacity()
    }

    pub fn stats(&self) -> CacheStats {
        self.store.stats()
    }
}
