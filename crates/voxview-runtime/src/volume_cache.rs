use std::num::NonZeroUsize;

use voxview_volume::{Volume, Voxel};
use voxview_world::{ChunkId, VolumeSampler};

use crate::lru_store::{CacheStats, LruStore};

/// Bordered chunk volumes, sampled on first use.
pub struct ChunkVolumeCache<S> {
    sampler: S,
    border: usize,
    store: LruStore<ChunkId, Volume<Voxel>>,
}

impl<S: VolumeSampler> ChunkVolumeCache<S> {
    pub fn new(sampler: S, border: usize, capacity: NonZeroUsize) -> Self {
        Self {
            sampler,
            border,
            store: LruStore::new(capacity),
        }
    }

    /// Runs `f` on the volume of `id`, sampling it first on a miss.
    pub fn with<R>(&mut self, id: ChunkId, f: impl FnOnce(&Volume<Voxel>) -> R) -> R {
        let sampler = &self.sampler;
        let border = self.border;
        let vol = self.store.get_or_insert_with(id, || {
            log::debug!("Sampling volume at {}", id);
            sampler.sample(id.begin_coord(), id.end_coord(), border)
        });
        f(vol)
    }

    #[inline]
    pub fn border(&self) -> usize {
        self.border
    }

    #[inline]
    pub fn contains(&self, id: ChunkId) -> bool {
        self.store.contains(&id)
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
