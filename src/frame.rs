use std::time::Instant;

use voxview_geom::Mat4;
use voxview_mesh_cpu::MeshData;
use voxview_runtime::Runtime;
use voxview_world::{ChunkId, VolumeSampler, calc_translation, chunk_at};

use crate::camera::FlyCamera;
use crate::config::Flight;
use crate::view::visible_chunks;

/// Receives one chunk mesh per draw together with its model-to-world matrix.
pub trait DrawSink {
    fn draw(&mut self, id: ChunkId, model_to_world: &Mat4, mesh: &MeshData);
}

/// Sink that only counts what would have been drawn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawTally {
    pub draw_calls: u64,
    pub triangles: u64,
    pub empty_meshes: u64,
}

impl DrawSink for DrawTally {
    fn draw(&mut self, _id: ChunkId, _model_to_world: &Mat4, mesh: &MeshData) {
        if mesh.is_empty() {
            self.empty_meshes += 1;
            return;
        }
        self.draw_calls += 1;
        self.triangles += mesh.triangle_count() as u64;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub frames: u32,
    pub elapsed_ms: u128,
    pub chunks_entered: u32,
    pub final_chunk: ChunkId,
}

/// Headless stand-in for the render loop: fly the camera, pick visible
/// chunks, fetch their meshes and hand them to a sink.
pub struct FrameLoop<S> {
    camera: FlyCamera,
    runtime: Runtime<S>,
    radius: u32,
    flight: Flight,
}

impl<S: VolumeSampler> FrameLoop<S> {
    pub fn new(runtime: Runtime<S>, radius: u32, flight: Flight) -> Self {
        let mut camera = FlyCamera::new(flight.start_position());
        camera.set_fov(flight.fov_degrees.to_radians());
        Self {
            camera,
            runtime,
            radius,
            flight,
        }
    }

    pub fn camera(&self) -> &FlyCamera {
        &self.camera
    }

    pub fn runtime(&self) -> &Runtime<S> {
        &self.runtime
    }

    /// Advances the flight script by one frame and draws every visible chunk.
    pub fn step(&mut self, sink: &mut impl DrawSink) -> ChunkId {
        let h = self.camera.horizontal_angle() + self.flight.turn_rate;
        let v = self.camera.vertical_angle();
        self.camera.look(h, v);
        self.camera.move_forward(self.flight.speed);
        self.camera.move_right(self.flight.strafe);

        let center = chunk_at(self.camera.position());
        for id in visible_chunks(center, self.radius) {
            let model_to_world = calc_translation(id);
            self.runtime
                .with_mesh(id, |mesh| sink.draw(id, &model_to_world, mesh));
        }
        center
    }

    pub fn run(&mut self, frames: u32, sink: &mut impl DrawSink) -> RunSummary {
        let start = Instant::now();
        let mut current = chunk_at(self.camera.position());
        let mut chunks_entered = 0;
        for frame in 0..frames {
            let center = self.step(sink);
            if center != current {
                log::debug!("frame {} entered chunk {}", frame, center);
                chunks_entered += 1;
                current = center;
            }
        }
        RunSummary {
            frames,
            elapsed_ms: start.elapsed().as_millis(),
            chunks_entered,
            final_chunk: current,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use voxview_geom::IVec3;
    use voxview_runtime::CacheCapacities;
    use voxview_volume::{Volume, Voxel};
    use voxview_world::fill_volume;

    use super::*;

    fn flat(begin: IVec3, end: IVec3, border: usize) -> Volume<Voxel> {
        fill_volume(begin, end, border, |p| p.y <= 10)
    }

    fn caps(meshes: usize, volumes: usize) -> CacheCapacities {
        CacheCapacities {
            meshes: NonZeroUsize::new(meshes).unwrap(),
            volumes: NonZeroUsize::new(volumes).unwrap(),
        }
    }

    #[derive(Default)]
    struct Recorder {
        drawn: Vec<(ChunkId, Mat4)>,
    }

    impl DrawSink for Recorder {
        fn draw(&mut self, id: ChunkId, model_to_world: &Mat4, _mesh: &MeshData) {
            self.drawn.push((id, *model_to_world));
        }
    }

    #[test]
    fn stationary_camera_hits_cache_after_first_frame() {
        let flight = Flight {
            speed: 0.0,
            turn_rate: 0.0,
            ..Flight::default()
        };
        let mut fl = FrameLoop::new(Runtime::new(flat, 1, caps(50, 64)), 1, flight);
        let mut tally = DrawTally::default();
        let summary = fl.run(3, &mut tally);
        assert_eq!(summary.chunks_entered, 0);
        assert_eq!(tally.draw_calls, 27);
        let st = fl.runtime().meshes().stats();
        assert_eq!(st.misses, 9);
        assert_eq!(st.hits, 18);
        assert_eq!(st.evictions, 0);
    }

    #[test]
    fn draws_carry_chunk_translation() {
        let flight = Flight {
            speed: 0.0,
            turn_rate: 0.0,
            start: [-10.0, 40.0, 70.0],
            ..Flight::default()
        };
        let mut fl = FrameLoop::new(Runtime::new(flat, 1, caps(50, 64)), 1, flight);
        let mut rec = Recorder::default();
        let center = fl.step(&mut rec);
        assert_eq!(center, ChunkId::new(-1, 1));
        assert_eq!(rec.drawn.len(), 9);
        for (id, m) in &rec.drawn {
            assert_eq!(*m, calc_translation(*id));
            assert!(id.chebyshev_distance(center) <= 1);
        }
    }

    #[test]
    fn zero_radius_draws_only_the_camera_chunk() {
        let flight = Flight {
            speed: 0.0,
            turn_rate: 0.0,
            start: [130.0, 40.0, -1.0],
            ..Flight::default()
        };
        let mut fl = FrameLoop::new(Runtime::new(flat, 1, caps(4, 4)), 0, flight);
        let mut rec = Recorder::default();
        fl.step(&mut rec);
        assert_eq!(rec.drawn.len(), 1);
        assert_eq!(rec.drawn[0].0, ChunkId::new(2, -1));
    }

    #[test]
    fn flying_forward_crosses_chunks_and_evicts() {
        let flight = Flight {
            speed: 8.0,
            turn_rate: 0.0,
            ..Flight::default()
        };
        let mut fl = FrameLoop::new(Runtime::new(flat, 1, caps(9, 9)), 1, flight);
        let mut tally = DrawTally::default();
        let summary = fl.run(40, &mut tally);
        // 320 units along +z is five chunk boundaries
        assert_eq!(summary.chunks_entered, 5);
        assert_eq!(summary.final_chunk, ChunkId::new(0, 5));
        let st = fl.runtime().meshes().stats();
        assert!(st.entries <= 9);
        assert_eq!(st.evictions, 15);
    }
}
