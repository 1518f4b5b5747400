use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::blob::BlobState;
use crate::error::Result;
use crate::geometry::{icosphere, Mesh};
use crate::palette::BlobPalette;
use crate::params::{particle_count_for_width, SceneParams};
use crate::particles::ParticleField;
use crate::pointer::PointerState;
use crate::proximity::ProximityGraph;
use crate::rings::OrbitalRings;

/// Everything the background animates, advanced once per display frame.
///
/// The subsystems share only elapsed time and the pointer sample; none of
/// them reads another's state. All buffers are sized here and reused.
pub struct Scene {
    params: SceneParams,
    pub blob: BlobState,
    pub particles: ParticleField,
    pub graph: ProximityGraph,
    pub rings: OrbitalRings,
    blob_mesh: Mesh,
}

impl Scene {
    pub fn new(params: SceneParams) -> Result<Self> {
        params.validate()?;
        let (particles, graph) = build_field(&params);
        let blob_mesh = icosphere(params.blob_subdivisions);
        log::debug!(
            "[scene] particles={} segment_capacity={} strategy={:?} blob_triangles={}",
            particles.len(),
            graph.lines().capacity(),
            params.proximity,
            blob_mesh.triangle_count()
        );
        Ok(Self {
            params,
            blob: BlobState::default(),
            particles,
            graph,
            rings: OrbitalRings::default(),
            blob_mesh,
        })
    }

    pub fn params(&self) -> &SceneParams {
        &self.params
    }

    pub fn palette(&self) -> &BlobPalette {
        &self.params.palette
    }

    pub fn blob_mesh(&self) -> &Mesh {
        &self.blob_mesh
    }

    /// Re-pick the particle count for a new visible world size. When the
    /// count changes the field and the proximity graph are rebuilt from the
    /// seed and `true` is returned, so the caller can resize GPU buffers.
    pub fn fit_viewport(&mut self, viewport: Vec2) -> bool {
        let count = particle_count_for_width(viewport.x);
        if count == self.params.particle_count {
            return false;
        }
        log::debug!(
            "[scene] viewport width {:.2}: particles {} -> {}",
            viewport.x,
            self.params.particle_count,
            count
        );
        self.params.particle_count = count;
        (self.particles, self.graph) = build_field(&self.params);
        true
    }

    /// Advance all subsystems. `viewport` is the visible world size at z = 0
    /// (see [`crate::Camera::viewport_at_target`]).
    pub fn update(&mut self, dt_sec: f32, elapsed_sec: f32, pointer: PointerState, viewport: Vec2) {
        self.blob.update(dt_sec, elapsed_sec, pointer, viewport);
        self.particles.update(elapsed_sec, pointer.ndc);
        self.graph.rebuild(self.particles.positions());
        self.rings.update(elapsed_sec);
    }
}

fn build_field(params: &SceneParams) -> (ParticleField, ProximityGraph) {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let particles = ParticleField::new(
        params.particle_count,
        &mut rng,
        params.anchor_radius_min,
        params.anchor_radius_max,
    );
    let graph = ProximityGraph::new(
        params.connection_distance,
        params.segment_capacity(),
        params.proximity,
    );
    (particles, graph)
}
