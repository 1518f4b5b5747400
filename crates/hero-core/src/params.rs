use glam::Vec2;

use crate::constants::*;
use crate::error::{Result, SceneError};
use crate::palette::BlobPalette;

/// How the proximity graph finds candidate pairs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProximityStrategy {
    /// Every pair, every frame.
    #[default]
    Exhaustive,
    /// Uniform grid with cell size equal to the connection distance.
    Grid,
}

/// Construction-time knobs for a [`crate::Scene`].
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub particle_count: usize,
    pub seed: u64,
    pub anchor_radius_min: f32,
    pub anchor_radius_max: f32,
    pub connection_distance: f32,
    pub segments_per_particle: usize,
    pub proximity: ProximityStrategy,
    pub blob_subdivisions: u32,
    pub palette: BlobPalette,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT_DESKTOP,
            seed: 42,
            anchor_radius_min: ANCHOR_RADIUS_MIN,
            anchor_radius_max: ANCHOR_RADIUS_MAX,
            connection_distance: CONNECTION_DISTANCE,
            segments_per_particle: SEGMENTS_PER_PARTICLE,
            proximity: ProximityStrategy::Exhaustive,
            blob_subdivisions: BLOB_SUBDIVISIONS,
            palette: BlobPalette::default(),
        }
    }
}

impl SceneParams {
    /// Defaults with the particle count picked for the visible world size:
    /// narrow (phone-sized) viewports get fewer particles.
    pub fn for_viewport(viewport: Vec2, seed: u64) -> Self {
        Self {
            particle_count: particle_count_for_width(viewport.x),
            seed,
            ..Self::default()
        }
    }

    /// Number of line segments the proximity buffer can hold.
    pub fn segment_capacity(&self) -> usize {
        self.particle_count * self.segments_per_particle
    }

    pub fn validate(&self) -> Result<()> {
        if self.particle_count == 0 {
            return Err(SceneError::NoParticles);
        }
        check_positive("anchor_radius_min", self.anchor_radius_min)?;
        check_positive("anchor_radius_max", self.anchor_radius_max)?;
        if self.anchor_radius_min > self.anchor_radius_max {
            return Err(SceneError::InvertedRadiusBand {
                min: self.anchor_radius_min,
                max: self.anchor_radius_max,
            });
        }
        check_positive("connection_distance", self.connection_distance)?;
        if self.segment_capacity() == 0 {
            return Err(SceneError::ZeroLineCapacity);
        }
        if self.blob_subdivisions > MAX_BLOB_SUBDIVISIONS {
            return Err(SceneError::TooManySubdivisions {
                value: self.blob_subdivisions,
                max: MAX_BLOB_SUBDIVISIONS,
            });
        }
        self.palette.validate()
    }
}

#[inline]
pub fn particle_count_for_width(viewport_width: f32) -> usize {
    if viewport_width < MOBILE_VIEWPORT_WIDTH {
        PARTICLE_COUNT_MOBILE
    } else {
        PARTICLE_COUNT_DESKTOP
    }
}

fn check_positive(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SceneError::NonPositive { name, value })
    }
}
