//! Proximity graph: line segments between particles closer than a threshold,
//! rebuilt from scratch every frame into a buffer sized once up front.

use fnv::FnvHashMap;
use glam::Vec3;
use smallvec::SmallVec;

use crate::constants::FLOATS_PER_SEGMENT;
use crate::params::ProximityStrategy;

/// Fixed-capacity segment buffer with a separate valid length.
///
/// The backing storage never grows or shrinks after construction; only the
/// first [`LineBuffer::len`] segments are meaningful for the current frame.
pub struct LineBuffer {
    data: Vec<f32>,
    capacity: usize,
    segments: usize,
}

impl LineBuffer {
    pub fn with_capacity(segments: usize) -> Self {
        Self {
            data: vec![0.0; segments * FLOATS_PER_SEGMENT],
            capacity: segments,
            segments: 0,
        }
    }

    /// Maximum number of segments.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Valid segments this frame.
    pub fn len(&self) -> usize {
        self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments == 0
    }

    pub fn is_full(&self) -> bool {
        self.segments >= self.capacity
    }

    pub fn clear(&mut self) {
        self.segments = 0;
    }

    /// Append a segment; returns false (and writes nothing) once full.
    pub fn push(&mut self, a: Vec3, b: Vec3) -> bool {
        if self.is_full() {
            return false;
        }
        let o = self.segments * FLOATS_PER_SEGMENT;
        self.data[o..o + 3].copy_from_slice(&a.to_array());
        self.data[o + 3..o + 6].copy_from_slice(&b.to_array());
        self.segments += 1;
        true
    }

    /// Vertex count to draw: two endpoints per valid segment.
    pub fn draw_range(&self) -> u32 {
        (self.segments * 2) as u32
    }

    /// Floats written this frame.
    pub fn valid(&self) -> &[f32] {
        &self.data[..self.segments * FLOATS_PER_SEGMENT]
    }

    /// Whole backing store, including stale data past the draw range.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Zero the slot right after the valid range so a renderer that ignores
    /// the draw range shows at most a degenerate segment.
    fn zero_tail(&mut self) {
        let start = self.segments * FLOATS_PER_SEGMENT;
        let end = (start + FLOATS_PER_SEGMENT).min(self.data.len());
        self.data[start..end].fill(0.0);
    }
}

type CellKey = (i32, i32, i32);

/// Uniform grid over particle indices, reused across frames.
#[derive(Default)]
struct SpatialGrid {
    cells: FnvHashMap<CellKey, SmallVec<[u32; 8]>>,
}

impl SpatialGrid {
    fn key(p: Vec3, inv_cell: f32) -> CellKey {
        let c = (p * inv_cell).floor();
        (c.x as i32, c.y as i32, c.z as i32)
    }

    fn rebuild(&mut self, positions: &[f32], inv_cell: f32) {
        // Only cells occupied last frame keep their bucket storage.
        self.cells.retain(|_, bucket| !bucket.is_empty());
        for bucket in self.cells.values_mut() {
            bucket.clear();
        }
        for (i, p) in positions.chunks_exact(3).enumerate() {
            let key = Self::key(Vec3::new(p[0], p[1], p[2]), inv_cell);
            self.cells.entry(key).or_default().push(i as u32);
        }
    }
}

pub struct ProximityGraph {
    threshold_sq: f32,
    strategy: ProximityStrategy,
    lines: LineBuffer,
    grid: SpatialGrid,
    cell_size: f32,
}

impl ProximityGraph {
    pub fn new(threshold: f32, segment_capacity: usize, strategy: ProximityStrategy) -> Self {
        Self {
            threshold_sq: threshold * threshold,
            strategy,
            lines: LineBuffer::with_capacity(segment_capacity),
            grid: SpatialGrid::default(),
            cell_size: threshold,
        }
    }

    pub fn lines(&self) -> &LineBuffer {
        &self.lines
    }

    pub fn strategy(&self) -> ProximityStrategy {
        self.strategy
    }

    /// Grid cells currently held by the spatial index (0 for exhaustive).
    pub fn grid_cells(&self) -> usize {
        self.grid.cells.len()
    }

    /// Rebuild the segment set from flat xyz `positions`. Returns the number
    /// of segments written; stops silently at capacity.
    pub fn rebuild(&mut self, positions: &[f32]) -> usize {
        self.lines.clear();
        match self.strategy {
            ProximityStrategy::Exhaustive => self.scan_all_pairs(positions),
            ProximityStrategy::Grid => self.scan_grid(positions),
        }
        self.lines.zero_tail();
        self.lines.len()
    }

    fn scan_all_pairs(&mut self, positions: &[f32]) {
        let n = positions.len() / 3;
        'outer: for i in 0..n {
            let a = point(positions, i);
            for j in (i + 1)..n {
                if self.lines.is_full() {
                    break 'outer;
                }
                let b = point(positions, j);
                if a.distance_squared(b) < self.threshold_sq {
                    self.lines.push(a, b);
                }
            }
        }
    }

    fn scan_grid(&mut self, positions: &[f32]) {
        let inv_cell = 1.0 / self.cell_size;
        self.grid.rebuild(positions, inv_cell);
        let n = positions.len() / 3;
        for i in 0..n {
            let a = point(positions, i);
            let (cx, cy, cz) = SpatialGrid::key(a, inv_cell);
            for dx in -1..=1 {
                for dy in -1..=1 {
                    for dz in -1..=1 {
                        let Some(bucket) = self.grid.cells.get(&(cx + dx, cy + dy, cz + dz))
                        else {
                            continue;
                        };
                        for &j in bucket.iter() {
                            let j = j as usize;
                            if j <= i {
                                continue;
                            }
                            if self.lines.is_full() {
                                return;
                            }
                            let b = point(positions, j);
                            if a.distance_squared(b) < self.threshold_sq {
                                self.lines.push(a, b);
                            }
                        }
                    }
                }
            }
        }
    }
}

#[inline]
fn point(positions: &[f32], i: usize) -> Vec3 {
    Vec3::new(positions[i * 3], positions[i * 3 + 1], positions[i * 3 + 2])
}
