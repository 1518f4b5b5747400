//! Static geometry built once at startup: the blob icosphere and ring loops.

use fnv::FnvHashMap;
use glam::Vec3;
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Unit sphere from a recursively subdivided icosahedron. Vertices are
/// shared between faces and each normal equals its position.
pub fn icosphere(subdivisions: u32) -> Mesh {
    let t = (1.0 + 5.0_f32.sqrt()) * 0.5;
    let mut positions: Vec<Vec3> = [
        (-1.0, t, 0.0),
        (1.0, t, 0.0),
        (-1.0, -t, 0.0),
        (1.0, -t, 0.0),
        (0.0, -1.0, t),
        (0.0, 1.0, t),
        (0.0, -1.0, -t),
        (0.0, 1.0, -t),
        (t, 0.0, -1.0),
        (t, 0.0, 1.0),
        (-t, 0.0, -1.0),
        (-t, 0.0, 1.0),
    ]
    .iter()
    .map(|&(x, y, z)| Vec3::new(x, y, z).normalize())
    .collect();

    let mut faces: Vec<[u32; 3]> = ICOSAHEDRON_FACES.to_vec();
    let mut midpoints: FnvHashMap<(u32, u32), u32> = FnvHashMap::default();

    for _ in 0..subdivisions {
        midpoints.clear();
        let mut next = Vec::with_capacity(faces.len() * 4);
        for &[a, b, c] in &faces {
            let ab = midpoint(&mut positions, &mut midpoints, a, b);
            let bc = midpoint(&mut positions, &mut midpoints, b, c);
            let ca = midpoint(&mut positions, &mut midpoints, c, a);
            next.push([a, ab, ca]);
            next.push([b, bc, ab]);
            next.push([c, ca, bc]);
            next.push([ab, bc, ca]);
        }
        faces = next;
    }

    let vertices = positions
        .iter()
        .map(|p| MeshVertex {
            position: p.to_array(),
            normal: p.to_array(),
        })
        .collect();
    let indices = faces.into_iter().flatten().collect();
    Mesh { vertices, indices }
}

fn midpoint(
    positions: &mut Vec<Vec3>,
    cache: &mut FnvHashMap<(u32, u32), u32>,
    a: u32,
    b: u32,
) -> u32 {
    let key = if a < b { (a, b) } else { (b, a) };
    if let Some(&i) = cache.get(&key) {
        return i;
    }
    let p = ((positions[a as usize] + positions[b as usize]) * 0.5).normalize();
    let i = positions.len() as u32;
    positions.push(p);
    cache.insert(key, i);
    i
}

/// Circle of `radius` in the local XY plane as a line list
/// (`2 * segments` endpoints).
pub fn circle_line_list(radius: f32, segments: usize) -> Vec<[f32; 3]> {
    let segments = segments.max(3);
    let at = |k: usize| {
        let a = k as f32 / segments as f32 * TAU;
        [radius * a.cos(), radius * a.sin(), 0.0]
    };
    (0..segments).flat_map(|k| [at(k), at(k + 1)]).collect()
}
