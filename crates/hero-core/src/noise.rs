//! 3D simplex noise, lane-for-lane identical to `snoise` in `blob.wgsl`.
//!
//! The GPU evaluates displacement per vertex; this CPU copy exists so the
//! displacement and colour mapping can be checked on the host. Output is
//! roughly in [-1, 1].

use glam::Vec3;

#[inline]
fn mod289(x: f32) -> f32 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn permute(x: f32) -> f32 {
    mod289((x * 34.0 + 1.0) * x)
}

#[inline]
fn taylor_inv_sqrt(r: f32) -> f32 {
    1.792_842_9 - 0.853_734_7 * r
}

/// GLSL `step(edge, x)`.
#[inline]
fn step(edge: f32, x: f32) -> f32 {
    if x >= edge {
        1.0
    } else {
        0.0
    }
}

pub fn snoise(v: Vec3) -> f32 {
    const C_X: f32 = 1.0 / 6.0;
    const C_Y: f32 = 1.0 / 3.0;

    // Skew into simplex cell space and find the first corner.
    let i = (v + Vec3::splat(v.dot(Vec3::splat(C_Y)))).floor();
    let x0 = v - i + Vec3::splat(i.dot(Vec3::splat(C_X)));

    // Rank the components of x0 to pick the other two corners.
    let g = Vec3::new(step(x0.y, x0.x), step(x0.z, x0.y), step(x0.x, x0.z));
    let l = Vec3::ONE - g;
    let l_zxy = Vec3::new(l.z, l.x, l.y);
    let i1 = g.min(l_zxy);
    let i2 = g.max(l_zxy);

    let x1 = x0 - i1 + Vec3::splat(C_X);
    let x2 = x0 - i2 + Vec3::splat(C_Y);
    let x3 = x0 - Vec3::splat(0.5);

    // Hash the four corners.
    let i = Vec3::new(mod289(i.x), mod289(i.y), mod289(i.z));
    let mut p = [0.0f32; 4];
    let oz = [0.0, i1.z, i2.z, 1.0];
    let oy = [0.0, i1.y, i2.y, 1.0];
    let ox = [0.0, i1.x, i2.x, 1.0];
    for k in 0..4 {
        let a = permute(i.z + oz[k]);
        let b = permute(a + i.y + oy[k]);
        p[k] = permute(b + i.x + ox[k]);
    }

    // Gradients: 7x7 points over a square, mapped onto an octahedron.
    let n_ = 1.0 / 7.0;
    let ns = Vec3::new(n_ * 2.0, n_ * 0.5 - 1.0, n_);
    let mut gx = [0.0f32; 4];
    let mut gy = [0.0f32; 4];
    let mut h = [0.0f32; 4];
    for k in 0..4 {
        let j = p[k] - 49.0 * (p[k] * ns.z * ns.z).floor();
        let x_ = (j * ns.z).floor();
        let y_ = (j - 7.0 * x_).floor();
        gx[k] = x_ * ns.x + ns.y;
        gy[k] = y_ * ns.x + ns.y;
        h[k] = 1.0 - gx[k].abs() - gy[k].abs();
    }

    let mut grads = [Vec3::ZERO; 4];
    for k in 0..4 {
        let s_x = gx[k].floor() * 2.0 + 1.0;
        let s_y = gy[k].floor() * 2.0 + 1.0;
        let sh = -step(h[k], 0.0);
        grads[k] = Vec3::new(gx[k] + s_x * sh, gy[k] + s_y * sh, h[k]);
    }

    let corners = [x0, x1, x2, x3];
    let mut total = 0.0;
    for k in 0..4 {
        let g = grads[k] * taylor_inv_sqrt(grads[k].dot(grads[k]));
        let m = (0.6 - corners[k].dot(corners[k])).max(0.0);
        let m2 = m * m;
        total += m2 * m2 * g.dot(corners[k]);
    }
    42.0 * total
}
