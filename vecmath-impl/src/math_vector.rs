//! Low-level vector routines over raw `[f32; 3]` buffers.
//!
//! [crate::float3::Float3] delegates its geometric helpers to these functions.
//! They read and write exactly three consecutive floats and never allocate.

use log::trace;

/// Squared lengths at or below this are treated as the zero vector when normalizing.
const NORMALIZE_EPSILON: f32 = 1.0e-35;

pub fn dot_v3v3(a: &[f32; 3], b: &[f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn len_squared_v3(v: &[f32; 3]) -> f32 {
    dot_v3v3(v, v)
}

pub fn len_v3(v: &[f32; 3]) -> f32 {
    len_squared_v3(v).sqrt()
}

/// Writes the unit vector of `a` into `r` and returns the length of `a`.
///
/// A (near) zero input writes the zero vector and returns `0.0`.
pub fn normalize_v3_v3(r: &mut [f32; 3], a: &[f32; 3]) -> f32 {
    let d = len_squared_v3(a);
    if d > NORMALIZE_EPSILON {
        let len = d.sqrt();
        let inv = 1.0 / len;
        *r = [a[0] * inv, a[1] * inv, a[2] * inv];
        len
    } else {
        trace!("normalize_v3_v3: degenerate input {:?}", a);
        *r = [0.0; 3];
        0.0
    }
}

/// Normalizes `v` in place and returns its previous length.
pub fn normalize_v3(v: &mut [f32; 3]) -> f32 {
    let a = *v;
    normalize_v3_v3(v, &a)
}

/// Reflects `v` about `normal`: `r = v - 2 (v . n) n`.
///
/// `normal` is expected to be unit length; this is not checked.
pub fn reflect_v3_v3v3(r: &mut [f32; 3], v: &[f32; 3], normal: &[f32; 3]) {
    let dot2 = 2.0 * dot_v3v3(v, normal);
    *r = [
        v[0] - dot2 * normal[0],
        v[1] - dot2 * normal[1],
        v[2] - dot2 * normal[2],
    ];
}

/// Cross product accumulated in `f64` and rounded once per component.
pub fn cross_v3_v3v3_hi_prec(r: &mut [f32; 3], a: &[f32; 3], b: &[f32; 3]) {
    let (a0, a1, a2) = (a[0] as f64, a[1] as f64, a[2] as f64);
    let (b0, b1, b2) = (b[0] as f64, b[1] as f64, b[2] as f64);
    *r = [
        (a1 * b2 - a2 * b1) as f32,
        (a2 * b0 - a0 * b2) as f32,
        (a0 * b1 - a1 * b0) as f32,
    ];
}

/// Projects `p` onto `v_proj`.
///
/// Projecting onto the zero vector divides by zero and yields NaN components.
pub fn project_v3_v3v3(r: &mut [f32; 3], p: &[f32; 3], v_proj: &[f32; 3]) {
    let mul = dot_v3v3(p, v_proj) / dot_v3v3(v_proj, v_proj);
    *r = [mul * v_proj[0], mul * v_proj[1], mul * v_proj[2]];
}
