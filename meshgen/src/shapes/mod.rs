//! Procedural shape generators
//!
//! Every generator computes attributes in the full [`CanonicalVertex`] set, projects them into
//! the caller's vertex type, and returns a triangle list.
//!
//! Winding follows the left-handed, clockwise-front convention: for each non-degenerate
//! triangle `(v0, v1, v2)`, `(v1 - v0) × (v2 - v0)` points out of the solid.
//!
//! [`CanonicalVertex`]: crate::vertex::CanonicalVertex

mod cone;
mod cube;
mod cylinder;
mod quad;
mod sphere;


use std::f32::consts::TAU;

use glam::{Vec2, Vec4};
use tracing::warn;

pub use cone::{create_cone, create_cone_no_cap};
pub use cube::create_box;
pub use cylinder::{create_cylinder, create_cylinder_no_cap};
pub use quad::{create_2d_show, create_2d_show_xy, create_plane, create_plane_xyz};
pub use sphere::create_sphere;

pub(crate) use cone::{cone_counts, cone_no_cap_counts};
pub(crate) use cube::BOX_COUNTS;
pub(crate) use cylinder::{cylinder_counts, cylinder_no_cap_counts};
pub(crate) use quad::QUAD_COUNTS;
pub(crate) use sphere::sphere_counts;

/// Opaque white, the default vertex color
pub const WHITE: Vec4 = Vec4::ONE;

/// Smallest usable radial division count
pub const MIN_SLICES: u32 = 1;

/// Smallest usable band count for spheres (one ring between the poles)
pub const MIN_LEVELS: u32 = 2;

/// Tangent used by surfaces facing +Y (caps, poles, quads)
const TANGENT_POS_X: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);

/// Tangent used by surfaces facing -Y
const TANGENT_NEG_X: Vec4 = Vec4::new(-1.0, 0.0, 0.0, 1.0);

pub(crate) fn clamp_slices(generator: &str, slices: u32) -> u32 {
    if slices < MIN_SLICES {
        warn!("{generator}: slices must be >= {MIN_SLICES}, clamping to {MIN_SLICES}");
        MIN_SLICES
    } else {
        slices
    }
}

pub(crate) fn clamp_levels(generator: &str, levels: u32) -> u32 {
    if levels < MIN_LEVELS {
        warn!("{generator}: levels must be >= {MIN_LEVELS}, clamping to {MIN_LEVELS}");
        MIN_LEVELS
    } else {
        levels
    }
}

/// Angle step between radial divisions
#[inline]
fn theta_step(slices: u32) -> f32 {
    TAU / slices as f32
}

/// Tangent along increasing theta on a Y-axis surface of revolution
#[inline]
fn radial_tangent(theta: f32) -> Vec4 {
    Vec4::new(-theta.sin(), 0.0, theta.cos(), 1.0)
}

/// Disk texture mapping: unit circle onto `[0,1]²`, centered at (0.5, 0.5)
#[inline]
fn disk_texcoord(theta: f32) -> Vec2 {
    Vec2::new(theta.cos() / 2.0 + 0.5, theta.sin() / 2.0 + 0.5)
}
