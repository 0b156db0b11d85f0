//! Latitude-longitude sphere

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3, Vec4};

use super::{TANGENT_NEG_X, TANGENT_POS_X, clamp_levels, clamp_slices, radial_tangent, theta_step};
use crate::error::GeometryError;
use crate::index::IndexFormat;
use crate::mesh::{MeshBuilder, MeshData};
use crate::vertex::{CanonicalVertex, VertexLayout};

/// Vertex and index counts for a sphere
pub(crate) fn sphere_counts(levels: u32, slices: u32) -> (usize, usize) {
    let (levels, slices) = (levels as usize, slices as usize);
    (
        2 + (levels - 1) * (slices + 1),
        6 * (levels - 1) * slices,
    )
}

/// Generate a sphere centered at the origin
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `levels` - Horizontal bands from pole to pole (min 2)
/// * `slices` - Radial divisions (min 1)
/// * `color` - Uniform vertex color
///
/// # Returns
/// `2 + (levels - 1) × (slices + 1)` vertices: the two poles plus `levels - 1` rings, each
/// ring closing with a seam duplicate at θ = 2π so U can reach 1.0.
///
/// # Texture Mapping
/// U = θ / 2π around the Y axis, V = φ / π from the north pole.
pub fn create_sphere<V: VertexLayout, I: IndexFormat>(
    radius: f32,
    levels: u32,
    slices: u32,
    color: Vec4,
) -> Result<MeshData<V, I>, GeometryError> {
    let levels = clamp_levels("create_sphere", levels);
    let slices = clamp_slices("create_sphere", slices);

    let (vertex_count, index_count) = sphere_counts(levels, slices);
    let mut mesh = MeshBuilder::<V, I>::with_capacity(vertex_count, index_count)?;

    let per_phi = PI / levels as f32;
    let per_theta = theta_step(slices);

    // North pole
    mesh.add_vertex(CanonicalVertex::new(
        Vec3::new(0.0, radius, 0.0),
        Vec3::Y,
        TANGENT_POS_X,
        color,
        Vec2::new(0.0, 0.0),
    ));

    for i in 1..levels {
        let phi = per_phi * i as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for j in 0..=slices {
            let theta = per_theta * j as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();

            let direction = Vec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta);
            mesh.add_vertex(CanonicalVertex::new(
                direction * radius,
                direction,
                radial_tangent(theta),
                color,
                Vec2::new(theta / TAU, phi / PI),
            ));
        }
    }

    // South pole
    let south = mesh.add_vertex(CanonicalVertex::new(
        Vec3::new(0.0, -radius, 0.0),
        Vec3::NEG_Y,
        TANGENT_NEG_X,
        color,
        Vec2::new(0.0, 1.0),
    ));

    let ring = slices + 1;

    // Top band: fan around the north pole
    for j in 1..=slices {
        mesh.add_triangle(0, j + 1, j);
    }

    // Middle bands: one quad per slice, split into two triangles
    for i in 1..levels - 1 {
        let upper = (i - 1) * ring;
        let lower = i * ring;
        for j in 1..=slices {
            mesh.add_triangle(upper + j, upper + j + 1, lower + j + 1);
            mesh.add_triangle(lower + j + 1, lower + j, upper + j);
        }
    }

    // Bottom band: fan around the south pole
    let last = (levels - 2) * ring;
    for j in 1..=slices {
        mesh.add_triangle(last + j, last + j + 1, south);
    }

    Ok(mesh.finish())
}
