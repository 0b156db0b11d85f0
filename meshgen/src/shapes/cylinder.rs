//! Cylinders, with and without caps

use std::f32::consts::TAU;

use glam::{Vec2, Vec3, Vec4};

use super::{
    TANGENT_NEG_X, TANGENT_POS_X, clamp_slices, disk_texcoord, radial_tangent, theta_step,
};
use crate::error::GeometryError;
use crate::index::IndexFormat;
use crate::mesh::{MeshBuilder, MeshData};
use crate::vertex::{CanonicalVertex, VertexLayout};

/// Vertex and index counts for the side surface alone
pub(crate) fn cylinder_no_cap_counts(slices: u32) -> (usize, usize) {
    let slices = slices as usize;
    (2 * (slices + 1), 6 * slices)
}

/// Vertex and index counts for the side surface plus both caps
pub(crate) fn cylinder_counts(slices: u32) -> (usize, usize) {
    let slices = slices as usize;
    (4 * (slices + 1) + 2, 12 * slices)
}

/// Generate the side surface of a cylinder (no caps)
///
/// # Arguments
/// * `radius` - Cylinder radius
/// * `height` - Total height; the cylinder spans `y ∈ [-height/2, height/2]`
/// * `slices` - Radial divisions (min 1)
/// * `color` - Uniform vertex color
///
/// # Returns
/// Two rings of `slices + 1` vertices (top first, then bottom), seam duplicated at θ = 2π.
/// Normals are radial and horizontal.
pub fn create_cylinder_no_cap<V: VertexLayout, I: IndexFormat>(
    radius: f32,
    height: f32,
    slices: u32,
    color: Vec4,
) -> Result<MeshData<V, I>, GeometryError> {
    let slices = clamp_slices("create_cylinder_no_cap", slices);
    let (vertex_count, index_count) = cylinder_no_cap_counts(slices);
    let mut mesh = MeshBuilder::<V, I>::with_capacity(vertex_count, index_count)?;

    add_side(&mut mesh, radius, height, slices, color);

    Ok(mesh.finish())
}

/// Generate a closed cylinder: side surface plus top (+Y) and bottom (-Y) caps
///
/// Side vertices come first, in the same order as [`create_cylinder_no_cap`]; each cap is a
/// center vertex followed by `slices + 1` boundary vertices.
pub fn create_cylinder<V: VertexLayout, I: IndexFormat>(
    radius: f32,
    height: f32,
    slices: u32,
    color: Vec4,
) -> Result<MeshData<V, I>, GeometryError> {
    let slices = clamp_slices("create_cylinder", slices);
    let (vertex_count, index_count) = cylinder_counts(slices);
    let mut mesh = MeshBuilder::<V, I>::with_capacity(vertex_count, index_count)?;

    add_side(&mut mesh, radius, height, slices, color);
    add_cap(&mut mesh, radius, height / 2.0, slices, color, Vec3::Y);
    add_cap(&mut mesh, radius, -height / 2.0, slices, color, Vec3::NEG_Y);

    Ok(mesh.finish())
}

fn add_side<V: VertexLayout, I: IndexFormat>(
    mesh: &mut MeshBuilder<V, I>,
    radius: f32,
    height: f32,
    slices: u32,
    color: Vec4,
) {
    let h2 = height / 2.0;
    let per_theta = theta_step(slices);
    let base = mesh.next_index();

    for (y, v) in [(h2, 0.0), (-h2, 1.0)] {
        for i in 0..=slices {
            let theta = per_theta * i as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            mesh.add_vertex(CanonicalVertex::new(
                Vec3::new(radius * cos_theta, y, radius * sin_theta),
                Vec3::new(cos_theta, 0.0, sin_theta),
                radial_tangent(theta),
                color,
                Vec2::new(theta / TAU, v),
            ));
        }
    }

    let ring = slices + 1;
    for i in 0..slices {
        let top = base + i;
        let bottom = base + ring + i;
        mesh.add_triangle(top, top + 1, bottom + 1);
        mesh.add_triangle(bottom + 1, bottom, top);
    }
}

/// Triangle fan at height `y` facing `normal` (either +Y or -Y)
fn add_cap<V: VertexLayout, I: IndexFormat>(
    mesh: &mut MeshBuilder<V, I>,
    radius: f32,
    y: f32,
    slices: u32,
    color: Vec4,
    normal: Vec3,
) {
    let facing_up = normal.y > 0.0;
    let tangent = if facing_up { TANGENT_POS_X } else { TANGENT_NEG_X };
    let per_theta = theta_step(slices);

    let center = mesh.add_vertex(CanonicalVertex::new(
        Vec3::new(0.0, y, 0.0),
        normal,
        tangent,
        color,
        Vec2::new(0.5, 0.5),
    ));

    for i in 0..=slices {
        let theta = per_theta * i as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        mesh.add_vertex(CanonicalVertex::new(
            Vec3::new(radius * cos_theta, y, radius * sin_theta),
            normal,
            tangent,
            color,
            disk_texcoord(theta),
        ));
    }

    // Boundary vertex k sits at center + 1 + k
    for i in 1..=slices {
        if facing_up {
            mesh.add_triangle(center, center + i + 1, center + i);
        } else {
            mesh.add_triangle(center, center + i, center + i + 1);
        }
    }
}
