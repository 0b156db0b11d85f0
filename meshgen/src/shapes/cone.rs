//! Cones, with and without a base cap

use glam::{Vec2, Vec3, Vec4};

use super::{TANGENT_NEG_X, clamp_slices, disk_texcoord, radial_tangent, theta_step};
use crate::error::GeometryError;
use crate::index::IndexFormat;
use crate::mesh::{MeshBuilder, MeshData};
use crate::vertex::{CanonicalVertex, VertexLayout};

/// Vertex and index counts for the side surface alone
pub(crate) fn cone_no_cap_counts(slices: u32) -> (usize, usize) {
    let slices = slices as usize;
    (2 * slices, 3 * slices)
}

/// Vertex and index counts for the side surface plus the base cap
pub(crate) fn cone_counts(slices: u32) -> (usize, usize) {
    let slices = slices as usize;
    (3 * slices + 1, 6 * slices)
}

/// Generate the side surface of a cone (no base)
///
/// # Arguments
/// * `radius` - Base radius
/// * `height` - Total height; apex at `y = height/2`, base at `y = -height/2`
/// * `slices` - Radial divisions (min 1)
/// * `color` - Uniform vertex color
///
/// # Returns
/// `slices` apex vertices followed by `slices` base vertices, one triangle per slice.
///
/// Every side triangle owns its apex vertex. The apex copy carries the slant normal at the
/// triangle's mid-angle, so faceted lighting stays correct at the tip.
pub fn create_cone_no_cap<V: VertexLayout, I: IndexFormat>(
    radius: f32,
    height: f32,
    slices: u32,
    color: Vec4,
) -> Result<MeshData<V, I>, GeometryError> {
    let slices = clamp_slices("create_cone_no_cap", slices);
    let (vertex_count, index_count) = cone_no_cap_counts(slices);
    let mut mesh = MeshBuilder::<V, I>::with_capacity(vertex_count, index_count)?;

    add_side(&mut mesh, radius, height, slices, color);

    Ok(mesh.finish())
}

/// Generate a closed cone: side surface plus a base disk facing -Y
///
/// Side vertices come first, in the same order as [`create_cone_no_cap`]; the base follows as
/// `slices` boundary vertices and a center vertex.
pub fn create_cone<V: VertexLayout, I: IndexFormat>(
    radius: f32,
    height: f32,
    slices: u32,
    color: Vec4,
) -> Result<MeshData<V, I>, GeometryError> {
    let slices = clamp_slices("create_cone", slices);
    let (vertex_count, index_count) = cone_counts(slices);
    let mut mesh = MeshBuilder::<V, I>::with_capacity(vertex_count, index_count)?;

    add_side(&mut mesh, radius, height, slices, color);
    add_base(&mut mesh, radius, height, slices, color);

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
    let slant = (height * height + radius * radius).sqrt();
    let slant_normal = |theta: f32| {
        let (sin_theta, cos_theta) = theta.sin_cos();
        Vec3::new(
            radius * cos_theta / slant,
            height / slant,
            radius * sin_theta / slant,
        )
    };

    // Apex copies, one per side triangle
    for i in 0..slices {
        let theta = per_theta * i as f32 + per_theta / 2.0;
        mesh.add_vertex(CanonicalVertex::new(
            Vec3::new(0.0, h2, 0.0),
            slant_normal(theta),
            radial_tangent(theta),
            color,
            Vec2::new(0.5, 0.5),
        ));
    }

    // Base ring, no seam duplicate
    for i in 0..slices {
        let theta = per_theta * i as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        mesh.add_vertex(CanonicalVertex::new(
            Vec3::new(radius * cos_theta, -h2, radius * sin_theta),
            slant_normal(theta),
            radial_tangent(theta),
            color,
            disk_texcoord(theta),
        ));
    }

    for i in 0..slices {
        mesh.add_triangle(i, slices + (i + 1) % slices, slices + i);
    }
}

fn add_base<V: VertexLayout, I: IndexFormat>(
    mesh: &mut MeshBuilder<V, I>,
    radius: f32,
    height: f32,
    slices: u32,
    color: Vec4,
) {
    let h2 = height / 2.0;
    let per_theta = theta_step(slices);
    let offset = mesh.next_index();

    for i in 0..slices {
        let theta = per_theta * i as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        mesh.add_vertex(CanonicalVertex::new(
            Vec3::new(radius * cos_theta, -h2, radius * sin_theta),
            Vec3::NEG_Y,
            TANGENT_NEG_X,
            color,
            disk_texcoord(theta),
        ));
    }

    let center = mesh.add_vertex(CanonicalVertex::new(
        Vec3::new(0.0, -h2, 0.0),
        Vec3::NEG_Y,
        TANGENT_NEG_X,
        color,
        Vec2::new(0.5, 0.5),
    ));

    for i in 0..slices {
        mesh.add_triangle(center, offset + i, offset + (i + 1) % slices);
    }
}
