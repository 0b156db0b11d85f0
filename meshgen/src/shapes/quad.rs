//! Single-quad shapes: screen-space rectangles and horizontal planes

use glam::{Vec2, Vec3, Vec4};

use super::TANGENT_POS_X;
use crate::error::GeometryError;
use crate::index::IndexFormat;
use crate::mesh::{MeshBuilder, MeshData};
use crate::vertex::{CanonicalVertex, VertexLayout};

/// Vertex and index counts for any quad
pub(crate) const QUAD_COUNTS: (usize, usize) = (4, 6);

/// Fixed quad winding
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

fn build_quad<V: VertexLayout, I: IndexFormat>(
    corners: [(Vec3, Vec2); 4],
    normal: Vec3,
    color: Vec4,
) -> Result<MeshData<V, I>, GeometryError> {
    let (vertex_count, index_count) = QUAD_COUNTS;
    let mut mesh = MeshBuilder::<V, I>::with_capacity(vertex_count, index_count)?;

    for (position, texcoord) in corners {
        mesh.add_vertex(CanonicalVertex::new(
            position,
            normal,
            TANGENT_POS_X,
            color,
            texcoord,
        ));
    }

    for tri in QUAD_INDICES.chunks_exact(3) {
        mesh.add_triangle(tri[0], tri[1], tri[2]);
    }

    Ok(mesh.finish())
}

/// Generate a screen-space rectangle in normalized device coordinates
///
/// # Arguments
/// * `center` - Rectangle center in NDC
/// * `scale` - Half extents; `(1, 1)` around the origin covers the whole screen
/// * `color` - Uniform vertex color
///
/// # Returns
/// 4 vertices at `z = 0` facing -Z (toward the viewer), corners bottom-left, top-left,
/// top-right, bottom-right, with the texture's top-left at the top-left corner.
pub fn create_2d_show<V: VertexLayout, I: IndexFormat>(
    center: Vec2,
    scale: Vec2,
    color: Vec4,
) -> Result<MeshData<V, I>, GeometryError> {
    let (min, max) = (center - scale, center + scale);
    build_quad(
        [
            (Vec3::new(min.x, min.y, 0.0), Vec2::new(0.0, 1.0)),
            (Vec3::new(min.x, max.y, 0.0), Vec2::new(0.0, 0.0)),
            (Vec3::new(max.x, max.y, 0.0), Vec2::new(1.0, 0.0)),
            (Vec3::new(max.x, min.y, 0.0), Vec2::new(1.0, 1.0)),
        ],
        Vec3::NEG_Z,
        color,
    )
}

/// Scalar form of [`create_2d_show`]
pub fn create_2d_show_xy<V: VertexLayout, I: IndexFormat>(
    center_x: f32,
    center_y: f32,
    scale_x: f32,
    scale_y: f32,
    color: Vec4,
) -> Result<MeshData<V, I>, GeometryError> {
    create_2d_show(
        Vec2::new(center_x, center_y),
        Vec2::new(scale_x, scale_y),
        color,
    )
}

/// Generate a horizontal plane facing +Y
///
/// # Arguments
/// * `center` - Plane center
/// * `plane_size` - Extent along X and Z
/// * `max_tex_coord` - Texture coordinate at the far corner; values above 1 tile the texture
/// * `color` - Uniform vertex color
///
/// # Texture Mapping
/// Corners (in vertex order) map to `(0, v)`, `(0, 0)`, `(u, 0)`, `(u, v)`.
pub fn create_plane<V: VertexLayout, I: IndexFormat>(
    center: Vec3,
    plane_size: Vec2,
    max_tex_coord: Vec2,
    color: Vec4,
) -> Result<MeshData<V, I>, GeometryError> {
    let half = plane_size / 2.0;
    let (u, v) = (max_tex_coord.x, max_tex_coord.y);
    build_quad(
        [
            (center + Vec3::new(-half.x, 0.0, -half.y), Vec2::new(0.0, v)),
            (center + Vec3::new(-half.x, 0.0, half.y), Vec2::new(0.0, 0.0)),
            (center + Vec3::new(half.x, 0.0, half.y), Vec2::new(u, 0.0)),
            (center + Vec3::new(half.x, 0.0, -half.y), Vec2::new(u, v)),
        ],
        Vec3::Y,
        color,
    )
}

/// Scalar form of [`create_plane`]
#[allow(clippy::too_many_arguments)]
pub fn create_plane_xyz<V: VertexLayout, I: IndexFormat>(
    center_x: f32,
    center_y: f32,
    center_z: f32,
    width: f32,
    depth: f32,
    tex_u: f32,
    tex_v: f32,
    color: Vec4,
) -> Result<MeshData<V, I>, GeometryError> {
    create_plane(
        Vec3::new(center_x, center_y, center_z),
        Vec2::new(width, depth),
        Vec2::new(tex_u, tex_v),
        color,
    )
}
