//! Axis-aligned box

use glam::{Vec2, Vec3, Vec4};

use crate::error::GeometryError;
use crate::index::IndexFormat;
use crate::mesh::{MeshBuilder, MeshData};
use crate::vertex::{CanonicalVertex, VertexLayout};

/// Vertex and index counts for a box: 4 vertices and 2 triangles per face
pub(crate) const BOX_COUNTS: (usize, usize) = (24, 36);

/// One box face: corners in units of the half extents, outward normal, tangent
struct Face {
    corners: [[f32; 3]; 4],
    normal: Vec3,
    tangent: Vec4,
}

const FACES: [Face; 6] = [
    // +X
    Face {
        corners: [[1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0]],
        normal: Vec3::X,
        tangent: Vec4::new(0.0, 0.0, 1.0, 1.0),
    },
    // -X
    Face {
        corners: [[-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0], [-1.0, -1.0, -1.0]],
        normal: Vec3::NEG_X,
        tangent: Vec4::new(0.0, 0.0, -1.0, 1.0),
    },
    // +Y
    Face {
        corners: [[-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0]],
        normal: Vec3::Y,
        tangent: Vec4::new(1.0, 0.0, 0.0, 1.0),
    },
    // -Y
    Face {
        corners: [[1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0], [-1.0, -1.0, -1.0]],
        normal: Vec3::NEG_Y,
        tangent: Vec4::new(-1.0, 0.0, 0.0, 1.0),
    },
    // +Z
    Face {
        corners: [[1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, -1.0, 1.0]],
        normal: Vec3::Z,
        tangent: Vec4::new(-1.0, 0.0, 0.0, 1.0),
    },
    // -Z
    Face {
        corners: [[-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0], [1.0, -1.0, -1.0]],
        normal: Vec3::NEG_Z,
        tangent: Vec4::new(1.0, 0.0, 0.0, 1.0),
    },
];

/// Each face maps its quad onto the whole `[0,1]²` texture
const FACE_TEXCOORDS: [Vec2; 4] = [
    Vec2::new(0.0, 1.0),
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
];

/// Generate a box centered at the origin
///
/// # Arguments
/// * `width` - Extent along X
/// * `height` - Extent along Y
/// * `depth` - Extent along Z
/// * `color` - Uniform vertex color
///
/// # Returns
/// 24 vertices (4 per face, faces in order +X, -X, +Y, -Y, +Z, -Z) and 36 indices.
/// Faces do not share vertices, so every normal is the flat face normal.
pub fn create_box<V: VertexLayout, I: IndexFormat>(
    width: f32,
    height: f32,
    depth: f32,
    color: Vec4,
) -> Result<MeshData<V, I>, GeometryError> {
    let (vertex_count, index_count) = BOX_COUNTS;
    let mut mesh = MeshBuilder::<V, I>::with_capacity(vertex_count, index_count)?;

    let half = Vec3::new(width, height, depth) / 2.0;

    for face in &FACES {
        let base = mesh.next_index();
        for (corner, texcoord) in face.corners.iter().zip(FACE_TEXCOORDS) {
            mesh.add_vertex(CanonicalVertex::new(
                Vec3::from_array(*corner) * half,
                face.normal,
                face.tangent,
                color,
                texcoord,
            ));
        }

        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base + 2, base + 3, base);
    }

    Ok(mesh.finish())
}
