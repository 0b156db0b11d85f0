//! Procedural mesh generation
//!
//! Builds indexed triangle lists for common primitives and writes them straight into the
//! caller's vertex type. Generators share one canonical attribute set (position, normal,
//! tangent, color, texcoord); each vertex type picks the subset it stores through
//! [`VertexLayout`].
//!
//! # Modules
//!
//! - [`shapes`] - Sphere, box, cylinder, cone and quad generators
//! - [`vertex`] - Canonical vertex, layout declarations, stock vertex formats
//! - [`mesh`] - Generated mesh container
//! - [`index`] - Supported index widths
//! - [`params`] - Serializable shape descriptions (TOML / JSON)
//!
//! # Example
//!
//! ```
//! use meshgen::{VertexPosNormalTex, WHITE, create_sphere};
//!
//! let mesh = create_sphere::<VertexPosNormalTex, u16>(1.0, 16, 32, WHITE).unwrap();
//! assert_eq!(mesh.vertices.len(), 2 + 15 * 33);
//! assert!(mesh.is_valid());
//! ```

pub mod error;
pub mod index;
pub mod mesh;
pub mod params;
pub mod shapes;
pub mod vertex;

pub use error::{GeometryError, ShapeConfigError};
pub use index::{IndexFormat, IndexWidth};
pub use mesh::MeshData;
pub use params::{
    BoxParams, ConeParams, CylinderParams, IndexedMesh, PlaneParams, ScreenQuadParams, ShapeDesc,
    SphereParams,
};
pub use shapes::{
    MIN_LEVELS, MIN_SLICES, WHITE, create_2d_show, create_2d_show_xy, create_box, create_cone,
    create_cone_no_cap, create_cylinder, create_cylinder_no_cap, create_plane, create_plane_xyz,
    create_sphere,
};
pub use vertex::{
    CanonicalVertex, InputElement, Semantic, VertexAssembler, VertexLayout, VertexPos,
    VertexPosColor, VertexPosNormalColor, VertexPosNormalTangentTex, VertexPosNormalTex,
    VertexPosTex,
};
