//! Serializable shape descriptions
//!
//! Lets callers describe meshes in TOML or JSON (level data, tool presets) and generate them
//! without naming a generator function directly. Parsing works on in-memory text only.

use glam::{Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GeometryError, ShapeConfigError};
use crate::index::{IndexFormat, IndexWidth};
use crate::mesh::MeshData;
use crate::shapes::{self, MIN_LEVELS, MIN_SLICES, WHITE};
use crate::vertex::VertexLayout;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereParams {
    pub radius: f32,
    pub levels: u32,
    pub slices: u32,
    pub color: Vec4,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            levels: 20,
            slices: 20,
            color: WHITE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxParams {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub color: Vec4,
}

impl Default for BoxParams {
    fn default() -> Self {
        Self {
            width: 2.0,
            height: 2.0,
            depth: 2.0,
            color: WHITE,
        }
    }
}

/// Shared by the capped and uncapped cylinder
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CylinderParams {
    pub radius: f32,
    pub height: f32,
    pub slices: u32,
    pub color: Vec4,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            height: 2.0,
            slices: 20,
            color: WHITE,
        }
    }
}

/// Shared by the capped and uncapped cone
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConeParams {
    pub radius: f32,
    pub height: f32,
    pub slices: u32,
    pub color: Vec4,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            height: 2.0,
            slices: 20,
            color: WHITE,
        }
    }
}

/// Screen-space rectangle; the default covers the whole screen
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenQuadParams {
    pub center: Vec2,
    pub scale: Vec2,
    pub color: Vec4,
}

impl Default for ScreenQuadParams {
    fn default() -> Self {
        Self {
            center: Vec2::ZERO,
            scale: Vec2::ONE,
            color: WHITE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaneParams {
    pub center: Vec3,
    pub size: Vec2,
    pub max_tex_coord: Vec2,
    pub color: Vec4,
}

impl Default for PlaneParams {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            size: Vec2::new(10.0, 10.0),
            max_tex_coord: Vec2::ONE,
            color: WHITE,
        }
    }
}

/// One shape and its parameters, tagged by `shape`
///
/// ```toml
/// shape = "sphere"
/// radius = 2.0
/// levels = 16
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeDesc {
    Sphere(SphereParams),
    Box(BoxParams),
    Cylinder(CylinderParams),
    CylinderNoCap(CylinderParams),
    Cone(ConeParams),
    ConeNoCap(ConeParams),
    ScreenQuad(ScreenQuadParams),
    Plane(PlaneParams),
}

/// Generated mesh whose index width was picked at runtime
#[derive(Clone, Debug, PartialEq)]
pub enum IndexedMesh<V> {
    U16(MeshData<V, u16>),
    U32(MeshData<V, u32>),
}

impl<V> IndexedMesh<V> {
    pub fn index_width(&self) -> IndexWidth {
        match self {
            Self::U16(_) => IndexWidth::U16,
            Self::U32(_) => IndexWidth::U32,
        }
    }

    pub fn vertices(&self) -> &[V] {
        match self {
            Self::U16(mesh) => &mesh.vertices,
            Self::U32(mesh) => &mesh.vertices,
        }
    }

    pub fn index_count(&self) -> usize {
        match self {
            Self::U16(mesh) => mesh.indices.len(),
            Self::U32(mesh) => mesh.indices.len(),
        }
    }

    /// Index buffer bytes at the selected width
    pub fn index_bytes(&self) -> &[u8] {
        match self {
            Self::U16(mesh) => mesh.index_bytes(),
            Self::U32(mesh) => mesh.index_bytes(),
        }
    }
}

impl ShapeDesc {
    pub fn from_toml_str(text: &str) -> Result<Self, ShapeConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ShapeConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Config tag of this shape
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sphere(_) => "sphere",
            Self::Box(_) => "box",
            Self::Cylinder(_) => "cylinder",
            Self::CylinderNoCap(_) => "cylinder_no_cap",
            Self::Cone(_) => "cone",
            Self::ConeNoCap(_) => "cone_no_cap",
            Self::ScreenQuad(_) => "screen_quad",
            Self::Plane(_) => "plane",
        }
    }

    /// Closed-form (vertex count, index count), after tessellation clamping
    fn counts(&self) -> (usize, usize) {
        let slices = |s: u32| s.max(MIN_SLICES);
        match self {
            Self::Sphere(p) => shapes::sphere_counts(p.levels.max(MIN_LEVELS), slices(p.slices)),
            Self::Box(_) => shapes::BOX_COUNTS,
            Self::Cylinder(p) => shapes::cylinder_counts(slices(p.slices)),
            Self::CylinderNoCap(p) => shapes::cylinder_no_cap_counts(slices(p.slices)),
            Self::Cone(p) => shapes::cone_counts(slices(p.slices)),
            Self::ConeNoCap(p) => shapes::cone_no_cap_counts(slices(p.slices)),
            Self::ScreenQuad(_) | Self::Plane(_) => shapes::QUAD_COUNTS,
        }
    }

    /// Number of vertices [`generate`](Self::generate) will produce
    pub fn vertex_count(&self) -> usize {
        self.counts().0
    }

    /// Number of indices [`generate`](Self::generate) will produce
    pub fn index_count(&self) -> usize {
        self.counts().1
    }

    /// Generate this shape into vertex type `V` with index type `I`
    pub fn generate<V: VertexLayout, I: IndexFormat>(
        &self,
    ) -> Result<MeshData<V, I>, GeometryError> {
        let mesh = match *self {
            Self::Sphere(p) => shapes::create_sphere(p.radius, p.levels, p.slices, p.color),
            Self::Box(p) => shapes::create_box(p.width, p.height, p.depth, p.color),
            Self::Cylinder(p) => shapes::create_cylinder(p.radius, p.height, p.slices, p.color),
            Self::CylinderNoCap(p) => {
                shapes::create_cylinder_no_cap(p.radius, p.height, p.slices, p.color)
            }
            Self::Cone(p) => shapes::create_cone(p.radius, p.height, p.slices, p.color),
            Self::ConeNoCap(p) => shapes::create_cone_no_cap(p.radius, p.height, p.slices, p.color),
            Self::ScreenQuad(p) => shapes::create_2d_show(p.center, p.scale, p.color),
            Self::Plane(p) => shapes::create_plane(p.center, p.size, p.max_tex_coord, p.color),
        }?;

        debug!(
            "generated {} mesh: {} vertices, {} indices ({:?})",
            self.name(),
            mesh.vertices.len(),
            mesh.indices.len(),
            I::WIDTH
        );
        Ok(mesh)
    }

    /// Generate with the narrowest index width that can address every vertex
    pub fn generate_auto<V: VertexLayout>(&self) -> Result<IndexedMesh<V>, GeometryError> {
        match IndexWidth::for_vertex_count(self.vertex_count()) {
            IndexWidth::U16 => self.generate::<V, u16>().map(IndexedMesh::U16),
            IndexWidth::U32 => self.generate::<V, u32>().map(IndexedMesh::U32),
        }
    }

    /// Generate at an explicitly chosen runtime width
    pub fn generate_with_width<V: VertexLayout>(
        &self,
        width: IndexWidth,
    ) -> Result<IndexedMesh<V>, GeometryError> {
        match width {
            IndexWidth::U16 => self.generate::<V, u16>().map(IndexedMesh::U16),
            IndexWidth::U32 => self.generate::<V, u32>().map(IndexedMesh::U32),
        }
    }
}
