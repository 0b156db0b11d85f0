//! Generated mesh container

use crate::error::GeometryError;
use crate::index::{IndexFormat, check_capacity};
use crate::vertex::{CanonicalVertex, VertexAssembler, VertexLayout};

/// Vertex and index buffers of one generated shape.
///
/// `indices` is a triangle list (3 per triangle); every index addresses `vertices`.
/// Vertex order is significant: it defines the index values.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshData<V, I = u16> {
    pub vertices: Vec<V>,
    pub indices: Vec<I>,
}

impl<V, I: IndexFormat> MeshData<V, I> {
    /// Create empty mesh data
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True when the index list is a well-formed triangle list over `vertices`
    pub fn is_valid(&self) -> bool {
        self.indices.len() % 3 == 0
            && self
                .indices
                .iter()
                .all(|&i| i.to_usize() < self.vertices.len())
    }

    /// Index buffer bytes, ready for upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

impl<V: VertexLayout, I: IndexFormat> MeshData<V, I> {
    /// Vertex buffer bytes, ready for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl<V, I: IndexFormat> Default for MeshData<V, I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fills a [`MeshData`] whose final size is known up front.
///
/// Creation validates the vertex layout and the index capacity, so the generators
/// themselves never fail.
pub(crate) struct MeshBuilder<V: VertexLayout, I: IndexFormat> {
    assembler: VertexAssembler<V>,
    mesh: MeshData<V, I>,
    vertex_count: usize,
    index_count: usize,
}

impl<V: VertexLayout, I: IndexFormat> MeshBuilder<V, I> {
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Result<Self, GeometryError> {
        check_capacity::<I>(vertex_count)?;
        let assembler = VertexAssembler::new()?;
        Ok(Self {
            assembler,
            mesh: MeshData {
                vertices: Vec::with_capacity(vertex_count),
                indices: Vec::with_capacity(index_count),
            },
            vertex_count,
            index_count,
        })
    }

    /// Add a vertex and return its index
    pub fn add_vertex(&mut self, vertex: CanonicalVertex) -> u32 {
        let index = self.mesh.vertices.len() as u32;
        self.mesh.vertices.push(self.assembler.assemble(&vertex));
        index
    }

    /// Add a triangle using three vertex indices
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.mesh.indices.push(I::from_u32(i0));
        self.mesh.indices.push(I::from_u32(i1));
        self.mesh.indices.push(I::from_u32(i2));
    }

    /// Index the next added vertex will get
    pub fn next_index(&self) -> u32 {
        self.mesh.vertices.len() as u32
    }

    pub fn finish(self) -> MeshData<V, I> {
        debug_assert_eq!(self.mesh.vertices.len(), self.vertex_count);
        debug_assert_eq!(self.mesh.indices.len(), self.index_count);
        self.mesh
    }
}
