//! Projection of canonical vertices into caller-defined layouts

use std::marker::PhantomData;
use std::mem::size_of;
use std::ops::Range;

use super::{CanonicalVertex, Semantic, VertexLayout};
use crate::error::GeometryError;

/// One resolved element: copy `src` bytes of the canonical vertex to `dst` in the target
#[derive(Clone, Debug, PartialEq, Eq)]
struct ElementCopy {
    src: Range<usize>,
    dst: usize,
}

/// Copies exactly the declared semantic ranges of a [`CanonicalVertex`] into a `V`.
///
/// Construction resolves `V::INPUT_LAYOUT` once and rejects unknown semantics and
/// elements that would write past the end of `V`. After that, assembling cannot fail.
#[derive(Clone, Debug)]
pub struct VertexAssembler<V: VertexLayout> {
    copies: Vec<ElementCopy>,
    _vertex: PhantomData<fn() -> V>,
}

impl<V: VertexLayout> VertexAssembler<V> {
    /// Resolve the layout of `V`
    pub fn new() -> Result<Self, GeometryError> {
        let size = size_of::<V>();
        let mut copies = Vec::with_capacity(V::INPUT_LAYOUT.len());

        for element in V::INPUT_LAYOUT {
            let semantic = Semantic::from_name(element.semantic_name).ok_or(
                GeometryError::UnknownSemantic {
                    vertex_type: V::NAME,
                    semantic: element.semantic_name,
                },
            )?;

            let width = semantic.width();
            let offset = element.aligned_byte_offset;
            if offset.checked_add(width).is_none_or(|end| end > size) {
                return Err(GeometryError::ElementOutOfBounds {
                    vertex_type: V::NAME,
                    semantic: element.semantic_name,
                    offset,
                    width,
                    size,
                });
            }

            let start = semantic.canonical_offset();
            copies.push(ElementCopy {
                src: start..start + width,
                dst: offset,
            });
        }

        Ok(Self {
            copies,
            _vertex: PhantomData,
        })
    }

    /// Semantics this assembler writes, in declaration order
    pub fn semantics(&self) -> impl Iterator<Item = Semantic> + '_ {
        self.copies.iter().filter_map(|copy| {
            Semantic::ALL
                .into_iter()
                .find(|s| s.canonical_offset() == copy.src.start)
        })
    }

    /// Write the declared fields of `src` into `dst`, leaving every other byte untouched
    pub fn assemble_into(&self, dst: &mut V, src: &CanonicalVertex) {
        let src_bytes = bytemuck::bytes_of(src);
        let dst_bytes = bytemuck::bytes_of_mut(dst);
        for copy in &self.copies {
            let len = copy.src.len();
            dst_bytes[copy.dst..copy.dst + len].copy_from_slice(&src_bytes[copy.src.clone()]);
        }
    }

    /// Build a fresh zeroed `V` holding the declared fields of `src`
    pub fn assemble(&self, src: &CanonicalVertex) -> V {
        let mut vertex = V::zeroed();
        self.assemble_into(&mut vertex, src);
        vertex
    }
}
