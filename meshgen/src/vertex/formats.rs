//! Stock vertex formats
//!
//! Each format is a tightly packed `#[repr(C)]` record of `f32` arrays and declares its input
//! layout with `offset_of!`, so the declared offsets always match the struct.

use std::mem::offset_of;

use bytemuck::{Pod, Zeroable};

use super::{InputElement, VertexLayout};

/// Position only
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct VertexPos {
    pub pos: [f32; 3],
}

impl VertexLayout for VertexPos {
    const NAME: &'static str = "VertexPos";
    const INPUT_LAYOUT: &'static [InputElement] =
        &[InputElement::new("POSITION", offset_of!(VertexPos, pos))];
}

/// Position + RGBA color (solid-color rendering without lighting)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct VertexPosColor {
    pub pos: [f32; 3],
    pub color: [f32; 4],
}

impl VertexLayout for VertexPosColor {
    const NAME: &'static str = "VertexPosColor";
    const INPUT_LAYOUT: &'static [InputElement] = &[
        InputElement::new("POSITION", offset_of!(VertexPosColor, pos)),
        InputElement::new("COLOR", offset_of!(VertexPosColor, color)),
    ];
}

/// Position + texture coordinate (screen-space quads)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct VertexPosTex {
    pub pos: [f32; 3],
    pub tex: [f32; 2],
}

impl VertexLayout for VertexPosTex {
    const NAME: &'static str = "VertexPosTex";
    const INPUT_LAYOUT: &'static [InputElement] = &[
        InputElement::new("POSITION", offset_of!(VertexPosTex, pos)),
        InputElement::new("TEXCOORD", offset_of!(VertexPosTex, tex)),
    ];
}

/// Position + normal + RGBA color
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct VertexPosNormalColor {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

impl VertexLayout for VertexPosNormalColor {
    const NAME: &'static str = "VertexPosNormalColor";
    const INPUT_LAYOUT: &'static [InputElement] = &[
        InputElement::new("POSITION", offset_of!(VertexPosNormalColor, pos)),
        InputElement::new("NORMAL", offset_of!(VertexPosNormalColor, normal)),
        InputElement::new("COLOR", offset_of!(VertexPosNormalColor, color)),
    ];
}

/// Position + normal + texture coordinate (lit, textured rendering)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct VertexPosNormalTex {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
    pub tex: [f32; 2],
}

impl VertexLayout for VertexPosNormalTex {
    const NAME: &'static str = "VertexPosNormalTex";
    const INPUT_LAYOUT: &'static [InputElement] = &[
        InputElement::new("POSITION", offset_of!(VertexPosNormalTex, pos)),
        InputElement::new("NORMAL", offset_of!(VertexPosNormalTex, normal)),
        InputElement::new("TEXCOORD", offset_of!(VertexPosNormalTex, tex)),
    ];
}

/// Position + normal + tangent + texture coordinate (normal mapping)
///
/// Tangent w holds the bitangent handedness.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct VertexPosNormalTangentTex {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
    pub tangent: [f32; 4],
    pub tex: [f32; 2],
}

impl VertexLayout for VertexPosNormalTangentTex {
    const NAME: &'static str = "VertexPosNormalTangentTex";
    const INPUT_LAYOUT: &'static [InputElement] = &[
        InputElement::new("POSITION", offset_of!(VertexPosNormalTangentTex, pos)),
        InputElement::new("NORMAL", offset_of!(VertexPosNormalTangentTex, normal)),
        InputElement::new("TANGENT", offset_of!(VertexPosNormalTangentTex, tangent)),
        InputElement::new("TEXCOORD", offset_of!(VertexPosNormalTangentTex, tex)),
    ];
}
