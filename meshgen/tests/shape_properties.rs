//! End-to-end checks through the public API.

use glam::{Vec2, Vec3, Vec4};
use meshgen::*;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("meshgen=debug")
        .with_test_writer()
        .try_init();
}

fn pos(v: &VertexPosNormalTangentTex) -> Vec3 {
    Vec3::from_array(v.pos)
}

#[test]
fn box_has_four_vertices_per_axis_normal() {
    let mesh = create_box::<VertexPosNormalTangentTex, u16>(1.0, 1.0, 1.0, WHITE).unwrap();

    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.indices.len(), 36);
    assert_eq!(mesh.triangle_count(), 12);

    for axis in [
        Vec3::X,
        Vec3::NEG_X,
        Vec3::Y,
        Vec3::NEG_Y,
        Vec3::Z,
        Vec3::NEG_Z,
    ] {
        let count = mesh
            .vertices
            .iter()
            .filter(|v| Vec3::from_array(v.normal) == axis)
            .count();
        assert_eq!(count, 4, "normal {axis}");
    }

    for v in &mesh.vertices {
        assert!(pos(v).abs().max_element() <= 0.5);
    }
}

#[test]
fn cone_apex_copies_do_not_share_normals() {
    let slices = 4;
    let mesh = create_cone_no_cap::<VertexPosNormalTangentTex, u16>(1.0, 1.0, slices, WHITE)
        .unwrap();

    let apexes: Vec<_> = mesh.vertices[..slices as usize].iter().collect();
    for v in &apexes {
        assert_eq!(pos(v), Vec3::new(0.0, 0.5, 0.0));
    }
    for (i, a) in apexes.iter().enumerate() {
        for b in &apexes[i + 1..] {
            assert_ne!(a.normal, b.normal);
        }
    }

    // Each apex copy is used by exactly one triangle
    for i in 0..slices as u16 {
        assert_eq!(mesh.indices.iter().filter(|&&idx| idx == i).count(), 1);
    }
}

#[test]
fn plane_texcoords_tile() {
    let mesh = create_plane::<VertexPosNormalTex, u16>(
        Vec3::ZERO,
        Vec2::new(10.0, 10.0),
        Vec2::new(4.0, 4.0),
        WHITE,
    )
    .unwrap();

    let tex: Vec<[f32; 2]> = mesh.vertices.iter().map(|v| v.tex).collect();
    assert_eq!(tex, vec![[0.0, 4.0], [0.0, 0.0], [4.0, 0.0], [4.0, 4.0]]);
    assert_eq!(mesh.indices, vec![0, 1, 2, 2, 3, 0]);
}

#[test]
fn fullscreen_quad_covers_ndc() {
    let mesh = create_2d_show::<VertexPosTex, u16>(Vec2::ZERO, Vec2::ONE, WHITE).unwrap();

    let positions: Vec<[f32; 3]> = mesh.vertices.iter().map(|v| v.pos).collect();
    assert_eq!(
        positions,
        vec![
            [-1.0, -1.0, 0.0],
            [-1.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
            [1.0, -1.0, 0.0],
        ]
    );
}

#[test]
fn vertex_bytes_match_stride() {
    let mesh = create_cylinder::<VertexPosNormalColor, u32>(1.0, 2.0, 6, WHITE).unwrap();

    let stride = std::mem::size_of::<VertexPosNormalColor>();
    assert_eq!(stride, 40);
    assert_eq!(mesh.vertex_bytes().len(), mesh.vertex_count() * stride);
    assert_eq!(mesh.index_bytes().len(), mesh.indices.len() * 4);
}

#[test]
fn custom_layout_with_reordered_fields() {
    /// Texcoord first, then color; position last
    #[repr(C)]
    #[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
    struct Reordered {
        uv: [f32; 2],
        rgba: [f32; 4],
        xyz: [f32; 3],
    }

    impl VertexLayout for Reordered {
        const NAME: &'static str = "Reordered";
        const INPUT_LAYOUT: &'static [InputElement] = &[
            InputElement::new("TEXCOORD", 0),
            InputElement::new("COLOR", 8),
            InputElement::new("POSITION", 24),
        ];
    }

    let color = Vec4::new(0.25, 0.5, 0.75, 1.0);
    let mesh = create_2d_show::<Reordered, u16>(Vec2::ZERO, Vec2::ONE, color).unwrap();

    assert_eq!(mesh.vertices[0].uv, [0.0, 1.0]);
    assert_eq!(mesh.vertices[0].rgba, color.to_array());
    assert_eq!(mesh.vertices[0].xyz, [-1.0, -1.0, 0.0]);
}

#[test]
fn unknown_semantic_fails_before_generation() {
    #[repr(C)]
    #[derive(Clone, Copy, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
    struct Skinned {
        pos: [f32; 3],
        weights: [f32; 4],
    }

    impl VertexLayout for Skinned {
        const NAME: &'static str = "Skinned";
        const INPUT_LAYOUT: &'static [InputElement] = &[
            InputElement::new("POSITION", 0),
            InputElement::new("BLENDWEIGHT", 12),
        ];
    }

    let err = create_sphere::<Skinned, u16>(1.0, 8, 8, WHITE).unwrap_err();
    assert_eq!(
        err,
        GeometryError::UnknownSemantic {
            vertex_type: "Skinned",
            semantic: "BLENDWEIGHT",
        }
    );
}

#[test]
fn shape_from_toml_generates_mesh() {
    init_logging();

    let desc = ShapeDesc::from_toml_str(
        r#"
        shape = "cylinder_no_cap"
        radius = 0.5
        height = 3.0
        slices = 12
        "#,
    )
    .unwrap();

    let mesh = desc.generate::<VertexPosNormalTex, u16>().unwrap();
    assert_eq!(mesh.vertex_count(), 26);
    assert_eq!(mesh.indices.len(), 72);
    assert!(mesh.vertices.iter().all(|v| v.pos[1].abs() == 1.5));
}

#[test]
fn shape_from_json_defaults() {
    let desc = ShapeDesc::from_json_str(r#"{ "shape": "box" }"#).unwrap();
    assert_eq!(desc, ShapeDesc::Box(BoxParams::default()));

    let mesh = desc.generate_auto::<VertexPos>().unwrap();
    assert_eq!(mesh.index_width(), IndexWidth::U16);
    assert_eq!(mesh.vertices().len(), 24);
}

#[test]
fn index_width_from_runtime_layout() {
    assert_eq!(IndexWidth::from_layout(2, false), Ok(IndexWidth::U16));
    assert_eq!(IndexWidth::from_layout(4, false), Ok(IndexWidth::U32));
    assert_eq!(
        IndexWidth::from_layout(1, false),
        Err(GeometryError::UnsupportedIndexType {
            bytes: 1,
            signed: false
        })
    );
    assert!(IndexWidth::from_layout(4, true).is_err());
}

#[test]
fn generators_are_thread_safe() {
    init_logging();

    let reference = create_sphere::<VertexPosNormalTex, u32>(2.0, 24, 24, WHITE).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| create_sphere::<VertexPosNormalTex, u32>(2.0, 24, 24, WHITE))
            })
            .collect();

        for handle in handles {
            let mesh = handle.join().unwrap().unwrap();
            assert_eq!(mesh, reference);
        }
    });
}
