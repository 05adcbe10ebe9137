use super::*;

#[test]
fn defaults_are_valid() {
    let cfg = SceneConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.canvas_size, 400);
    assert_eq!(cfg.point_size, 12);
    assert_eq!(cfg.subdivision, Subdivision::Truncate);
}

#[test]
fn partial_json_fills_defaults() {
    let cfg =
        SceneConfig::from_reader(r#"{ "canvas_size": 64, "subdivision": "distribute" }"#.as_bytes())
            .unwrap();
    assert_eq!(cfg.canvas_size, 64);
    assert_eq!(cfg.subdivision, Subdivision::Distribute);
    assert_eq!(cfg.level_spacing, 50);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = SceneConfig::from_reader(r#"{ "canvas": 64 }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, TreeframesError::Validation(_)));
}

#[test]
fn validate_rejects_bad_geometry() {
    for cfg in [
        SceneConfig {
            canvas_size: 0,
            ..SceneConfig::default()
        },
        SceneConfig {
            point_size: 0,
            ..SceneConfig::default()
        },
        SceneConfig {
            canvas_size: 8,
            point_size: 12,
            ..SceneConfig::default()
        },
        SceneConfig {
            frame_delay: 0,
            ..SceneConfig::default()
        },
    ] {
        assert!(cfg.validate().is_err(), "{cfg:?}");
    }
}

#[test]
fn palette_expands_to_opaque_rgba() {
    let p = Palette::default();
    assert_eq!(p.rgba(BACKGROUND), [255, 255, 255, 255]);
    assert_eq!(p.rgba(LINE), [0, 0, 0, 255]);
    assert_eq!(p.rgba(VISITED), [0, 0, 255, 255]);
    assert_eq!(p.rgba(9), [255, 255, 255, 255]);
}

#[test]
fn validate_rejects_rows_outside_the_canvas() {
    let far_root = SceneConfig {
        root_offset: u32::MAX,
        ..SceneConfig::default()
    };
    assert!(matches!(
        far_root.validate(),
        Err(TreeframesError::Validation(_))
    ));

    let root_on_edge = SceneConfig {
        root_offset: 400,
        ..SceneConfig::default()
    };
    assert!(root_on_edge.validate().is_err());

    let huge_spacing = SceneConfig {
        level_spacing: u32::MAX,
        ..SceneConfig::default()
    };
    assert!(matches!(
        huge_spacing.validate(),
        Err(TreeframesError::Validation(_))
    ));
}

#[test]
fn deep_tree_at_geometry_limits_renders_clipped() {
    use crate::foundation::core::NodeId;
    use crate::graph::store::GraphStore;
    use crate::traverse::driver::{TraversalMode, run_traversal};

    let cfg = SceneConfig {
        canvas_size: 32,
        point_size: 4,
        root_offset: 31,
        level_spacing: 32,
        ..SceneConfig::default()
    };
    cfg.validate().unwrap();

    // Every level below the root lands off-canvas.
    let mut g = GraphStore::from_edges((0..6).map(|i| (NodeId(i), NodeId(i + 1))));
    let anim = run_traversal(&mut g, TraversalMode::Dfs, NodeId(0), &cfg).unwrap();
    assert_eq!(anim.len(), 7);
    let last = anim.frames().last().unwrap().canvas();
    assert_eq!(last.pixel(14, 29), Some(VISITED));
}
