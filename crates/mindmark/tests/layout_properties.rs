//! Geometric properties of the radial layout

use std::collections::HashMap;
use std::f64::consts::PI;

use mindmark::parse;
use mindmark::prelude::*;

const EPS: f64 = 1e-9;

fn layout(input: &str) -> (MindmapDatabase, RadialLayoutResult) {
    let db = parse(input).unwrap();
    let result = RadialLayoutAlgorithm::new(3840, 2160).layout(&db).unwrap();
    (db, result)
}

fn parents(result: &RadialLayoutResult) -> HashMap<NodeId, NodeId> {
    result.edges.iter().map(|e| (e.child, e.parent)).collect()
}

const TREE: &str = "# Root
## Alpha
- a1
  - a1x
    - a1xy
  - a1z
- a2
## Beta
- b1
## Gamma
### Gamma child
- g1
- g2
- g3";

#[test]
fn test_every_node_positioned_once() {
    let (db, result) = layout(TREE);
    assert_eq!(result.nodes.len(), db.node_count());
    assert_eq!(result.edges.len(), db.node_count() - 1);

    let mut seen: Vec<NodeId> = result.nodes.iter().map(|n| n.id).collect();
    seen.sort_by_key(|id| id.index());
    seen.dedup();
    assert_eq!(seen.len(), result.nodes.len());
}

#[test]
fn test_depths_match_tree() {
    let (db, result) = layout(TREE);
    for node in &result.nodes {
        assert_eq!(Some(node.depth), db.depth_of(node.id));
    }
}

#[test]
fn test_child_angles_partition_parent_sector() {
    let (db, result) = layout(TREE);

    for parent in &result.nodes {
        let children = db.children(parent.id);
        if children.is_empty() {
            continue;
        }
        let (a0, a1) = parent.sector;
        let step = (a1 - a0) / children.len() as f64;
        let angles: Vec<f64> = children
            .iter()
            .map(|&c| result.node(c).unwrap().angle)
            .collect();

        for (i, &angle) in angles.iter().enumerate() {
            assert!(angle > a0 && angle < a1, "angle {} outside ({}, {})", angle, a0, a1);
            assert!((angle - (a0 + step * (i as f64 + 0.5))).abs() < EPS);
        }
        for pair in angles.windows(2) {
            assert!(pair[1] > pair[0]);
            assert!((pair[1] - pair[0] - step).abs() < EPS);
        }
    }
}

#[test]
fn test_child_sector_is_ninety_percent_of_step() {
    let (db, result) = layout("# R\n## A\n## B\n## C");
    let step = 2.0 * PI / 3.0;
    for &id in db.main_branches() {
        let node = result.node(id).unwrap();
        let (s0, s1) = node.sector;
        assert!((s1 - s0 - step * 0.9).abs() < EPS);
        assert!(((s0 + s1) / 2.0 - node.angle).abs() < EPS);
    }
}

#[test]
fn test_children_sit_at_parent_ring_radius() {
    let (_, result) = layout(TREE);
    let parents = parents(&result);

    for node in result.nodes.iter().skip(1) {
        let parent = result.node(parents[&node.id]).unwrap();
        assert!((node.radius - parent.child_radius).abs() < EPS);
        assert!((parent.position.distance_to(node.position) - node.radius).abs() < 1e-6);
    }
}

#[test]
fn test_ring_radius_shrinks_with_depth() {
    let (_, result) = layout(TREE);
    let r0 = 2160.0 * 0.28;
    let expected = [0.0, r0, r0 * 0.7, r0 * 0.49, r0 * 0.294];

    for node in &result.nodes {
        assert!(
            (node.radius - expected[node.depth]).abs() < 1e-6,
            "depth {} placed at {}",
            node.depth,
            node.radius
        );
    }
    for pair in expected[1..].windows(2) {
        assert!(pair[1] < pair[0]);
    }
}

#[test]
fn test_radius_decay_factors() {
    assert_eq!(RadialLayoutAlgorithm::radius_decay(0), 0.7);
    assert_eq!(RadialLayoutAlgorithm::radius_decay(1), 0.7);
    assert_eq!(RadialLayoutAlgorithm::radius_decay(2), 0.6);
    assert_eq!(RadialLayoutAlgorithm::radius_decay(5), 0.6);
}

#[test]
fn test_descendants_inherit_branch_color() {
    let (_, result) = layout(TREE);
    let parents = parents(&result);

    for node in &result.nodes {
        if node.depth >= 2 {
            let parent = result.node(parents[&node.id]).unwrap();
            assert_eq!(node.color, parent.color);
        }
    }
}

#[test]
fn test_branch_colors_distinct_within_palette() {
    let (db, result) = layout(TREE);
    let colors: Vec<&str> = db
        .main_branches()
        .iter()
        .map(|&id| result.node(id).unwrap().color.as_str())
        .collect();
    assert_eq!(colors, ["#6366f1", "#8b5cf6", "#ec4899"]);
    assert_eq!(result.root().unwrap().color, "#ffffff");
}

#[test]
fn test_palette_wraps_after_ten_branches() {
    let input: String = std::iter::once("# Hub".to_string())
        .chain((0..12).map(|i| format!("- b{}", i)))
        .collect::<Vec<_>>()
        .join("\n");
    let (db, result) = layout(&input);
    let branches = db.main_branches();
    let color = |i: usize| result.node(branches[i]).unwrap().color.clone();

    assert_eq!(color(10), color(0));
    assert_eq!(color(11), color(1));
    let first_ten: std::collections::HashSet<String> = (0..10).map(color).collect();
    assert_eq!(first_ten.len(), 10);
}

#[test]
fn test_custom_palette() {
    let db = parse("# R\n- a\n- b\n- c").unwrap();
    let config = RenderConfig::new(800, 800).with_palette("red, blue".parse().unwrap());
    let result = RadialLayoutAlgorithm::with_config(&config).layout(&db).unwrap();
    let colors: Vec<&str> = db
        .main_branches()
        .iter()
        .map(|&id| result.node(id).unwrap().color.as_str())
        .collect();
    assert_eq!(colors, ["red", "blue", "red"]);
}

#[test]
fn test_root_centered_on_canvas() {
    let db = parse("# A\n# B").unwrap();
    let result = RadialLayoutAlgorithm::new(1000, 400).layout(&db).unwrap();
    let root = result.root().unwrap();
    assert_eq!(root.position, Point::new(500.0, 200.0));
    assert_eq!(root.sector, (-PI, PI));
    assert!((root.child_radius - 112.0).abs() < EPS);
}

#[test]
fn test_layout_order_is_pre_order() {
    let (db, result) = layout(TREE);
    let ids: Vec<NodeId> = result.nodes.iter().map(|n| n.id).collect();
    let expected: Vec<NodeId> = db.node_ids().collect();
    assert_eq!(ids, expected);
}
