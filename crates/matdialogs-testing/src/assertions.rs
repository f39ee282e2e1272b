//! Assertion helpers for layout results.

use matdialogs::LayoutMode;
use matdialogs_ui_graphics::Rect;
use matdialogs_ui_layout::{MeasureResult, NodeId};

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Bounds of a placed child, panicking with context when it was not placed.
pub fn placed_bounds(result: &MeasureResult, node_id: NodeId) -> Rect {
    match result.placement_of(node_id) {
        Some(placement) => placement.bounds(),
        None => panic!(
            "node {} was not placed; placements: {:?}",
            node_id, result.placements
        ),
    }
}

/// Assert the order in which children were placed.
pub fn assert_placement_order(result: &MeasureResult, expected: &[NodeId], msg: &str) {
    let actual: Vec<NodeId> = result.placements.iter().map(|p| p.node_id).collect();
    assert_eq!(actual, expected, "{}: placement order", msg);
}

/// Assert that consecutive placements touch horizontally, right to left.
pub fn assert_flush_right_to_left(result: &MeasureResult, nodes: &[NodeId], msg: &str) {
    for pair in nodes.windows(2) {
        let right = placed_bounds(result, pair[0]);
        let left = placed_bounds(result, pair[1]);
        assert_approx_eq(left.right(), right.x, 0.001, &format!("{} - gap {:?}", msg, pair));
    }
}

pub fn assert_mode(actual: LayoutMode, expected: LayoutMode, msg: &str) {
    assert_eq!(actual, expected, "{}: layout mode", msg);
}
