//! Core layout traits and types shared by dialog widgets.

use crate::constraints::Constraints;
use matdialogs_ui_graphics::{Point, Rect, Size};

/// Identifier of a layout node inside its parent.
pub type NodeId = usize;

/// Typed tag a child exposes so its parent policy can tell children apart
/// without inspecting their content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayoutId(pub &'static str);

/// Object capable of measuring a layout child and exposing intrinsic sizes.
pub trait Measurable {
    /// Measures the child with the provided constraints, returning a [`Placeable`].
    fn measure(&self, constraints: Constraints) -> Box<dyn Placeable>;

    /// Returns the minimum width achievable for the given height.
    fn min_intrinsic_width(&self, height: f32) -> f32;

    /// Returns the maximum width achievable for the given height.
    fn max_intrinsic_width(&self, height: f32) -> f32;

    /// Returns the minimum height achievable for the given width.
    fn min_intrinsic_height(&self, width: f32) -> f32;

    /// Returns the maximum height achievable for the given width.
    fn max_intrinsic_height(&self, width: f32) -> f32;

    /// Returns the layout id tag attached to this child, if any.
    fn layout_id(&self) -> Option<LayoutId> {
        None
    }
}

/// Result of running a measurement pass for a single child.
pub trait Placeable {
    /// Places the child at the provided coordinates relative to its parent.
    fn place(&self, x: f32, y: f32);

    /// Returns the measured width of the child.
    fn width(&self) -> f32;

    /// Returns the measured height of the child.
    fn height(&self) -> f32;

    /// Returns the identifier for the underlying layout node.
    fn node_id(&self) -> NodeId;
}

/// Scope for measurement operations.
pub trait MeasureScope {
    /// Returns the current density for converting Dp to pixels.
    fn density(&self) -> f32 {
        1.0
    }
}

/// Plain [`MeasureScope`] backed by a fixed density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    pub density: f32,
}

impl Density {
    pub const fn new(density: f32) -> Self {
        Self { density }
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl MeasureScope for Density {
    fn density(&self) -> f32 {
        self.density
    }
}

/// Policy responsible for measuring and placing children.
pub trait MeasurePolicy {
    /// Runs the measurement pass with the provided children and constraints.
    fn measure(
        &self,
        measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> MeasureResult;

    /// Computes the minimum intrinsic width of this policy.
    fn min_intrinsic_width(&self, measurables: &[Box<dyn Measurable>], height: f32) -> f32;

    /// Computes the maximum intrinsic width of this policy.
    fn max_intrinsic_width(&self, measurables: &[Box<dyn Measurable>], height: f32) -> f32;

    /// Computes the minimum intrinsic height of this policy.
    fn min_intrinsic_height(&self, measurables: &[Box<dyn Measurable>], width: f32) -> f32;

    /// Computes the maximum intrinsic height of this policy.
    fn max_intrinsic_height(&self, measurables: &[Box<dyn Measurable>], width: f32) -> f32;

    fn debug_name(&self) -> &str {
        "MeasurePolicy"
    }
}

/// Result of a measurement operation.
#[derive(Clone, Debug)]
pub struct MeasureResult {
    pub size: Size,
    pub placements: Vec<Placement>,
}

impl MeasureResult {
    pub fn new(size: Size, placements: Vec<Placement>) -> Self {
        Self { size, placements }
    }

    /// Looks up the placement of a child by node id.
    pub fn placement_of(&self, node_id: NodeId) -> Option<&Placement> {
        self.placements.iter().find(|p| p.node_id == node_id)
    }
}

/// Placement information for a measured child.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub node_id: NodeId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Placement {
    pub fn new(node_id: NodeId, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            node_id,
            x,
            y,
            width,
            height,
        }
    }

    /// Places `placeable` at `(x, y)` and records where it went.
    pub fn place(placeable: &dyn Placeable, x: f32, y: f32) -> Self {
        placeable.place(x, y);
        Self::new(placeable.node_id(), x, y, placeable.width(), placeable.height())
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(
            Point::new(self.x, self.y),
            Size::new(self.width, self.height),
        )
    }
}
