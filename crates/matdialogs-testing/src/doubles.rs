//! Fake host services and measurables.

use matdialogs::{ButtonRole, FocusOwner, StringRes, StringResolver};
use matdialogs_ui_graphics::Point;
use matdialogs_ui_layout::{Constraints, LayoutId, Measurable, NodeId, Placeable};
use rustc_hash::FxHashMap;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Measurable with a fixed size that remembers where it was placed.
pub struct FixedMeasurable {
    width: f32,
    height: f32,
    node_id: NodeId,
    layout_id: Option<LayoutId>,
    placed_at: Rc<Cell<Option<Point>>>,
}

impl FixedMeasurable {
    pub fn new(role: ButtonRole, width: f32, height: f32, node_id: NodeId) -> Self {
        Self {
            width,
            height,
            node_id,
            layout_id: Some(role.layout_id()),
            placed_at: Rc::new(Cell::new(None)),
        }
    }

    pub fn boxed(
        role: ButtonRole,
        width: f32,
        height: f32,
        node_id: NodeId,
    ) -> Box<dyn Measurable> {
        Box::new(Self::new(role, width, height, node_id))
    }

    /// Handle that reads the last placement after the measurable is boxed.
    pub fn placement_handle(&self) -> Rc<Cell<Option<Point>>> {
        Rc::clone(&self.placed_at)
    }
}

impl Measurable for FixedMeasurable {
    fn measure(&self, constraints: Constraints) -> Box<dyn Placeable> {
        let (width, height) = constraints.constrain(self.width, self.height);
        Box::new(RecordingPlaceable {
            width,
            height,
            node_id: self.node_id,
            placed_at: Rc::clone(&self.placed_at),
        })
    }

    fn min_intrinsic_width(&self, _height: f32) -> f32 {
        self.width
    }

    fn max_intrinsic_width(&self, _height: f32) -> f32 {
        self.width
    }

    fn min_intrinsic_height(&self, _width: f32) -> f32 {
        self.height
    }

    fn max_intrinsic_height(&self, _width: f32) -> f32 {
        self.height
    }

    fn layout_id(&self) -> Option<LayoutId> {
        self.layout_id
    }
}

struct RecordingPlaceable {
    width: f32,
    height: f32,
    node_id: NodeId,
    placed_at: Rc<Cell<Option<Point>>>,
}

impl Placeable for RecordingPlaceable {
    fn place(&self, x: f32, y: f32) {
        self.placed_at.set(Some(Point::new(x, y)));
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn node_id(&self) -> NodeId {
        self.node_id
    }
}

/// Focus owner that counts how often focus was released.
#[derive(Debug, Default)]
pub struct RecordingFocusOwner {
    pub cleared: usize,
}

impl FocusOwner for RecordingFocusOwner {
    fn clear_focus(&mut self) {
        self.cleared += 1;
    }
}

/// String resolver backed by an in-memory table.
#[derive(Debug, Default)]
pub struct MapStringResolver {
    strings: FxHashMap<StringRes, String>,
}

impl MapStringResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, res: StringRes, text: impl Into<String>) -> Self {
        self.strings.insert(res, text.into());
        self
    }
}

impl StringResolver for MapStringResolver {
    fn resolve(&self, res: StringRes) -> String {
        self.strings.get(&res).cloned().unwrap_or_default()
    }
}

/// Shared log of named events, handy for checking callback order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<&'static str>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closure that appends `name` every time it runs.
    pub fn recorder(&self, name: &'static str) -> impl FnMut() + 'static {
        let events = Rc::clone(&self.events);
        move || events.borrow_mut().push(name)
    }

    pub fn events(&self) -> Vec<&'static str> {
        self.events.borrow().clone()
    }
}
