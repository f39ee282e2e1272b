//! Layout node backing a declared button bar.

use super::{ButtonContent, DialogButton};
use crate::host::{DialogEnvironment, FocusOwner};
use crate::layout::{DialogButtonsLayout, DialogButtonsMeasurePolicy, DialogButtonsSpec};
use crate::role::ButtonRole;
use crate::state::MaterialDialog;
use crate::text::TextMeasurer;
use matdialogs_ui_graphics::{Dp, Point, Size};
use matdialogs_ui_layout::{Constraints, LayoutId, Measurable, MeasureResult, NodeId, Placeable};
use std::cell::Cell;
use std::rc::Rc;

const BUTTON_MIN_WIDTH: Dp = Dp(64.0);
const BUTTON_MIN_HEIGHT: Dp = Dp(36.0);
const BUTTON_HORIZONTAL_PADDING: Dp = Dp(8.0);
const BUTTON_VERTICAL_PADDING: Dp = Dp(8.0);
const ICON_BUTTON_SIZE: Dp = Dp(48.0);

/// Button bar produced by [`DialogButtons`](super::DialogButtons).
pub struct DialogButtonsNode {
    buttons: Vec<DialogButton>,
    policy: DialogButtonsMeasurePolicy,
    text_measurer: Rc<dyn TextMeasurer>,
    density: f32,
    last_layout: Option<DialogButtonsLayout>,
}

impl DialogButtonsNode {
    pub(crate) fn new(
        env: &DialogEnvironment,
        spec: DialogButtonsSpec,
        buttons: Vec<DialogButton>,
    ) -> Self {
        Self {
            buttons,
            policy: DialogButtonsMeasurePolicy::new(&spec, &env.density),
            text_measurer: Rc::clone(&env.text_measurer),
            density: env.density.density,
            last_layout: None,
        }
    }

    pub fn buttons(&self) -> &[DialogButton] {
        &self.buttons
    }

    pub fn button(&self, id: NodeId) -> Option<&DialogButton> {
        self.buttons.get(id)
    }

    /// Runs a layout pass and remembers it for hit testing.
    pub fn measure(&mut self, constraints: Constraints) -> &DialogButtonsLayout {
        for button in &self.buttons {
            button.position.set(None);
        }
        let measurables: Vec<Box<dyn Measurable>> = self
            .buttons
            .iter()
            .map(|button| -> Box<dyn Measurable> {
                Box::new(ButtonMeasurable {
                    id: button.id,
                    role: button.role,
                    size: self.content_size(&button.content),
                    position: Rc::clone(&button.position),
                })
            })
            .collect();
        self.last_layout
            .insert(self.policy.layout(&measurables, constraints))
    }

    pub fn last_layout(&self) -> Option<&DialogButtonsLayout> {
        self.last_layout.as_ref()
    }

    pub fn last_result(&self) -> Option<&MeasureResult> {
        self.last_layout.as_ref().map(|layout| &layout.result)
    }

    /// Finds the placed button under `point`, if any.
    ///
    /// Bounds are half-open, so a point on the edge shared by two flush
    /// buttons hits the one whose left edge it is.
    pub fn button_at(&self, point: Point) -> Option<&DialogButton> {
        let result = self.last_result()?;
        // Accessibility is placed last and floats over the stack.
        result
            .placements
            .iter()
            .rev()
            .find(|placement| placement.bounds().contains(point))
            .and_then(|placement| self.button(placement.node_id))
    }

    /// Activates the button `id`.
    ///
    /// Returns `false` for unknown ids and for a positive button whose
    /// action is currently disabled.
    pub fn click(
        &self,
        id: NodeId,
        dialog: &mut MaterialDialog,
        focus: &mut dyn FocusOwner,
    ) -> bool {
        let Some(button) = self.button(id) else {
            log::warn!("click on unknown dialog button #{id}");
            return false;
        };
        log::debug!("{:?} dialog button #{id} clicked", button.role);
        match button.role {
            ButtonRole::Positive => {
                dialog.on_positive_click(focus, button.disable_dismiss, || button.invoke())
            }
            ButtonRole::Negative => {
                dialog.on_negative_click(focus, button.disable_dismiss, || button.invoke());
                true
            }
            ButtonRole::Text | ButtonRole::Accessibility => {
                button.invoke();
                true
            }
        }
    }

    /// Hit tests `point` against the last layout and clicks what it finds.
    pub fn click_at(
        &self,
        point: Point,
        dialog: &mut MaterialDialog,
        focus: &mut dyn FocusOwner,
    ) -> bool {
        match self.button_at(point) {
            Some(button) => self.click(button.id, dialog, focus),
            None => false,
        }
    }

    fn content_size(&self, content: &ButtonContent) -> Size {
        match content {
            ButtonContent::Label { text, .. } => {
                let metrics = self.text_measurer.measure(text);
                let width = metrics.width + 2.0 * BUTTON_HORIZONTAL_PADDING.to_px(self.density);
                let height = metrics.height + 2.0 * BUTTON_VERTICAL_PADDING.to_px(self.density);
                Size::new(
                    width.max(BUTTON_MIN_WIDTH.to_px(self.density)),
                    height.max(BUTTON_MIN_HEIGHT.to_px(self.density)),
                )
            }
            ButtonContent::Icon { .. } => {
                let side = ICON_BUTTON_SIZE.to_px(self.density);
                Size::new(side, side)
            }
        }
    }
}

impl std::fmt::Debug for DialogButtonsNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogButtonsNode")
            .field("buttons", &self.buttons)
            .field("policy", &self.policy)
            .field("last_layout", &self.last_layout)
            .finish_non_exhaustive()
    }
}

struct ButtonMeasurable {
    id: NodeId,
    role: ButtonRole,
    size: Size,
    position: Rc<Cell<Option<Point>>>,
}

impl Measurable for ButtonMeasurable {
    fn measure(&self, constraints: Constraints) -> Box<dyn Placeable> {
        let (width, height) = constraints.constrain(self.size.width, self.size.height);
        Box::new(ButtonPlaceable {
            id: self.id,
            size: Size::new(width, height),
            position: Rc::clone(&self.position),
        })
    }

    fn min_intrinsic_width(&self, _height: f32) -> f32 {
        self.size.width
    }

    fn max_intrinsic_width(&self, _height: f32) -> f32 {
        self.size.width
    }

    fn min_intrinsic_height(&self, _width: f32) -> f32 {
        self.size.height
    }

    fn max_intrinsic_height(&self, _width: f32) -> f32 {
        self.size.height
    }

    fn layout_id(&self) -> Option<LayoutId> {
        Some(self.role.layout_id())
    }
}

struct ButtonPlaceable {
    id: NodeId,
    size: Size,
    position: Rc<Cell<Option<Point>>>,
}

impl Placeable for ButtonPlaceable {
    fn place(&self, x: f32, y: f32) {
        self.position.set(Some(Point::new(x, y)));
    }

    fn width(&self) -> f32 {
        self.size.width
    }

    fn height(&self) -> f32 {
        self.size.height
    }

    fn node_id(&self) -> NodeId {
        self.id
    }
}

#[cfg(test)]
#[path = "../tests/node_tests.rs"]
mod tests;
