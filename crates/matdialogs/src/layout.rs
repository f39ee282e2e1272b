//! Adaptive layout for the dialog button bar.
//!
//! Buttons sit in a single right-aligned row while they comfortably fit.
//! Once their combined width passes a fraction of the available width the
//! bar switches to a right-aligned column. The first accessibility button,
//! if any, floats in the bottom-left corner in both modes.

use crate::role::ButtonRole;
use matdialogs_ui_graphics::{Dp, Size};
use matdialogs_ui_layout::{
    Arrangement, Constraints, HorizontalAlignment, LinearArrangement, MeasurePolicy,
    MeasureResult, MeasureScope, Measurable, Placeable, Placement, VerticalAlignment,
};
use smallvec::SmallVec;

/// Tunables for [`DialogButtonsMeasurePolicy`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DialogButtonsSpec {
    /// Vertical gap between stacked buttons in column mode.
    pub inter_button_gap: Dp,
    /// Height of the bar in row mode.
    pub default_height: Dp,
    /// Left inset of the accessibility button.
    pub accessibility_padding: Dp,
    /// Fraction of the available width the buttons may occupy before stacking.
    pub column_threshold: f32,
}

impl DialogButtonsSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inter_button_gap(mut self, gap: Dp) -> Self {
        self.inter_button_gap = gap;
        self
    }

    pub fn default_height(mut self, height: Dp) -> Self {
        self.default_height = height;
        self
    }

    pub fn accessibility_padding(mut self, padding: Dp) -> Self {
        self.accessibility_padding = padding;
        self
    }

    pub fn column_threshold(mut self, threshold: f32) -> Self {
        self.column_threshold = threshold;
        self
    }
}

impl Default for DialogButtonsSpec {
    fn default() -> Self {
        Self {
            inter_button_gap: Dp(12.0),
            default_height: Dp(36.0),
            accessibility_padding: Dp(12.0),
            column_threshold: 0.8,
        }
    }
}

/// Arrangement chosen for one layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Row,
    Column,
}

/// Picks the layout mode. Reaching the threshold exactly still fits in a row.
pub fn choose_layout_mode(total_width: f32, available_width: f32, threshold: f32) -> LayoutMode {
    if total_width > available_width * threshold {
        LayoutMode::Column
    } else {
        LayoutMode::Row
    }
}

/// Outcome of a layout pass, including the chosen mode.
#[derive(Clone, Debug)]
pub struct DialogButtonsLayout {
    pub mode: LayoutMode,
    pub result: MeasureResult,
}

type RoleGroup = SmallVec<[Box<dyn Placeable>; 2]>;

/// Measure policy for the dialog button bar.
///
/// Dp values from the [`DialogButtonsSpec`] are resolved to pixels when the policy is built,
/// so intrinsic queries and measurement agree on the same density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DialogButtonsMeasurePolicy {
    inter_button_gap: f32,
    default_height: f32,
    accessibility_padding: f32,
    column_threshold: f32,
}

impl DialogButtonsMeasurePolicy {
    pub fn new(spec: &DialogButtonsSpec, scope: &dyn MeasureScope) -> Self {
        let density = scope.density();
        Self {
            inter_button_gap: spec.inter_button_gap.to_px(density),
            default_height: spec.default_height.to_px(density),
            accessibility_padding: spec.accessibility_padding.to_px(density),
            column_threshold: spec.column_threshold,
        }
    }

    /// Measures and places every tagged child, reporting the mode it chose.
    pub fn layout(
        &self,
        measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> DialogButtonsLayout {
        let child_constraints = constraints.loosen();
        let mut groups: [RoleGroup; ButtonRole::COUNT] = Default::default();

        for measurable in measurables {
            let Some(role) = measurable.layout_id().and_then(ButtonRole::from_layout_id) else {
                log::warn!(
                    "dialog buttons: skipping child without a button role ({:?})",
                    measurable.layout_id()
                );
                continue;
            };
            groups[role.index()].push(measurable.measure(child_constraints));
        }

        let count: usize = groups.iter().map(|group| group.len()).sum();
        let total_width: f32 = groups.iter().flatten().map(|p| p.width()).sum();
        let total_height: f32 = groups.iter().flatten().map(|p| p.height()).sum();

        // Without a width bound the bar wraps its content and never stacks.
        let (available_width, mode) = if constraints.has_bounded_width() {
            let mode =
                choose_layout_mode(total_width, constraints.max_width, self.column_threshold);
            (constraints.max_width, mode)
        } else {
            let primary_width: f32 = ButtonRole::PRIMARY_ORDER
                .iter()
                .flat_map(|role| groups[role.index()].iter())
                .map(|p| p.width())
                .sum();
            let accessibility_width = groups[ButtonRole::Accessibility.index()]
                .first()
                .map(|p| p.width());
            (self.wrap_width(primary_width, accessibility_width), LayoutMode::Row)
        };

        let content_height = match mode {
            // Accessibility heights are included; that button floats over the stack.
            LayoutMode::Column => {
                (total_height + self.inter_button_gap * count.saturating_sub(1) as f32).max(0.0)
            }
            LayoutMode::Row => self.default_height,
        };
        let (width, height) = constraints.constrain(available_width, content_height);

        log::trace!(
            "dialog buttons: {count} buttons, total width {total_width} of {available_width}, {mode:?} mode, height {height}"
        );

        let primary: SmallVec<[&dyn Placeable; 4]> = ButtonRole::PRIMARY_ORDER
            .iter()
            .flat_map(|role| groups[role.index()].iter().map(|p| p.as_ref()))
            .collect();

        let mut placements = Vec::with_capacity(primary.len() + 1);
        match mode {
            LayoutMode::Row => self.place_row(&primary, width, &mut placements),
            LayoutMode::Column => self.place_column(&primary, width, height, &mut placements),
        }

        let accessibility = &groups[ButtonRole::Accessibility.index()];
        if let Some(first) = accessibility.first() {
            let y = VerticalAlignment::Bottom.align(height, first.height());
            placements.push(Placement::place(first.as_ref(), self.accessibility_padding, y));
            if accessibility.len() > 1 {
                log::debug!(
                    "dialog buttons: {} extra accessibility buttons are not placed",
                    accessibility.len() - 1
                );
            }
        }

        DialogButtonsLayout {
            mode,
            result: MeasureResult::new(Size::new(width, height), placements),
        }
    }

    /// Right to left from the trailing edge, flush against each other.
    fn place_row(&self, primary: &[&dyn Placeable], width: f32, out: &mut Vec<Placement>) {
        let sizes: SmallVec<[f32; 4]> = primary.iter().rev().map(|p| p.width()).collect();
        let mut positions: SmallVec<[f32; 4]> = SmallVec::from_elem(0.0, sizes.len());
        LinearArrangement::End.arrange(width, &sizes, &mut positions);

        for (placeable, x) in primary.iter().zip(positions.iter().rev()) {
            out.push(Placement::place(*placeable, *x, 0.0));
        }
    }

    /// Top to bottom, each button flush with the trailing edge.
    fn place_column(
        &self,
        primary: &[&dyn Placeable],
        width: f32,
        height: f32,
        out: &mut Vec<Placement>,
    ) {
        let sizes: SmallVec<[f32; 4]> = primary.iter().map(|p| p.height()).collect();
        let mut positions: SmallVec<[f32; 4]> = SmallVec::from_elem(0.0, sizes.len());
        LinearArrangement::spaced_by(self.inter_button_gap).arrange(height, &sizes, &mut positions);

        for (placeable, y) in primary.iter().zip(positions) {
            let x = HorizontalAlignment::End.align(width, placeable.width());
            out.push(Placement::place(*placeable, x, y));
        }
    }

    /// Width of a bar that wraps its content: the primary buttons plus the
    /// padded accessibility icon to their left.
    fn wrap_width(&self, primary_width: f32, accessibility_width: Option<f32>) -> f32 {
        primary_width + accessibility_width.map_or(0.0, |width| self.accessibility_padding + width)
    }

    fn intrinsic_width(
        &self,
        measurables: &[Box<dyn Measurable>],
        width_of: impl Fn(&dyn Measurable) -> f32,
    ) -> f32 {
        let mut primary_width = 0.0;
        let mut accessibility_width = None;
        for measurable in measurables {
            match measurable.layout_id().and_then(ButtonRole::from_layout_id) {
                Some(ButtonRole::Accessibility) => {
                    accessibility_width.get_or_insert_with(|| width_of(measurable.as_ref()));
                }
                Some(_) => primary_width += width_of(measurable.as_ref()),
                None => {}
            }
        }
        self.wrap_width(primary_width, accessibility_width)
    }

    fn intrinsic_height(&self, measurables: &[Box<dyn Measurable>], width: f32) -> f32 {
        if !width.is_finite() {
            return self.default_height;
        }
        let tagged = || {
            measurables
                .iter()
                .filter(|m| m.layout_id().and_then(ButtonRole::from_layout_id).is_some())
        };
        let total_width: f32 = tagged().map(|m| m.max_intrinsic_width(f32::INFINITY)).sum();
        match choose_layout_mode(total_width, width, self.column_threshold) {
            LayoutMode::Row => self.default_height,
            LayoutMode::Column => {
                let count = tagged().count();
                let heights: f32 = tagged().map(|m| m.max_intrinsic_height(width)).sum();
                heights + self.inter_button_gap * count.saturating_sub(1) as f32
            }
        }
    }
}

impl MeasurePolicy for DialogButtonsMeasurePolicy {
    fn measure(
        &self,
        measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> MeasureResult {
        self.layout(measurables, constraints).result
    }

    fn min_intrinsic_width(&self, measurables: &[Box<dyn Measurable>], height: f32) -> f32 {
        self.intrinsic_width(measurables, |m| m.min_intrinsic_width(height))
    }

    fn max_intrinsic_width(&self, measurables: &[Box<dyn Measurable>], height: f32) -> f32 {
        self.intrinsic_width(measurables, |m| m.max_intrinsic_width(height))
    }

    fn min_intrinsic_height(&self, measurables: &[Box<dyn Measurable>], width: f32) -> f32 {
        self.intrinsic_height(measurables, width)
    }

    fn max_intrinsic_height(&self, measurables: &[Box<dyn Measurable>], width: f32) -> f32 {
        self.intrinsic_height(measurables, width)
    }

    fn debug_name(&self) -> &str {
        "DialogButtonsMeasurePolicy"
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
