// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interactive chart: selection state, label clicks, hover and animation frames.

use kurbo::Point;
use scatterviz_charts::{HeuristicTextMeasurer, TextMeasurer};
use scatterviz_core::{Animator, Mark, MarkDiff, MarkPayload, Scene, TransitionSpec};
use scatterviz_data::Dataset;

use crate::chart::{self, ChartScales};
use crate::config::ScatterConfig;
use crate::selection::{AxisField, Selection};
use crate::svg;
use crate::tooltip::{PointerEvent, PointerTracker, Tooltip, TooltipContent};

/// Result of a label click.
#[derive(Debug)]
pub enum ClickOutcome {
    /// The clicked label was already active; nothing was re-rendered.
    Unchanged,
    /// The selection changed; these diffs were handed to the animator.
    Changed {
        /// Enter/update/exit diffs produced by the re-render.
        diffs: Vec<MarkDiff>,
    },
}

impl ClickOutcome {
    /// Whether the click changed the selection.
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// Owns the dataset, the selection and everything derived from it.
///
/// Time is passed in by the host (milliseconds on any monotonic clock). Clicks run to
/// completion: by the time [`Controller::click`] returns, the scene holds the new target marks
/// and the animator has started tweening towards them.
pub struct Controller {
    dataset: Dataset,
    config: ScatterConfig,
    selection: Selection,
    scales: ChartScales,
    scene: Scene,
    animator: Animator,
    tooltip: Tooltip,
    pointer: PointerTracker,
    measurer: Box<dyn TextMeasurer>,
}

impl core::fmt::Debug for Controller {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("rows", &self.dataset.len())
            .field("config", &self.config)
            .field("selection", &self.selection)
            .field("scales", &self.scales)
            .field("marks", &self.scene.len())
            .field("animator", &self.animator)
            .field("tooltip", &self.tooltip)
            .field("pointer", &self.pointer)
            .finish_non_exhaustive()
    }
}

impl Controller {
    /// Creates a controller showing the default selection.
    pub fn new(dataset: Dataset, config: ScatterConfig) -> Self {
        Self::with_selection(dataset, config, Selection::default())
    }

    /// Creates a controller showing `selection`. The first render is not animated.
    pub fn with_selection(dataset: Dataset, config: ScatterConfig, selection: Selection) -> Self {
        let scales = ChartScales::build(&dataset, &config, selection);
        let mut scene = Scene::new();
        let diffs = scene.tick(chart::render(&dataset, &config, selection, &scales));
        let mut animator = Animator::new(TransitionSpec::new(config.transition_ms));
        animator.apply_immediately(&diffs);
        tracing::info!(
            rows = dataset.len(),
            marks = scene.len(),
            x = %selection.x.field(),
            y = %selection.y.field(),
            "chart initialized"
        );
        Self {
            tooltip: Tooltip::new(selection, config.tooltip_offset),
            dataset,
            config,
            selection,
            scales,
            scene,
            animator,
            pointer: PointerTracker::default(),
            measurer: Box::new(HeuristicTextMeasurer),
        }
    }

    /// Replaces the text measurer used to hit-test option labels.
    pub fn with_measurer(mut self, measurer: Box<dyn TextMeasurer>) -> Self {
        self.measurer = measurer;
        self
    }

    /// The loaded data.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The configuration.
    pub fn config(&self) -> &ScatterConfig {
        &self.config
    }

    /// The current selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The scales of the current selection.
    pub fn scales(&self) -> &ChartScales {
        &self.scales
    }

    /// The target marks (where every transition ends).
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The tooltip.
    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Handles a click on the option label `choice` at time `now_ms`.
    ///
    /// Clicking the active label does nothing. Otherwise only the clicked axis changes: its
    /// scale is rebuilt, all marks are re-rendered against both scales, the tooltip is rebound
    /// and the option labels are restyled.
    pub fn click(&mut self, choice: AxisField, now_ms: f64) -> ClickOutcome {
        if self.selection.is_active(choice) {
            tracing::debug!(axis = %choice.axis(), field = %choice.field(), "active label clicked");
            return ClickOutcome::Unchanged;
        }
        self.selection = self.selection.with(choice);
        self.scales
            .rebuild(&self.dataset, &self.config, self.selection, choice.axis());
        let marks = chart::render(&self.dataset, &self.config, self.selection, &self.scales);
        let diffs = self.scene.tick(marks);
        self.animator.apply_diffs(&diffs, now_ms);
        self.tooltip.bind(self.selection);
        tracing::info!(
            axis = %choice.axis(),
            field = %choice.field(),
            diffs = diffs.len(),
            "selection changed"
        );
        ClickOutcome::Changed { diffs }
    }

    /// Handles a click at `point` (chart-group coordinates); `None` if no label was hit.
    pub fn click_at(&mut self, point: Point, now_ms: f64) -> Option<ClickOutcome> {
        let choice = chart::label_at(&self.config, self.selection, point, &*self.measurer)?;
        Some(self.click(choice, now_ms))
    }

    /// Handles pointer movement to `point` (chart-group coordinates) at `now_ms`.
    ///
    /// Entering a marker shows its tooltip, leaving it hides the tooltip. Returns the visible
    /// tooltip, if any.
    pub fn pointer_move(&mut self, point: Point, now_ms: f64) -> Option<&TooltipContent> {
        let frame = self.animator.frame(now_ms);
        let hit = chart::row_at(&frame, point);
        for event in self.pointer.update(hit) {
            match event {
                PointerEvent::Leave(row) => {
                    tracing::trace!(row, "pointer left marker");
                    self.tooltip.hide();
                }
                PointerEvent::Enter(row) => {
                    let (Some(data), Some(anchor)) = (self.dataset.row(row), marker_top(&frame, row))
                    else {
                        continue;
                    };
                    tracing::trace!(row, state = %data.state, "pointer entered marker");
                    self.tooltip.show(row, data, anchor);
                }
            }
        }
        self.tooltip.content()
    }

    /// Shows the tooltip of row `row` at `now_ms`, whether or not another marker covers it.
    ///
    /// Returns `None` if the row does not exist or has no marker (a non-finite value).
    pub fn show_tooltip_for(&mut self, row: usize, now_ms: f64) -> Option<&TooltipContent> {
        let frame = self.animator.frame(now_ms);
        let anchor = marker_top(&frame, row)?;
        let data = self.dataset.row(row)?;
        Some(self.tooltip.show(row, data, anchor))
    }

    /// Hides the tooltip. Hover state is kept, so the next marker entered shows it again.
    pub fn hide_tooltip(&mut self) {
        self.tooltip.hide();
    }

    /// Handles the pointer leaving the chart.
    pub fn pointer_leave(&mut self) {
        if !self.pointer.update(None).is_empty() {
            self.tooltip.hide();
        }
    }

    /// Whether any transition is still running at `now_ms`.
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.animator.is_animating(now_ms)
    }

    /// Marks as displayed at `now_ms`, back to front.
    pub fn frame(&mut self, now_ms: f64) -> Vec<Mark> {
        self.animator.frame(now_ms)
    }

    /// The frame at `now_ms` serialized as SVG.
    pub fn svg(&mut self, now_ms: f64) -> String {
        let frame = self.frame(now_ms);
        svg::to_svg_string(&frame, &self.config)
    }
}

/// Top-center of the marker of `row`, where the tooltip is anchored.
fn marker_top(frame: &[Mark], row: usize) -> Option<Point> {
    let row = row.to_string();
    frame.iter().find_map(|m| match &m.payload {
        MarkPayload::Circle(c)
            if m.has_class(chart::CIRCLE_CLASS) && m.attr("row") == Some(row.as_str()) =>
        {
            Some(Point::new(c.center.x, c.center.y - c.radius))
        }
        _ => None,
    })
}
