//! Layout engine: one call per grid per pass.

use crate::actions::RowAction;
use crate::cell::{label_width, CellContent, CellMeasure, CellRender};
use crate::config::GridConfig;
use crate::error::Result;
use crate::grid_index::{row_count, to_index, CellKind, ColumnCount};
use crate::host::GridHost;
use crate::list::GridList;
use crate::relayout::RelayoutGate;
use crate::resize;
use crate::rows::measure_rows;
use crate::state::{LayoutState, Reconciled};
use crate::store::StateStore;
use crate::style::GridStyle;
use arraygrid_core::{InputEvent, Point, Rect, WidgetId};
use tracing::debug;

/// Per-pass inputs identifying and placing one grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridFrame {
    /// Grid identity
    pub id: WidgetId,
    /// Top-left corner in host coordinates
    pub origin: Point,
    /// Column count
    pub columns: ColumnCount,
    /// Input observed this pass
    pub event: InputEvent,
}

impl GridFrame {
    /// Frame with no input.
    #[must_use]
    pub fn new(id: WidgetId, origin: Point, columns: ColumnCount) -> Self {
        Self {
            id,
            origin,
            columns,
            event: InputEvent::none(),
        }
    }

    /// Attach the pass's input event.
    #[must_use]
    pub const fn with_event(mut self, event: InputEvent) -> Self {
        self.event = event;
        self
    }
}

/// What a pass did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassOutcome {
    /// Total height before the pass
    pub previous_height: f32,
    /// Total height after the pass
    pub height: f32,
    /// Height moved by more than the configured epsilon
    pub height_changed: bool,
    /// A new relayout ticket was handed to the host. A change made while
    /// one is outstanding joins that ticket and leaves this `false`.
    pub relayout_scheduled: bool,
    /// Geometry was rebuilt from defaults
    pub reset: bool,
    /// The grid claimed the input event
    pub event_consumed: bool,
}

/// Whether a height change is large enough to need a relayout.
#[must_use]
pub fn height_changed(previous: f32, current: f32, epsilon: f32) -> bool {
    (current - previous).abs() > epsilon
}

/// Lays out, paints and edits list grids.
#[derive(Debug, Default)]
pub struct LayoutEngine {
    config: GridConfig,
    style: GridStyle,
    gate: RelayoutGate,
}

impl LayoutEngine {
    /// Create an engine with the given config and default style.
    ///
    /// The config is taken as is; use [`try_new`](Self::try_new) for one
    /// that has not been through [`GridConfig::validate`].
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            style: GridStyle::default(),
            gate: RelayoutGate::new(),
        }
    }

    /// Create an engine after validating `config`.
    pub fn try_new(config: GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create an engine from a TOML config.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        GridConfig::from_toml_str(source).map(Self::new)
    }

    /// Replace the style.
    #[must_use]
    pub fn with_style(mut self, style: GridStyle) -> Self {
        self.style = style;
        self
    }

    /// Sizing config.
    #[must_use]
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Paint style.
    #[must_use]
    pub const fn style(&self) -> &GridStyle {
        &self.style
    }

    /// Whether a relayout ticket is still held by the host.
    #[must_use]
    pub fn relayout_pending(&self) -> bool {
        self.gate.is_pending()
    }

    /// Height the grid `id` wants, as of its last pass.
    #[must_use]
    pub fn preferred_height(&self, store: &StateStore, id: WidgetId) -> Option<f32> {
        store.get(id).map(|state| state.total_height(&self.config))
    }

    /// Run one pass for the grid described by `frame`.
    ///
    /// Reconciles stored geometry with `list`, handles resize input, measures
    /// rows, paints the header and every cell, applies any row action or
    /// append the user triggered, and requests a relayout from `host` if the
    /// total height moved.
    pub fn pass<L, M, R, H>(
        &self,
        store: &mut StateStore,
        frame: GridFrame,
        list: &mut L,
        measure: &M,
        render: &mut R,
        host: &mut H,
    ) -> PassOutcome
    where
        L: GridList + ?Sized,
        M: CellMeasure<L::Item> + ?Sized,
        R: CellRender<L::Item> + ?Sized,
        H: GridHost + ?Sized,
    {
        let GridFrame {
            id,
            origin,
            columns,
            mut event,
        } = frame;
        let config = &self.config;
        let state = store.get_or_create(id);
        let previous_height = state.total_height(config);

        let reset = state.reconcile(columns, list.len(), origin, config) == Reconciled::Reset;
        if reset {
            debug!(widget = id.0, columns = columns.get(), "layout state reset");
            list.mark_changed();
        }

        let hit_height = previous_height - config.bottom_padding;
        let resized = resize::process(state, &mut event, config, hit_height, host.canvas());
        if resized.changed {
            list.mark_changed();
        }

        state.set_row_heights(measure_rows(list, measure, columns, config));

        self.paint_header(state, host);
        self.paint_cells(state, columns, list, render, host, &mut event);

        if let Some(bar) = resized.highlight {
            host.canvas().fill_rect(bar, self.style.resize_highlight);
        }

        let height = state.total_height(config);
        let changed = height_changed(previous_height, height, config.height_epsilon);
        let mut relayout_scheduled = false;
        if changed {
            list.mark_changed();
            if let Some(ticket) = self.gate.try_acquire(id) {
                debug!(widget = id.0, previous_height, height, "relayout scheduled");
                host.defer_relayout(ticket);
                relayout_scheduled = true;
            } else {
                debug!(widget = id.0, "joined pending relayout");
            }
        }

        PassOutcome {
            previous_height,
            height,
            height_changed: changed,
            relayout_scheduled,
            reset,
            event_consumed: event.is_consumed(),
        }
    }

    fn paint_header<H: GridHost + ?Sized>(&self, state: &LayoutState, host: &mut H) {
        let canvas = host.canvas();
        let origin = state.origin();
        let mut x = origin.x;
        for (column, width) in state.column_widths().iter().enumerate() {
            let rect = Rect::new(x, origin.y, *width, self.config.header_height);
            canvas.fill_rect(rect, self.style.header_background);
            canvas.stroke_rect(rect, self.style.border, 1.0);
            canvas.draw_text(
                &column.to_string(),
                rect.inset_by(self.config.cell_padding).origin(),
                &self.style.header_text,
            );
            x += width;
        }
    }

    fn paint_cells<L, R, H>(
        &self,
        state: &LayoutState,
        columns: ColumnCount,
        list: &mut L,
        render: &mut R,
        host: &mut H,
        event: &mut InputEvent,
    ) where
        L: GridList + ?Sized,
        R: CellRender<L::Item> + ?Sized,
        H: GridHost + ?Sized,
    {
        let origin = state.origin();
        let len = list.len();
        let rows = row_count(len, columns).min(state.row_heights().len());
        let mut y = origin.y + self.config.header_height;

        for (row, row_height) in state.row_heights().iter().take(rows).enumerate() {
            let mut x = origin.x;
            for (column, width) in state.column_widths().iter().enumerate() {
                let index = to_index(column, row, columns);
                let cell = Rect::new(x, y, *width, *row_height);
                x += width;

                if index < len
                    && event.is_secondary_press()
                    && cell.contains_point(&event.position)
                {
                    event.consume();
                    if let Some(action) =
                        host.show_context_menu(index, event.position, &RowAction::ALL)
                    {
                        action.apply(list, index);
                    }
                }

                self.paint_background(host, cell, row);

                match CellKind::classify(index, len) {
                    CellKind::Element => self.paint_element(list, render, host, index, cell),
                    CellKind::Append => self.paint_append(list, host, cell, event),
                    CellKind::Empty => {}
                }
            }
            y += row_height;
        }
    }

    fn paint_background<H: GridHost + ?Sized>(&self, host: &mut H, cell: Rect, row: usize) {
        let canvas = host.canvas();
        canvas.fill_rect(cell, self.style.cell_background);
        if row % 2 == 0 {
            canvas.fill_rect(cell, self.style.band);
        }
        canvas.stroke_rect(cell, self.style.border, 1.0);
    }

    fn paint_element<L, R, H>(&self, list: &mut L, render: &mut R, host: &mut H, index: usize, cell: Rect)
    where
        L: GridList + ?Sized,
        R: CellRender<L::Item> + ?Sized,
        H: GridHost + ?Sized,
    {
        let Some(element) = list.element_at_mut(index) else {
            return;
        };
        let mut rect = cell.inset_by(self.config.cell_padding);
        let label = render.nested_label(element);
        if label.is_some() {
            rect = rect.indent_left(self.config.nested_indent);
        }
        let content = CellContent {
            index,
            rect,
            label,
            label_width: label_width(rect.width),
        };
        let canvas = host.canvas();
        canvas.push_clip(cell);
        render.render(element, &content, canvas);
        canvas.pop_clip();
    }

    fn paint_append<L, H>(&self, list: &mut L, host: &mut H, cell: Rect, event: &mut InputEvent)
    where
        L: GridList + ?Sized,
        H: GridHost + ?Sized,
    {
        let button = cell.centered(self.config.append_button_size());
        let canvas = host.canvas();
        canvas.fill_rect(button, self.style.append_button);
        canvas.stroke_rect(button, self.style.border, 1.0);
        canvas.draw_text("+", button.inset_by(self.config.cell_padding).origin(), &self.style.append_text);

        if event.is_primary_press() && button.contains_point(&event.position) {
            let len = list.len();
            if list.insert_at(len) {
                debug!(index = len, "element appended");
                list.mark_changed();
            }
            event.consume();
        }
    }
}
