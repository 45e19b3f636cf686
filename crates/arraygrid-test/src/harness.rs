//! Pass driver for exercising a grid end to end.

use crate::host::ScriptedHost;
use arraygrid_core::{Canvas, InputEvent, MouseButton, Point, Rect, TextStyle, WidgetId};
use arraygrid_layout::{
    CellContent, CellRender, ColumnCount, GridConfig, GridFrame, LayoutEngine, LayoutState,
    PassOutcome, RowAction, StateStore, TrackedVec,
};
use std::fmt::Display;

/// Passes [`GridHarness::settle`] runs before giving up.
pub const MAX_SETTLE_PASSES: usize = 8;

/// Renders each element as its `Display` text and remembers what it drew.
pub struct TextCells<T> {
    nested: Option<Box<dyn Fn(&T) -> Option<String>>>,
    drawn: Vec<CellContent>,
}

impl<T> TextCells<T> {
    /// Renderer with no nested labels.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nested: None,
            drawn: Vec::new(),
        }
    }

    /// Report nested-content labels through `labeller`.
    #[must_use]
    pub fn with_nested(mut self, labeller: impl Fn(&T) -> Option<String> + 'static) -> Self {
        self.nested = Some(Box::new(labeller));
        self
    }

    /// Cells drawn during the most recent pass.
    #[must_use]
    pub fn drawn(&self) -> &[CellContent] {
        &self.drawn
    }
}

impl<T> Default for TextCells<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> CellRender<T> for TextCells<T> {
    fn nested_label(&self, element: &T) -> Option<String> {
        self.nested.as_ref().and_then(|labeller| labeller(element))
    }

    fn render(&mut self, element: &mut T, content: &CellContent, canvas: &mut dyn Canvas) {
        canvas.draw_text(&element.to_string(), content.rect.origin(), &TextStyle::default());
        self.drawn.push(content.clone());
    }
}

/// Drives one grid over a [`TrackedVec`] through scripted passes.
///
/// # Example
///
/// ```
/// use arraygrid_test::GridHarness;
///
/// let mut grid = GridHarness::new(vec!['A', 'B', 'C', 'D'], 3);
/// grid.settle();
/// grid.click_append();
/// assert_eq!(grid.items().len(), 5);
/// ```
pub struct GridHarness<T> {
    engine: LayoutEngine,
    store: StateStore,
    list: TrackedVec<T>,
    host: ScriptedHost,
    cells: TextCells<T>,
    measure: Box<dyn Fn(&T) -> f32>,
    id: WidgetId,
    origin: Point,
    columns: ColumnCount,
    last: Option<PassOutcome>,
}

impl<T: Clone + Default + Display> GridHarness<T> {
    /// Harness over `items` laid out `columns` wide, with default config and
    /// every element measuring 14 units.
    #[must_use]
    pub fn new(items: Vec<T>, columns: i64) -> Self {
        Self {
            engine: LayoutEngine::default(),
            store: StateStore::new(),
            list: TrackedVec::new(items),
            host: ScriptedHost::new(),
            cells: TextCells::new(),
            measure: Box::new(|_| 14.0),
            id: WidgetId::from_path("harness", "items"),
            origin: Point::ORIGIN,
            columns: ColumnCount::clamped(columns),
            last: None,
        }
    }

    /// Use `config` for the engine.
    #[must_use]
    pub fn with_config(mut self, config: GridConfig) -> Self {
        self.engine = LayoutEngine::new(config);
        self
    }

    /// Measure elements with `measure`.
    #[must_use]
    pub fn with_measure(mut self, measure: impl Fn(&T) -> f32 + 'static) -> Self {
        self.measure = Box::new(measure);
        self
    }

    /// Use `cells` to render elements.
    #[must_use]
    pub fn with_cells(mut self, cells: TextCells<T>) -> Self {
        self.cells = cells;
        self
    }

    /// Place the grid at `origin`.
    #[must_use]
    pub const fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Change the column count for later passes.
    pub fn set_columns(&mut self, columns: i64) -> &mut Self {
        self.columns = ColumnCount::clamped(columns);
        self
    }

    /// Move the grid for later passes.
    pub fn set_origin(&mut self, origin: Point) -> &mut Self {
        self.origin = origin;
        self
    }

    // === Passes ===

    /// Run one pass with `event`.
    pub fn dispatch(&mut self, event: InputEvent) -> PassOutcome {
        self.host.begin_frame();
        self.cells.drawn.clear();
        let frame = GridFrame::new(self.id, self.origin, self.columns).with_event(event);
        let outcome = self.engine.pass(
            &mut self.store,
            frame,
            &mut self.list,
            &*self.measure,
            &mut self.cells,
            &mut self.host,
        );
        self.last = Some(outcome);
        outcome
    }

    /// Run a pass with no input.
    pub fn idle(&mut self) -> PassOutcome {
        self.dispatch(InputEvent::none())
    }

    /// Pass with a primary-button press at `position`.
    pub fn press(&mut self, position: Point) -> PassOutcome {
        self.dispatch(InputEvent::pointer_down(position, MouseButton::Left))
    }

    /// Pass with a drag to `position`.
    pub fn drag(&mut self, position: Point) -> PassOutcome {
        self.dispatch(InputEvent::pointer_drag(position))
    }

    /// Pass with a release at `position`.
    pub fn release(&mut self, position: Point) -> PassOutcome {
        self.dispatch(InputEvent::pointer_up(position))
    }

    /// Secondary-click the centre of element `index`, answering the menu
    /// with `choice`.
    pub fn context_click(&mut self, index: usize, choice: Option<RowAction>) -> PassOutcome {
        let position = self.cell_rect(index).map_or(Point::ORIGIN, |r| r.center());
        self.host.answer_menu(choice);
        self.dispatch(InputEvent::pointer_down(position, MouseButton::Right))
    }

    /// Press the append button.
    pub fn click_append(&mut self) -> PassOutcome {
        let position = self.append_button().map_or(Point::ORIGIN, |r| r.center());
        self.press(position)
    }

    /// Drag the right boundary of `column` to `x`: press, drag, release.
    pub fn drag_boundary(&mut self, column: usize, x: f32) -> PassOutcome {
        let y = self.origin.y + 1.0;
        let start = Point::new(self.boundary_x(column).unwrap_or(self.origin.x), y);
        self.press(start);
        self.drag(Point::new(x, y));
        self.release(Point::new(x, y))
    }

    /// Complete pending relayouts and run idle passes until the height is
    /// stable. Returns the number of passes run.
    pub fn settle(&mut self) -> usize {
        for passes in 1..=MAX_SETTLE_PASSES {
            self.host.run_relayouts();
            if !self.idle().height_changed {
                self.host.run_relayouts();
                return passes;
            }
        }
        MAX_SETTLE_PASSES
    }

    // === Queries ===

    /// Elements in order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.list.as_slice()
    }

    /// The tracked list.
    #[must_use]
    pub const fn list(&self) -> &TrackedVec<T> {
        &self.list
    }

    /// Mutable tracked list, for edits made outside the grid.
    pub fn list_mut(&mut self) -> &mut TrackedVec<T> {
        &mut self.list
    }

    /// The scripted host.
    #[must_use]
    pub const fn host(&self) -> &ScriptedHost {
        &self.host
    }

    /// Mutable scripted host.
    pub fn host_mut(&mut self) -> &mut ScriptedHost {
        &mut self.host
    }

    /// The engine.
    #[must_use]
    pub const fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// The state store.
    #[must_use]
    pub const fn store(&self) -> &StateStore {
        &self.store
    }

    /// Mutable state store.
    pub fn store_mut(&mut self) -> &mut StateStore {
        &mut self.store
    }

    /// Grid identity.
    #[must_use]
    pub const fn id(&self) -> WidgetId {
        self.id
    }

    /// Outcome of the most recent pass.
    #[must_use]
    pub const fn last_outcome(&self) -> Option<PassOutcome> {
        self.last
    }

    /// Cells rendered in the most recent pass.
    #[must_use]
    pub fn drawn(&self) -> &[CellContent] {
        self.cells.drawn()
    }

    /// Stored layout state.
    #[must_use]
    pub fn state(&self) -> Option<&LayoutState> {
        self.store.get(self.id)
    }

    /// Height the engine reports for this grid.
    #[must_use]
    pub fn preferred_height(&self) -> Option<f32> {
        self.engine.preferred_height(&self.store, self.id)
    }

    /// X of the right boundary of `column`.
    #[must_use]
    pub fn boundary_x(&self, column: usize) -> Option<f32> {
        let state = self.state()?;
        let widths = state.column_widths().get(..=column)?;
        Some(state.origin().x + widths.iter().sum::<f32>())
    }

    /// Rectangle of the cell holding linear `index`, from stored geometry.
    #[must_use]
    pub fn cell_rect(&self, index: usize) -> Option<Rect> {
        let state = self.state()?;
        let address = arraygrid_layout::to_address(index, self.columns);
        let widths = state.column_widths();
        let heights = state.row_heights();
        let width = *widths.get(address.column)?;
        let height = *heights.get(address.row)?;
        let origin = state.origin();
        let x = origin.x + widths[..address.column].iter().sum::<f32>();
        let y = origin.y
            + self.engine.config().header_height
            + heights[..address.row].iter().sum::<f32>();
        Some(Rect::new(x, y, width, height))
    }

    /// Rectangle of the append button.
    #[must_use]
    pub fn append_button(&self) -> Option<Rect> {
        self.cell_rect(self.list.as_slice().len())
            .map(|cell| cell.centered(self.engine.config().append_button_size()))
    }

    // === Assertions ===

    /// Assert the elements equal `expected`.
    ///
    /// # Panics
    ///
    /// Panics if they differ.
    pub fn assert_items(&self, expected: &[T]) -> &Self
    where
        T: PartialEq + std::fmt::Debug,
    {
        assert_eq!(self.items(), expected, "grid items differ");
        self
    }

    /// Assert column widths equal `expected`.
    ///
    /// # Panics
    ///
    /// Panics if the grid has no state or the widths differ.
    pub fn assert_column_widths(&self, expected: &[f32]) -> &Self {
        let actual = self.state().map(LayoutState::column_widths);
        assert_eq!(actual, Some(expected), "column widths differ");
        self
    }

    /// Assert the most recent pass painted `text`.
    ///
    /// # Panics
    ///
    /// Panics if no text command matches.
    pub fn assert_painted(&self, text: &str) -> &Self {
        assert!(
            self.host.recording().texts().any(|t| t == text),
            "expected '{text}' to be painted"
        );
        self
    }
}
