use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::{Bar, ChartOptions, DataPoint, layout_bars};
use crate::error::ChartResult;
use crate::interaction::tooltip::{TooltipSink, tooltip_placement, tooltip_text};
use crate::interaction::{HoverState, HoverTracker, SurfaceBounds};
use crate::render::Renderer;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// One engine owns one renderer, one tooltip sink, and one hover tracker.
/// Repeated `draw` calls rebuild the catalog and repaint from scratch while
/// pointer events keep flowing through the same tracker, so redrawing can
/// never stack a second hover subscription over the first.
pub struct BarChartEngine<R: Renderer, S: TooltipSink> {
    pub(super) renderer: R,
    pub(super) sink: S,
    pub(super) options: ChartOptions,
    pub(super) data: Vec<DataPoint>,
    pub(super) bars: Vec<Bar>,
    pub(super) hover: HoverTracker,
    pub(super) metadata: IndexMap<String, String>,
}

impl<R: Renderer, S: TooltipSink> BarChartEngine<R, S> {
    pub fn new(renderer: R, sink: S, options: ChartOptions) -> ChartResult<Self> {
        options.validate()?;
        Ok(Self {
            renderer,
            sink,
            options,
            data: Vec::new(),
            bars: Vec::new(),
            hover: HoverTracker::default(),
            metadata: IndexMap::new(),
        })
    }

    /// Replaces the dataset.
    ///
    /// The bar catalog refreshes on the next `draw`; until then accessors
    /// keep returning the bars of the previous pass.
    pub fn set_data(&mut self, data: Vec<DataPoint>) {
        debug!(count = data.len(), "set chart data");
        self.data = data;
    }

    #[must_use]
    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    #[must_use]
    pub fn options(&self) -> ChartOptions {
        self.options
    }

    /// Bar catalog of the most recent draw pass, in input order.
    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.hover.state()
    }

    /// The bar under the pointer, if any.
    #[must_use]
    pub fn hovered_bar(&self) -> Option<&Bar> {
        match self.hover.state() {
            HoverState::Hovering { bar_index } => self.bars.get(bar_index),
            HoverState::Idle => None,
        }
    }

    /// Attaches a host metadata entry carried into snapshots.
    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn metadata(&self) -> &IndexMap<String, String> {
        &self.metadata
    }

    /// Recomputes the bar catalog and repaints the full surface.
    pub fn draw(&mut self) -> ChartResult<()> {
        self.bars = layout_bars(&self.data, &self.options);
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    /// Recomputes the catalog and repaints into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn draw_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        self.bars = layout_bars(&self.data, &self.options);
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    /// Handles one pointer-move event in viewport coordinates.
    ///
    /// Converts to surface-local coordinates, re-runs the full hit-test and
    /// pushes the resulting tooltip update into the sink.
    pub fn pointer_move(
        &mut self,
        viewport_x: f64,
        viewport_y: f64,
        bounds: SurfaceBounds,
    ) -> HoverState {
        let local_x = viewport_x - bounds.left;
        let local_y = viewport_y - bounds.top;
        let state = self
            .hover
            .on_pointer_move(&self.bars, local_x, local_y, self.options.dpr);
        trace!(local_x, local_y, hovering = state.is_hovering(), "pointer move");
        match state {
            HoverState::Hovering { bar_index } => {
                let bar = &self.bars[bar_index];
                let placement = tooltip_placement(bar, bounds, self.options.dpr);
                self.sink.show(&tooltip_text(bar), placement);
            }
            HoverState::Idle => self.sink.hide(),
        }
        state
    }

    /// Resets hover tracking when the pointer leaves the surface.
    pub fn pointer_leave(&mut self) -> HoverState {
        let state = self.hover.on_pointer_leave();
        self.sink.hide();
        state
    }

    #[must_use]
    pub fn tooltip_sink(&self) -> &S {
        &self.sink
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Consumes the engine, returning the renderer and tooltip sink.
    #[must_use]
    pub fn into_parts(self) -> (R, S) {
        (self.renderer, self.sink)
    }
}
