//! GTK4 adapter: embeds the engine into a `DrawingArea`, wires pointer
//! motion into hover tracking, and presents tooltips through a label widget.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::glib;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::BarChartEngine;
use crate::interaction::SurfaceBounds;
use crate::interaction::tooltip::{TooltipPlacement, TooltipSink};
use crate::render::{CairoContextRenderer, Renderer};

/// Teardown handle for one pointer-move subscription.
///
/// Detaching (explicitly or on drop) removes the motion controller from the
/// widget, so re-attaching after a redraw cannot stack duplicate listeners.
pub struct HoverSubscription {
    area: gtk::DrawingArea,
    controller: gtk::EventControllerMotion,
    detached: bool,
}

impl HoverSubscription {
    pub fn detach(mut self) {
        self.detach_inner();
    }

    fn detach_inner(&mut self) {
        if !self.detached {
            self.area.remove_controller(&self.controller);
            self.detached = true;
        }
    }
}

impl Drop for HoverSubscription {
    fn drop(&mut self) {
        self.detach_inner();
    }
}

/// Hosts a `BarChartEngine` inside a GTK `DrawingArea`.
pub struct GtkBarChartAdapter<R: Renderer, S: TooltipSink> {
    engine: Rc<RefCell<BarChartEngine<R, S>>>,
    drawing_area: gtk::DrawingArea,
}

impl<R, S> GtkBarChartAdapter<R, S>
where
    R: Renderer + CairoContextRenderer + 'static,
    S: TooltipSink + 'static,
{
    #[must_use]
    pub fn new(engine: BarChartEngine<R, S>) -> Self {
        let engine = Rc::new(RefCell::new(engine));
        let drawing_area = gtk::DrawingArea::new();
        {
            let engine = Rc::clone(&engine);
            drawing_area.set_draw_func(move |_, context, _, _| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    if let Err(err) = chart.draw_on_cairo_context(context) {
                        warn!(error = %err, "chart draw failed");
                    }
                }
            });
        }
        Self {
            engine,
            drawing_area,
        }
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn engine(&self) -> Rc<RefCell<BarChartEngine<R, S>>> {
        Rc::clone(&self.engine)
    }

    /// Subscribes hover tracking to the drawing area's motion events.
    ///
    /// Motion coordinates arrive widget-local, so the surface origin is
    /// `(0, 0)`. Attach once per surface; drop or `detach` the returned
    /// guard before attaching again.
    #[must_use]
    pub fn attach_hover(&self) -> HoverSubscription {
        let motion = gtk::EventControllerMotion::new();
        {
            let engine = Rc::clone(&self.engine);
            motion.connect_motion(move |_, x, y| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    chart.pointer_move(x, y, SurfaceBounds::new(0.0, 0.0));
                }
            });
        }
        {
            let engine = Rc::clone(&self.engine);
            motion.connect_leave(move |_| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    chart.pointer_leave();
                }
            });
        }
        self.drawing_area.add_controller(motion.clone());
        HoverSubscription {
            area: self.drawing_area.clone(),
            controller: motion,
            detached: false,
        }
    }
}

/// Tooltip sink backed by a `gtk::Label` placed inside a `gtk::Fixed`.
///
/// Holds only weak references: if the host tears the overlay widgets down,
/// `show` and `hide` become silent no-ops.
pub struct GtkLabelTooltipSink {
    fixed: glib::WeakRef<gtk::Fixed>,
    label: glib::WeakRef<gtk::Label>,
}

impl GtkLabelTooltipSink {
    #[must_use]
    pub fn new(fixed: &gtk::Fixed, label: &gtk::Label) -> Self {
        label.set_visible(false);
        Self {
            fixed: fixed.downgrade(),
            label: label.downgrade(),
        }
    }
}

impl TooltipSink for GtkLabelTooltipSink {
    fn show(&mut self, text: &str, placement: TooltipPlacement) {
        let (Some(fixed), Some(label)) = (self.fixed.upgrade(), self.label.upgrade()) else {
            return;
        };
        label.set_text(text);
        let width = f64::from(label.allocated_width());
        let height = f64::from(label.allocated_height());
        fixed.move_(&label, placement.x - width / 2.0, placement.y - height);
        label.set_visible(true);
    }

    fn hide(&mut self) {
        if let Some(label) = self.label.upgrade() {
            label.set_visible(false);
        }
    }
}
