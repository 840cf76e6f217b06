//! Widget container and per-tick host loop.
//!
//! [`Screen`] owns every widget on one display. Each tick it probes touch
//! once, dispatches the resulting edges to every widget in registration order,
//! then redraws dirty widgets in the same order. Widgets are expected not to
//! overlap; later widgets simply paint over earlier ones.

use alloc::{boxed::Box, vec::Vec};

use embedded_graphics::prelude::*;

use crate::touch::{TouchEvent, TouchInput, TouchTracker};
use crate::widget::Widget;

/// Stable handle to a widget owned by a [`Screen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WidgetId(usize);

/// Owning, ordered collection of widgets drawn onto `D`.
pub struct Screen<D: DrawTarget> {
    widgets: Vec<Box<dyn Widget<D>>>,
    touch: TouchTracker,
}

impl<D: DrawTarget> Screen<D> {
    /// Empty screen.
    pub fn new() -> Self {
        Self {
            widgets: Vec::new(),
            touch: TouchTracker::new(),
        }
    }

    /// Take ownership of `widget`. Draw and dispatch order is insertion order.
    pub fn add<W>(&mut self, widget: W) -> WidgetId
    where
        W: Widget<D> + 'static,
    {
        let id = WidgetId(self.widgets.len());
        self.widgets.push(Box::new(widget));
        id
    }

    /// Number of widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// `true` when no widgets are registered.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Widget behind `id`, untyped.
    pub fn widget(&self, id: WidgetId) -> Option<&dyn Widget<D>> {
        self.widgets.get(id.0).map(|w| &**w)
    }

    /// Widget behind `id`, untyped and mutable.
    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut (dyn Widget<D> + 'static)> {
        self.widgets.get_mut(id.0).map(|w| &mut **w)
    }

    /// Widget behind `id` as its concrete type. `None` if the id is unknown or
    /// the widget is of another type.
    pub fn get<T: 'static>(&self, id: WidgetId) -> Option<&T> {
        self.widgets.get(id.0)?.as_any().downcast_ref::<T>()
    }

    /// Mutable variant of [`get`](Self::get).
    pub fn get_mut<T: 'static>(&mut self, id: WidgetId) -> Option<&mut T> {
        self.widgets.get_mut(id.0)?.as_any_mut().downcast_mut::<T>()
    }

    /// Mark every widget for redraw (e.g. after clearing the display).
    pub fn mark_all_dirty(&mut self) {
        for widget in &mut self.widgets {
            widget.set_dirty(true);
        }
    }

    /// Deliver one touch event to every widget.
    pub fn dispatch(&mut self, event: TouchEvent) {
        for widget in &mut self.widgets {
            match event {
                TouchEvent::Press(p) => widget.handle_press(p),
                TouchEvent::Drag(p) => widget.handle_drag(p),
                TouchEvent::Release(p) => widget.handle_release(p),
            }
        }
    }

    /// Draw dirty widgets (all widgets when `force`). Returns how many were painted.
    pub fn redraw(&mut self, target: &mut D, force: bool) -> Result<usize, D::Error> {
        let mut painted = 0usize;
        for widget in &mut self.widgets {
            if widget.draw(target, force)? {
                painted = painted.saturating_add(1);
            }
        }
        Ok(painted)
    }

    /// One host loop iteration: probe touch, dispatch edges, redraw dirty widgets.
    pub fn tick<I>(&mut self, target: &mut D, input: &mut I) -> Result<usize, D::Error>
    where
        I: TouchInput + ?Sized,
    {
        for event in self.touch.update(input.sample()) {
            self.dispatch(event);
        }
        let painted = self.redraw(target, false)?;
        if painted > 0 {
            ui_trace!("screen: repainted {} widgets", painted);
        }
        Ok(painted)
    }
}

impl<D: DrawTarget> Default for Screen<D> {
    fn default() -> Self {
        Self::new()
    }
}
