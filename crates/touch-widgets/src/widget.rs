//! Widget contract shared by every component on a [`Screen`](crate::screen::Screen).
//!
//! A widget owns a [`WidgetBase`] (bounds, label, enabled and dirty flags) and
//! implements the [`Widget`] hooks. The host loop only ever talks to
//! `dyn Widget<D>`, so new widget kinds plug in without touching the loop.

use alloc::string::String;
use core::any::Any;

use embedded_graphics::{
    prelude::*,
    primitives::{ContainsPoint, Rectangle},
};

/// State common to all widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetBase {
    bounds: Rectangle,
    label: String,
    enabled: bool,
    dirty: bool,
}

impl WidgetBase {
    /// Create an enabled widget base. New widgets start dirty so the first
    /// redraw pass paints them.
    pub fn new(bounds: Rectangle, label: impl Into<String>) -> Self {
        Self {
            bounds,
            label: label.into(),
            enabled: true,
            dirty: true,
        }
    }

    /// Screen rectangle occupied by the widget.
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Widget label (may be empty).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the label and mark the widget for redraw.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
        self.dirty = true;
    }

    /// Whether the widget reacts to touch.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable touch handling. Marks dirty when the flag flips.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.dirty = true;
        }
    }

    /// Whether the next redraw pass must repaint this widget.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Set or clear the redraw marker.
    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    /// Whether `point` lies inside the widget's bounds.
    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }
}

/// A drawable, touchable UI element.
///
/// Implementors provide [`draw_internal`](Widget::draw_internal) and whichever
/// touch hooks they care about; the provided [`draw`](Widget::draw) applies
/// the dirty-flag discipline.
pub trait Widget<D: DrawTarget> {
    /// Shared widget state.
    fn base(&self) -> &WidgetBase;

    /// Shared widget state, mutably.
    fn base_mut(&mut self) -> &mut WidgetBase;

    /// Paint the widget. Called by [`draw`](Widget::draw) only when the
    /// widget is dirty or `force` is set.
    fn draw_internal(&mut self, target: &mut D, force: bool) -> Result<(), D::Error>;

    /// Touch went down at `point` (any widget, inside or outside its bounds).
    fn handle_press(&mut self, _point: Point) {}

    /// Touch is held at `point`.
    fn handle_drag(&mut self, _point: Point) {}

    /// Touch lifted; `point` is the last known touch position.
    fn handle_release(&mut self, _point: Point) {}

    /// Upcast for typed access through [`Screen::get`](crate::screen::Screen::get).
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for [`Screen::get_mut`](crate::screen::Screen::get_mut).
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Redraw if dirty (or forced), then clear the dirty flag.
    ///
    /// Returns `Ok(true)` when the widget was painted.
    fn draw(&mut self, target: &mut D, force: bool) -> Result<bool, D::Error> {
        if !force && !self.base().is_dirty() {
            return Ok(false);
        }
        self.draw_internal(target, force)?;
        self.base_mut().set_dirty(false);
        Ok(true)
    }

    /// See [`WidgetBase::bounds`].
    fn bounds(&self) -> Rectangle {
        self.base().bounds()
    }

    /// See [`WidgetBase::is_dirty`].
    fn is_dirty(&self) -> bool {
        self.base().is_dirty()
    }

    /// See [`WidgetBase::set_dirty`].
    fn set_dirty(&mut self, dirty: bool) {
        self.base_mut().set_dirty(dirty);
    }

    /// See [`WidgetBase::is_enabled`].
    fn is_enabled(&self) -> bool {
        self.base().is_enabled()
    }

    /// See [`WidgetBase::set_enabled`].
    fn set_enabled(&mut self, enabled: bool) {
        self.base_mut().set_enabled(enabled);
    }

    /// See [`WidgetBase::contains`].
    fn contains(&self, point: Point) -> bool {
        self.base().contains(point)
    }
}
