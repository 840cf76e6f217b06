//! Scrollable list-selection widget.
//!
//! A [`ListBox`] shows a window of `visible_count` rows out of an ordered item
//! collection, highlights the selected row, and draws a proportional
//! scrollbar thumb when the items overflow the panel.
//!
//! # Touch model
//!
//! ```text
//!            press inside bounds
//!   Idle  ───────────────────────▶  Dragging
//!    ▲                                 │ drag: top_index follows the finger
//!    └──────────── release ────────────┘ short move (< row/2): tap-select
//! ```
//!
//! Dragging is "content follows finger": moving the finger down by one row
//! height reveals the previous item. A release that moved less than half a
//! row is a tap and selects the row under the finger, with notification.
//!
//! # Indices
//!
//! Every index-taking operation is bounds-checked. Out-of-range calls are
//! silent no-ops or return [`ListItem::empty`]; nothing panics.

mod item;
mod style;

pub use item::{ListItem, Tag};
pub use style::ListBoxStyle;

use alloc::{boxed::Box, vec::Vec};
use core::any::Any;

use embedded_graphics::{
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

use crate::config::{BORDER_WIDTH, SCROLLBAR_INSET, SCROLLBAR_WIDTH, TEXT_MARGIN};
use crate::text::TextRenderer;
use crate::widget::{Widget, WidgetBase};

/// Canonical value returned for out-of-range lookups.
static EMPTY_ITEM: ListItem = ListItem::empty();

/// Selection-changed callback: new index (`None` = cleared) and its item.
pub type SelectionCallback = Box<dyn FnMut(Option<usize>, Option<&ListItem>)>;

/// Transient touch-drag bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct DragState {
    active: bool,
    start_y: i32,
    start_top_index: usize,
}

/// Scrollable list with touch selection and drag-to-scroll.
pub struct ListBox<C> {
    base: WidgetBase,
    style: ListBoxStyle<C>,
    items: Vec<ListItem>,
    selected: Option<usize>,
    top_index: usize,
    visible_count: usize,
    drag: DragState,
    on_selection_changed: Option<SelectionCallback>,
}

impl<C: PixelColor> ListBox<C> {
    /// Create an empty list filling `bounds`.
    ///
    /// The number of visible rows is `bounds.height / style.row_height` and
    /// never changes afterwards.
    pub fn new(bounds: Rectangle, style: ListBoxStyle<C>) -> Self {
        let visible_count = bounds
            .size
            .height
            .checked_div(style.row_height)
            .map_or(0, |rows| usize::try_from(rows).unwrap_or(usize::MAX));

        Self {
            base: WidgetBase::new(bounds, ""),
            style,
            items: Vec::new(),
            selected: None,
            top_index: 0,
            visible_count,
            drag: DragState::default(),
            on_selection_changed: None,
        }
    }

    // -----------------------------------------------------------------------
    // Widget state
    // -----------------------------------------------------------------------

    /// Shared widget state.
    pub fn base(&self) -> &WidgetBase {
        &self.base
    }

    /// Shared widget state, mutably.
    pub fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    /// Panel rectangle.
    pub fn bounds(&self) -> Rectangle {
        self.base.bounds()
    }

    /// Whether the next redraw pass repaints the list.
    pub fn is_dirty(&self) -> bool {
        self.base.is_dirty()
    }

    /// Set or clear the redraw marker.
    pub fn set_dirty(&mut self, dirty: bool) {
        self.base.set_dirty(dirty);
    }

    /// Whether touch input is handled.
    pub fn is_enabled(&self) -> bool {
        self.base.is_enabled()
    }

    /// Enable or disable touch input.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.base.set_enabled(enabled);
    }

    /// Visual configuration.
    pub fn style(&self) -> &ListBoxStyle<C> {
        &self.style
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    /// Replace every item. Clears the selection and scrolls to the top.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = ListItem>) {
        self.items = items.into_iter().collect();
        self.selected = None;
        self.top_index = 0;
        ui_debug!("list box: {} items set", self.items.len());
        self.base.set_dirty(true);
    }

    /// Append one item. Selection and scroll position are unchanged.
    pub fn add_item(&mut self, item: impl Into<ListItem>) {
        self.items.push(item.into());
        self.base.set_dirty(true);
    }

    /// Append several items. Selection and scroll position are unchanged.
    pub fn add_items(&mut self, items: impl IntoIterator<Item = ListItem>) {
        self.items.extend(items);
        self.base.set_dirty(true);
    }

    /// Remove the item at `index`.
    ///
    /// Returns `false` (and changes nothing) when `index` is out of range.
    /// Removing the selected row clears the selection without invoking the
    /// selection callback; removing a row above it shifts the selection up.
    pub fn remove_item(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.items.remove(index);

        self.selected = match self.selected {
            Some(sel) if sel == index => None,
            Some(sel) if sel > index => Some(sel.saturating_sub(1)),
            other => other,
        };
        self.top_index = self.top_index.min(self.max_top_index());

        ui_debug!("list box: removed item {}, {} left", index, self.items.len());
        self.base.set_dirty(true);
        true
    }

    /// Item at `index`, or [`ListItem::empty`] when out of range.
    pub fn item(&self, index: usize) -> &ListItem {
        self.items.get(index).unwrap_or(&EMPTY_ITEM)
    }

    /// All items in display order.
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Select `index` (`None` clears the selection).
    ///
    /// Does nothing when `index` is out of range or already selected. On an
    /// actual change the list is marked dirty and, if `notify` is set, the
    /// registered callback runs before this returns.
    pub fn set_selected_index(&mut self, index: Option<usize>, notify: bool) {
        if index.is_some_and(|i| i >= self.items.len()) || index == self.selected {
            return;
        }
        self.selected = index;
        if let Some(i) = index {
            ui_debug!("list box: selected {}", i);
        }

        if notify {
            if let Some(callback) = self.on_selection_changed.as_mut() {
                callback(index, index.and_then(|i| self.items.get(i)));
            }
        }
        self.base.set_dirty(true);
    }

    /// Selected index, `None` when nothing is selected.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Selected item, or [`ListItem::empty`] when nothing is selected.
    pub fn selected_item(&self) -> &ListItem {
        self.selected.map_or(&EMPTY_ITEM, |i| self.item(i))
    }

    /// Label of the selected item, `""` when nothing is selected.
    pub fn selected_text(&self) -> &str {
        self.selected_item().text()
    }

    /// Tag of the selected item, [`Tag::ZERO`] when nothing is selected.
    pub fn selected_tag(&self) -> Tag {
        self.selected_item().tag()
    }

    /// Register the selection-changed callback, replacing any previous one.
    ///
    /// Only [`set_selected_index`](Self::set_selected_index) with
    /// `notify = true` (including touch taps) invokes it.
    pub fn on_selection_changed<F>(&mut self, callback: F)
    where
        F: FnMut(Option<usize>, Option<&ListItem>) + 'static,
    {
        self.on_selection_changed = Some(Box::new(callback));
    }

    // -----------------------------------------------------------------------
    // Scrolling
    // -----------------------------------------------------------------------

    /// Index of the first visible row.
    pub fn top_index(&self) -> usize {
        self.top_index
    }

    /// Number of rows that fit in the panel.
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Largest valid [`top_index`](Self::top_index) for the current items.
    pub fn max_top_index(&self) -> usize {
        self.items.len().saturating_sub(self.visible_count)
    }

    /// Scroll so `index` is the first visible row (clamped).
    pub fn scroll_to(&mut self, index: usize) {
        let top = index.min(self.max_top_index());
        if top != self.top_index {
            self.top_index = top;
            self.base.set_dirty(true);
        }
    }

    /// Whether a press started inside the list and has not been released.
    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    // -----------------------------------------------------------------------
    // Geometry
    // -----------------------------------------------------------------------

    /// Rectangle of visible row `row` (0 = top of the panel), inside the border.
    #[allow(clippy::arithmetic_side_effects)] // Safety: row < visible_count, so row * row_height <= panel height
    pub fn row_bounds(&self, row: usize) -> Rectangle {
        let bounds = self.bounds();
        let row = i32::try_from(row).unwrap_or(i32::MAX);
        let row_height = i32::try_from(self.style.row_height).unwrap_or(i32::MAX);
        let inset = i32::try_from(BORDER_WIDTH).unwrap_or(0);

        Rectangle::new(
            bounds.top_left + Point::new(inset, inset + row.saturating_mul(row_height)),
            Size::new(
                bounds.size.width.saturating_sub(2 * BORDER_WIDTH),
                self.style.row_height,
            ),
        )
    }

    /// Scrollbar thumb rectangle, `None` when every item fits.
    ///
    /// Height is `visible_count / item_count` of the track and the offset is
    /// `top_index / item_count` of the track.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn scrollbar_thumb(&self) -> Option<Rectangle> {
        let count = self.items.len();
        if count <= self.visible_count {
            return None;
        }
        let track = self.scrollbar_track();
        let track_height = track.size.height as f32;
        let thumb_height = self.visible_count as f32 / count as f32 * track_height;
        let thumb_y = track.top_left.y as f32 + self.top_index as f32 / count as f32 * track_height;

        Some(Rectangle::new(
            Point::new(track.top_left.x, thumb_y as i32),
            Size::new(SCROLLBAR_WIDTH, thumb_height as u32),
        ))
    }

    /// Scrollbar track along the right edge, inside the border.
    fn scrollbar_track(&self) -> Rectangle {
        let bounds = self.bounds();
        let right = bounds
            .top_left
            .x
            .saturating_add(i32::try_from(bounds.size.width).unwrap_or(i32::MAX));
        let inset = i32::try_from(BORDER_WIDTH).unwrap_or(0);

        Rectangle::new(
            Point::new(
                right.saturating_sub(SCROLLBAR_INSET),
                bounds.top_left.y.saturating_add(inset),
            ),
            Size::new(
                SCROLLBAR_WIDTH,
                bounds.size.height.saturating_sub(2 * BORDER_WIDTH),
            ),
        )
    }

    fn row_height_i32(&self) -> i32 {
        i32::try_from(self.style.row_height).unwrap_or(i32::MAX)
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// Paint border, background, visible rows and scrollbar.
    #[allow(clippy::arithmetic_side_effects)] // Safety: y + (row_height + text_height) / 2 stays within the panel
    fn render<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        let bounds = self.bounds();
        let style = &self.style;

        // Border first, then the interior fill inset by the border width.
        bounds
            .into_styled(PrimitiveStyle::with_stroke(style.border, BORDER_WIDTH))
            .draw(target)?;
        bounds
            .offset(-i32::try_from(BORDER_WIDTH).unwrap_or(0))
            .into_styled(PrimitiveStyle::with_fill(style.background))
            .draw(target)?;

        let mut text = TextRenderer::new(style.font, style.text);
        text.set_background_color(None);
        let text_height = text.text_height();
        let row_height = self.row_height_i32();

        for row in 0..self.visible_count {
            let index = self.top_index.saturating_add(row);
            let Some(item) = self.items.get(index) else {
                break;
            };
            let row_rect = self.row_bounds(row);

            if self.selected == Some(index) {
                row_rect
                    .into_styled(PrimitiveStyle::with_fill(style.selected_background))
                    .draw(target)?;
                text.set_foreground_color(style.selected_text);
            } else {
                text.set_foreground_color(style.text);
            }

            let baseline = row_rect.top_left.y + (row_height + text_height) / 2;
            text.set_cursor(Point::new(bounds.top_left.x + TEXT_MARGIN, baseline));
            text.print(item.text(), target)?;
        }

        if let Some(thumb) = self.scrollbar_thumb() {
            self.scrollbar_track()
                .into_styled(PrimitiveStyle::with_fill(style.background))
                .draw(target)?;
            thumb
                .into_styled(PrimitiveStyle::with_fill(style.scrollbar))
                .draw(target)?;
        }

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Touch
    // -----------------------------------------------------------------------

    /// Start a drag if enabled and `point` is inside the panel.
    pub fn handle_press(&mut self, point: Point) {
        if self.base.is_enabled() && self.base.contains(point) {
            self.drag = DragState {
                active: true,
                start_y: point.y,
                start_top_index: self.top_index,
            };
            ui_trace!("list box: press at y={}", point.y);
        }
    }

    /// Scroll so the content follows the finger, one row per row height.
    pub fn handle_drag(&mut self, point: Point) {
        if !self.base.is_enabled() || !self.drag.active {
            return;
        }
        let delta = point.y.saturating_sub(self.drag.start_y);
        // Truncating division: partial rows do not scroll.
        let scrolled = delta.saturating_neg().checked_div(self.row_height_i32()).unwrap_or(0);

        let start = i32::try_from(self.drag.start_top_index).unwrap_or(i32::MAX);
        let max_top = i32::try_from(self.max_top_index()).unwrap_or(i32::MAX);
        let new_top = start.saturating_add(scrolled).clamp(0, max_top);
        let new_top = usize::try_from(new_top).unwrap_or(0);

        if new_top != self.top_index {
            self.top_index = new_top;
            ui_trace!("list box: scrolled to {}", new_top);
            self.base.set_dirty(true);
        }
    }

    /// End the drag; a release within half a row of the press selects the
    /// row under the finger and notifies.
    pub fn handle_release(&mut self, point: Point) {
        if self.base.is_enabled() && self.drag.active {
            let moved = point.y.saturating_sub(self.drag.start_y).saturating_abs();
            if moved < self.row_height_i32() / 2 {
                let offset = point
                    .y
                    .saturating_sub(self.bounds().top_left.y)
                    .checked_div(self.row_height_i32())
                    .unwrap_or(0);
                let clicked = i32::try_from(self.top_index)
                    .unwrap_or(i32::MAX)
                    .saturating_add(offset);
                self.select_tapped(clicked);
            }
        }
        self.drag.active = false;
    }

    /// Apply a tap's raw row index. `-1` clears the selection like an
    /// explicit `None`; anything else out of range is ignored by
    /// [`set_selected_index`](Self::set_selected_index).
    fn select_tapped(&mut self, clicked: i32) {
        let index = match clicked {
            -1 => None,
            raw => match usize::try_from(raw) {
                Ok(i) => Some(i),
                Err(_) => return,
            },
        };
        self.set_selected_index(index, true);
    }
}

impl<C, D> Widget<D> for ListBox<C>
where
    C: PixelColor + 'static,
    D: DrawTarget<Color = C>,
{
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn draw_internal(&mut self, target: &mut D, _force: bool) -> Result<(), D::Error> {
        self.render(target)
    }

    fn handle_press(&mut self, point: Point) {
        ListBox::handle_press(self, point);
    }

    fn handle_drag(&mut self, point: Point) {
        ListBox::handle_drag(self, point);
    }

    fn handle_release(&mut self, point: Point) {
        ListBox::handle_release(self, point);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
