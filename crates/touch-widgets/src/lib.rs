//! Touch Widgets
//!
//! Retained-mode UI widgets for microcontroller touchscreens, drawn with
//! `embedded-graphics` onto any [`DrawTarget`](embedded_graphics::draw_target::DrawTarget).
//!
//! # Components
//!
//! - [`ListBox`] - Scrollable, touch-selectable list with a proportional scrollbar
//! - [`Widget`] - Shared widget contract (bounds, enabled/dirty flags, draw + touch hooks)
//! - [`Screen`] - Owning container that runs the per-tick touch dispatch and redraw
//! - [`TouchTracker`] - Turns per-tick touch samples into press/drag/release edges
//!
//! # Example
//!
//! ```no_run
//! use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};
//! use touch_widgets::prelude::*;
//!
//! let mut list: ListBox<Rgb565> = ListBox::new(
//!     Rectangle::new(Point::new(160, 10), Size::new(150, 220)),
//!     ListBoxStyle::dark(),
//! );
//! list.set_items(["Paris", "Tokyo", "New York"].map(ListItem::from));
//! list.set_selected_index(Some(2), false);
//! list.on_selection_changed(|index, item| {
//!     let _ = (index, item.map(ListItem::text));
//! });
//! ```
//!
//! # Feature flags
//!
//! | Feature     | What it enables                                         |
//! |-------------|---------------------------------------------------------|
//! | `defmt`     | `defmt::Format` derives and `defmt::debug!` logs        |
//! | `tracing`   | `tracing::debug!` logs                                  |
//! | `simulator` | SDL2 window for the `list_box_demo` example             |

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in widget code
#![deny(clippy::expect_used)] // no .expect() in widget code
#![deny(clippy::panic)] // no panic!() in widget code
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code

extern crate alloc;

#[macro_use]
mod log;

pub mod config;
pub mod list_box;
pub mod screen;
pub mod text;
pub mod touch;
pub mod widget;

pub use list_box::{ListBox, ListBoxStyle, ListItem, Tag};
pub use screen::{Screen, WidgetId};
pub use touch::{TouchEvent, TouchInput, TouchTracker};
pub use widget::{Widget, WidgetBase};

/// Everything needed to build and drive a screen of widgets.
pub mod prelude {
    pub use crate::list_box::*;
    pub use crate::screen::*;
    pub use crate::text::*;
    pub use crate::touch::*;
    pub use crate::widget::*;
}
