//! Layout constants shared by the widgets and the host loop.
//!
//! Style values (colors, font, row height) live in
//! [`ListBoxStyle`](crate::list_box::ListBoxStyle); this module only holds the
//! fixed geometry every list box uses.

/// Panel border thickness in pixels. Interior fills are inset by this much.
pub const BORDER_WIDTH: u32 = 1;

/// Left margin between the panel edge and a row's label, in pixels.
pub const TEXT_MARGIN: i32 = 5;

/// Width of the scrollbar track and thumb, in pixels.
pub const SCROLLBAR_WIDTH: u32 = 7;

/// Distance from the panel's right edge to the scrollbar's left edge.
pub const SCROLLBAR_INSET: i32 = 8;

/// Suggested delay between host loop ticks (touch probe + redraw), in ms.
pub const TICK_INTERVAL_MS: u64 = 20;

/// Length of a [`Tag`](crate::list_box::Tag) in bytes.
pub const TAG_LEN: usize = 6;
