//! List box visual configuration.

use embedded_graphics::{
    mono_font::{ascii::FONT_7X13, MonoFont},
    pixelcolor::Rgb565,
    prelude::*,
};

/// Colors, font and row height for a [`ListBox`](super::ListBox).
///
/// Fixed at construction; the widget never mutates it.
#[derive(Clone, Copy)]
pub struct ListBoxStyle<C> {
    /// Row label font.
    pub font: &'static MonoFont<'static>,
    /// Height of each row in pixels. Must be non-zero for rows to show.
    pub row_height: u32,
    /// Label color of unselected rows.
    pub text: C,
    /// Panel background.
    pub background: C,
    /// Label color of the selected row.
    pub selected_text: C,
    /// Fill behind the selected row.
    pub selected_background: C,
    /// 1px panel outline.
    pub border: C,
    /// Scrollbar thumb.
    pub scrollbar: C,
}

impl<C: PixelColor> ListBoxStyle<C> {
    /// Replace the font.
    #[must_use]
    pub fn with_font(mut self, font: &'static MonoFont<'static>) -> Self {
        self.font = font;
        self
    }

    /// Replace the row height.
    #[must_use]
    pub fn with_row_height(mut self, row_height: u32) -> Self {
        self.row_height = row_height;
        self
    }

    /// Replace the unselected text and panel background colors.
    #[must_use]
    pub fn with_colors(mut self, text: C, background: C) -> Self {
        self.text = text;
        self.background = background;
        self
    }

    /// Replace the selected-row text and fill colors.
    #[must_use]
    pub fn with_selection_colors(mut self, text: C, background: C) -> Self {
        self.selected_text = text;
        self.selected_background = background;
        self
    }

    /// Replace the border color.
    #[must_use]
    pub fn with_border(mut self, border: C) -> Self {
        self.border = border;
        self
    }

    /// Replace the scrollbar thumb color.
    #[must_use]
    pub fn with_scrollbar(mut self, scrollbar: C) -> Self {
        self.scrollbar = scrollbar;
        self
    }
}

/// Dark grey panel (RGB565 `0x2104`).
const DARK_GREY: Rgb565 = Rgb565::new(4, 8, 4);
/// RGB565 `0xFDA0`.
const ORANGE: Rgb565 = Rgb565::new(31, 45, 0);
/// RGB565 `0xD69A`.
const LIGHT_GREY: Rgb565 = Rgb565::new(26, 52, 26);

impl ListBoxStyle<Rgb565> {
    /// White text on dark grey, black-on-orange selection.
    pub fn dark() -> Self {
        Self {
            font: &FONT_7X13,
            row_height: 22,
            text: Rgb565::WHITE,
            background: DARK_GREY,
            selected_text: Rgb565::BLACK,
            selected_background: ORANGE,
            border: Rgb565::WHITE,
            scrollbar: LIGHT_GREY,
        }
    }

    /// Black text on white, white-on-blue selection.
    pub fn light() -> Self {
        Self {
            font: &FONT_7X13,
            row_height: 22,
            text: Rgb565::BLACK,
            background: Rgb565::WHITE,
            selected_text: Rgb565::WHITE,
            selected_background: Rgb565::BLUE,
            border: Rgb565::BLACK,
            scrollbar: LIGHT_GREY,
        }
    }
}

impl Default for ListBoxStyle<Rgb565> {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mono_font::ascii::FONT_6X10;
    use embedded_graphics::pixelcolor::raw::RawU16;

    #[test]
    fn test_dark_palette_matches_rgb565_constants() {
        assert_eq!(Rgb565::from(RawU16::new(0x2104)), DARK_GREY);
        assert_eq!(Rgb565::from(RawU16::new(0xFDA0)), ORANGE);
        assert_eq!(Rgb565::from(RawU16::new(0xD69A)), LIGHT_GREY);
    }

    #[test]
    fn test_default_is_dark() {
        let style = ListBoxStyle::default();
        assert_eq!(style.row_height, 22);
        assert_eq!(style.background, DARK_GREY);
        assert_eq!(style.selected_background, ORANGE);
    }

    #[test]
    fn test_builders() {
        let style = ListBoxStyle::light()
            .with_font(&FONT_6X10)
            .with_row_height(16)
            .with_border(Rgb565::RED)
            .with_scrollbar(Rgb565::GREEN);
        assert_eq!(style.row_height, 16);
        assert_eq!(style.font.character_size, Size::new(6, 10));
        assert_eq!(style.border, Rgb565::RED);
        assert_eq!(style.scrollbar, Rgb565::GREEN);
    }
}
