//! Glyph rendering helper.
//!
//! Thin stateful wrapper over an `embedded-graphics` [`MonoFont`] with a
//! cursor, a foreground color, and an optional background. The background
//! defaults to `None`, which draws glyphs transparently over whatever is
//! already on the display.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyleBuilder},
    prelude::*,
    text::{Baseline, Text},
};

/// Stateful text cursor bound to one font.
pub struct TextRenderer<'f, C> {
    font: &'f MonoFont<'f>,
    foreground: C,
    background: Option<C>,
    cursor: Point,
}

impl<'f, C: PixelColor> TextRenderer<'f, C> {
    /// Create a transparent renderer with the cursor at the origin.
    pub fn new(font: &'f MonoFont<'f>, foreground: C) -> Self {
        Self {
            font,
            foreground,
            background: None,
            cursor: Point::zero(),
        }
    }

    /// Switch fonts. The cursor is kept.
    pub fn set_font(&mut self, font: &'f MonoFont<'f>) {
        self.font = font;
    }

    /// Glyph color for subsequent [`print`](Self::print) calls.
    pub fn set_foreground_color(&mut self, color: C) {
        self.foreground = color;
    }

    /// `None` draws glyphs transparently; `Some` fills each glyph cell.
    pub fn set_background_color(&mut self, color: Option<C>) {
        self.background = color;
    }

    /// Position the cursor. `y` is the text baseline.
    pub fn set_cursor(&mut self, position: Point) {
        self.cursor = position;
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Pixels above the baseline (positive).
    pub fn font_ascent(&self) -> i32 {
        i32::try_from(self.font.baseline).unwrap_or(i32::MAX)
    }

    /// Pixels below the baseline (zero or negative).
    pub fn font_descent(&self) -> i32 {
        let below = self
            .font
            .character_size
            .height
            .saturating_sub(self.font.baseline)
            .saturating_sub(1);
        i32::try_from(below).map_or(i32::MIN, |b| b.saturating_neg())
    }

    /// Total glyph height, `ascent - descent`.
    pub fn text_height(&self) -> i32 {
        self.font_ascent().saturating_sub(self.font_descent())
    }

    /// Draw `text` at the cursor and advance the cursor past it.
    pub fn print<D>(&mut self, text: &str, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        let builder = MonoTextStyleBuilder::new()
            .font(self.font)
            .text_color(self.foreground);
        let style = match self.background {
            Some(bg) => builder.background_color(bg).build(),
            None => builder.build(),
        };

        self.cursor = Text::with_baseline(text, self.cursor, style, Baseline::Alphabetic)
            .draw(target)?;
        Ok(())
    }
}
