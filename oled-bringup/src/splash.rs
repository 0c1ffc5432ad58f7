//! Static splash text and the rendering logic that draws it.
//!
//! This module defines the immutable [`Splash`] payload (up to three lines
//! of static text) and the [`draw_splash`] function that draws it with
//! `embedded-graphics` at the top-left corner of the frame.

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};

/// Total display width in pixels.
pub const DISPLAY_WIDTH: u32 = 128;
/// Total display height in pixels.
pub const DISPLAY_HEIGHT: u32 = 64;

/// Maximum number of splash lines.
pub const MAX_LINES: usize = 3;

/// Vertical advance per text line in pixels (the 6×10 font's line height).
const LINE_HEIGHT: i32 = 10;

// ── Splash ───────────────────────────────────────────────────────────────

/// Immutable splash text payload: up to [`MAX_LINES`] static lines, drawn
/// once in order during bring-up.
///
/// Fixed-size storage avoids heap allocation; empty slots are `None` and
/// are skipped without advancing a row.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Splash {
    lines: [Option<&'static str>; MAX_LINES],
}

impl Splash {
    /// A splash with no lines. Drawing it touches no pixels.
    pub const fn empty() -> Self {
        Self {
            lines: [None; MAX_LINES],
        }
    }

    /// The stock three-line boot banner.
    pub const fn banner() -> Self {
        Self {
            lines: [
                Some("Arduino U"),
                Some("OLED with I2C"),
                Some("Hello, kshitij!!"),
            ],
        }
    }

    /// Construct from a slice of lines.
    ///
    /// Lines beyond [`MAX_LINES`] are silently dropped.
    pub fn from_lines(lines: &[&'static str]) -> Self {
        let mut splash = Self::empty();
        for (slot, &line) in splash.lines.iter_mut().zip(lines.iter()) {
            *slot = Some(line);
        }
        splash
    }

    /// Iterate over the populated lines, in order.
    pub fn lines(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.lines.iter().flatten().copied()
    }

    /// Number of populated lines.
    pub fn line_count(&self) -> usize {
        self.lines.iter().flatten().count()
    }
}

// ── Rendering ────────────────────────────────────────────────────────────

/// Top-left corner of text row `row`.
///
/// The cursor starts at the origin and advances one font line height per
/// row, matching a scale-1 text cursor on a 128×64 panel.
fn line_origin(row: usize) -> Point {
    Point::new(0, row as i32 * LINE_HEIGHT)
}

/// Draw a [`Splash`] into a display buffer using `embedded-graphics`.
///
/// Each line is drawn in the 6×10 monospace font, foreground-only
/// (`BinaryColor::On`, transparent background), starting at the origin
/// with one line advance per row. Nothing is flushed here — the caller
/// owns the flush.
///
/// # Example
///
/// ```no_run
/// # use oled_bringup::splash::{draw_splash, Splash};
/// # fn example(display: &mut impl embedded_graphics::draw_target::DrawTarget<Color = embedded_graphics::pixelcolor::BinaryColor>) {
/// draw_splash(display, &Splash::banner()).ok();
/// # }
/// ```
pub fn draw_splash<D>(display: &mut D, splash: &Splash) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let text_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

    for (row, line) in splash.lines().enumerate() {
        Text::with_baseline(line, line_origin(row), text_style, Baseline::Top).draw(display)?;
    }

    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────
