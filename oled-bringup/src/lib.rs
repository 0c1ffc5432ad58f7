//! Bring-up routine for an SSD1306 (128×64) OLED display over I2C.
//!
//! This crate provides [`OledDriver`], a wrapper around the [`ssd1306`]
//! crate in blocking buffered-graphics mode, and [`bring_up`], the one-shot
//! startup sequence that initialises the display and optionally renders a
//! static [`Splash`] banner.
//!
//! The sequence is strictly linear: initialise, branch on the result, then
//! either render or give up. The outcome is a [`BootState`] — `Ready` on
//! success, `Halted` if the display never answered. The caller decides what
//! to do with a `Halted` board (on bare metal: log it and park the core).
//!
//! # Quick Start
//!
//! ```ignore
//! use oled_bringup::{bring_up, BootState, OledDriver, Splash, DEFAULT_ADDRESS};
//!
//! // In your firmware main:
//! let mut oled = OledDriver::new(i2c, DEFAULT_ADDRESS);
//! match bring_up(&mut oled, Some(&Splash::banner())) {
//!     BootState::Ready => { /* display shows the banner */ }
//!     BootState::Halted => { /* "OLED not found" already logged; park */ }
//! }
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via [`defmt`]. Off by default so
//!   host tests link without a global logger; the firmware turns it on.

#![no_std]

pub mod bootstrap;
pub mod driver;
pub mod error;
pub mod splash;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use bootstrap::{bring_up, BootDisplay, BootState};
pub use driver::{OledDriver, DEFAULT_ADDRESS};
pub use error::OledError;
pub use splash::{draw_splash, Splash, DISPLAY_HEIGHT, DISPLAY_WIDTH};
