//! Core OLED driver wrapping the `ssd1306` crate in buffered graphics mode.
//!
//! [`OledDriver`] manages the SSD1306 display lifecycle: construction
//! without I2C traffic, explicit initialisation, and frame buffer flush.
//! Everything is blocking — the bring-up sequence is strictly linear and
//! has no suspension points.

use display_interface_i2c::I2CInterface;
use embedded_hal::i2c::I2c;
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, I2CDisplayInterface, Ssd1306};

use crate::bootstrap::BootDisplay;
use crate::error::OledError;
use crate::splash::{draw_splash, Splash};

/// Standard 7-bit I2C address of an SSD1306 module (the alternative is 0x3D).
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Concrete display type used internally by [`OledDriver`].
type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Blocking driver for an SSD1306 128×64 OLED display over I2C.
///
/// # Lifecycle
///
/// 1. [`OledDriver::new()`] — constructs the driver without any I2C traffic.
/// 2. [`OledDriver::init()`] — sends the SSD1306 initialisation sequence.
/// 3. Draw into the frame buffer via [`OledDriver::display_mut()`].
/// 4. [`OledDriver::flush()`] — transfers the frame buffer to hardware.
///
/// The driver refuses to touch display state before `init()` has
/// succeeded: `flush()` returns [`OledError::NotInitialized`] and
/// `display_mut()` returns `None` until then.
pub struct OledDriver<I2C> {
    display: Display<I2C>,
    /// Set to `true` after a successful `init()` call.
    initialized: bool,
}

impl<I2C> OledDriver<I2C>
where
    I2C: I2c,
{
    /// Construct an uninitialised driver.
    ///
    /// No I2C traffic is generated. You **must** call [`init()`](Self::init)
    /// before any display operations.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access).
    /// * `address` — 7-bit I2C device address (typically [`DEFAULT_ADDRESS`]).
    pub fn new(i2c: I2C, address: u8) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self {
            display,
            initialized: false,
        }
    }

    /// Initialise the SSD1306 hardware.
    ///
    /// Sends the display initialisation command sequence over I2C. Must be
    /// called exactly once before any rendering or flush operations.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::InitFailed`] if the display does not respond.
    pub fn init(&mut self) -> Result<(), OledError> {
        self.display.init().map_err(|_| OledError::InitFailed)?;
        self.initialized = true;
        Ok(())
    }

    /// Clear the in-memory frame buffer.
    ///
    /// Does **not** send any I2C traffic — the display is unchanged until
    /// [`flush()`](Self::flush) is called. Safe to call before
    /// initialisation (the buffer is host-side state).
    pub fn clear_buffer(&mut self) {
        self.display.clear_buffer();
    }

    /// Transfer the frame buffer to the display via I2C.
    ///
    /// At 400 kHz I2C this takes approximately 20 ms for a full 1024-byte
    /// frame.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::NotInitialized`] if [`init()`](Self::init) has
    /// not succeeded, or [`OledError::Display`] on a bus-level failure.
    pub fn flush(&mut self) -> Result<(), OledError> {
        if !self.initialized {
            return Err(OledError::NotInitialized);
        }
        self.display.flush()?;
        Ok(())
    }

    /// Returns a mutable reference to the underlying `ssd1306` display,
    /// allowing direct use of `embedded-graphics` [`DrawTarget`] APIs.
    ///
    /// Returns `None` if the driver has not been initialised.
    ///
    /// [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget
    pub fn display_mut(&mut self) -> Option<&mut Display<I2C>> {
        if self.initialized {
            Some(&mut self.display)
        } else {
            None
        }
    }

    /// Check whether the display has been successfully initialised.
    ///
    /// No I2C traffic is generated.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl<I2C> BootDisplay for OledDriver<I2C>
where
    I2C: I2c,
{
    fn init(&mut self) -> Result<(), OledError> {
        OledDriver::init(self)
    }

    fn clear_buffer(&mut self) {
        OledDriver::clear_buffer(self);
    }

    fn draw(&mut self, splash: &Splash) -> Result<(), OledError> {
        match self.display_mut() {
            Some(display) => {
                draw_splash(display, splash)?;
                Ok(())
            }
            None => Err(OledError::NotInitialized),
        }
    }

    fn flush(&mut self) -> Result<(), OledError> {
        OledDriver::flush(self)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
