//! One-shot display bring-up sequence.
//!
//! [`bring_up`] drives a [`BootDisplay`] from power-on to one of two
//! terminal states: [`BootState::Ready`] (initialised, banner drawn) or
//! [`BootState::Halted`] (hardware never answered). There is no retry and
//! no transition back — a `Halted` board needs an external reset.

use crate::error::OledError;
use crate::splash::Splash;

// ── BootDisplay ──────────────────────────────────────────────────────────

/// The display operations the bring-up sequence needs.
///
/// [`OledDriver`](crate::OledDriver) is the hardware implementation; tests
/// substitute a scripted fake to check the call sequence.
pub trait BootDisplay {
    /// Send the hardware initialisation sequence.
    fn init(&mut self) -> Result<(), OledError>;

    /// Clear the in-memory frame buffer.
    fn clear_buffer(&mut self);

    /// Draw a splash into the frame buffer.
    fn draw(&mut self, splash: &Splash) -> Result<(), OledError>;

    /// Transfer the frame buffer to the hardware.
    fn flush(&mut self) -> Result<(), OledError>;
}

// ── BootState ────────────────────────────────────────────────────────────

/// Terminal outcome of the bring-up sequence.
///
/// Both states are final: the sequence runs once per power cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootState {
    /// Display initialised; the splash (if any) is on screen.
    Ready,
    /// Display never acknowledged initialisation. No further display
    /// work will happen this power cycle; the caller should park.
    Halted,
}

// ── Bring-up ─────────────────────────────────────────────────────────────

/// Bring the display from power-on to a known state, optionally drawing a
/// splash.
///
/// # Control flow
///
/// 1. Initialise the hardware. On failure, log `"OLED not found"` and
///    return [`BootState::Halted`] — nothing is ever drawn.
/// 2. With `splash = None`, stop here: [`BootState::Ready`] with the
///    display cleared to its power-on state.
/// 3. With `splash = Some(..)`, run exactly once, in order: clear the
///    frame buffer, draw the lines, flush to hardware. The content is
///    immutable once drawn.
///
/// A post-init draw or flush fault is logged and the boot still completes
/// `Ready`: the only recognised fatal failure is the absent display.
pub fn bring_up<D>(display: &mut D, splash: Option<&Splash>) -> BootState
where
    D: BootDisplay,
{
    if let Err(_e) = display.init() {
        #[cfg(feature = "defmt")]
        defmt::error!("OLED not found");
        return BootState::Halted;
    }

    #[cfg(feature = "defmt")]
    defmt::info!("OLED initialised");

    if let Some(splash) = splash {
        display.clear_buffer();

        if let Err(_e) = display.draw(splash) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Splash draw failed: {}", _e);
            return BootState::Ready;
        }

        if let Err(_e) = display.flush() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Splash flush failed: {}", _e);
        }
    }

    BootState::Ready
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    /// One recorded display call.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        Init,
        Clear,
        Draw,
        Flush,
    }

    /// Scripted display: records every call and fails the steps it is
    /// told to fail.
    #[derive(Default)]
    struct ScriptedDisplay {
        fail_init: bool,
        fail_draw: bool,
        fail_flush: bool,
        ops: Vec<Op, 16>,
    }

    impl BootDisplay for ScriptedDisplay {
        fn init(&mut self) -> Result<(), OledError> {
            self.ops.push(Op::Init).unwrap();
            if self.fail_init {
                Err(OledError::InitFailed)
            } else {
                Ok(())
            }
        }

        fn clear_buffer(&mut self) {
            self.ops.push(Op::Clear).unwrap();
        }

        fn draw(&mut self, _splash: &Splash) -> Result<(), OledError> {
            self.ops.push(Op::Draw).unwrap();
            if self.fail_draw {
                Err(OledError::NotInitialized)
            } else {
                Ok(())
            }
        }

        fn flush(&mut self) -> Result<(), OledError> {
            self.ops.push(Op::Flush).unwrap();
            if self.fail_flush {
                Err(OledError::NotInitialized)
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn init_failure_halts_without_drawing() {
        let mut display = ScriptedDisplay {
            fail_init: true,
            ..Default::default()
        };

        let state = bring_up(&mut display, Some(&Splash::banner()));

        assert_eq!(state, BootState::Halted);
        // No clear, draw, or flush after a failed init.
        assert_eq!(&display.ops[..], &[Op::Init]);
    }

    #[test]
    fn happy_path_runs_each_step_once_in_order() {
        let mut display = ScriptedDisplay::default();

        let state = bring_up(&mut display, Some(&Splash::banner()));

        assert_eq!(state, BootState::Ready);
        assert_eq!(&display.ops[..], &[Op::Init, Op::Clear, Op::Draw, Op::Flush]);
    }

    #[test]
    fn bare_variant_initialises_without_drawing() {
        let mut display = ScriptedDisplay::default();

        let state = bring_up(&mut display, None);

        assert_eq!(state, BootState::Ready);
        assert_eq!(&display.ops[..], &[Op::Init]);
    }

    #[test]
    fn draw_fault_skips_flush_but_stays_ready() {
        let mut display = ScriptedDisplay {
            fail_draw: true,
            ..Default::default()
        };

        let state = bring_up(&mut display, Some(&Splash::banner()));

        assert_eq!(state, BootState::Ready);
        assert_eq!(&display.ops[..], &[Op::Init, Op::Clear, Op::Draw]);
    }

    #[test]
    fn flush_fault_stays_ready() {
        let mut display = ScriptedDisplay {
            fail_flush: true,
            ..Default::default()
        };

        let state = bring_up(&mut display, Some(&Splash::banner()));

        assert_eq!(state, BootState::Ready);
        assert_eq!(&display.ops[..], &[Op::Init, Op::Clear, Op::Draw, Op::Flush]);
    }

    #[test]
    fn empty_splash_still_clears_and_flushes() {
        let mut display = ScriptedDisplay::default();

        let state = bring_up(&mut display, Some(&Splash::empty()));

        assert_eq!(state, BootState::Ready);
        assert_eq!(&display.ops[..], &[Op::Init, Op::Clear, Op::Draw, Op::Flush]);
    }
}
