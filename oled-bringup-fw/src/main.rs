//! oled-bringup-fw
//!
//! Bring-up firmware for an SSD1306 128×64 OLED on the Raspberry Pi
//! Pico 2. Initialises the display over I2C0 and draws the stock
//! three-line banner:
//!
//! 1. The defmt-over-RTT console comes up with the runtime.
//! 2. `bring_up()` initialises the display and renders the banner.
//! 3. The core parks. If the display was not found, "OLED not found" is
//!    the last console line before parking.
//!
//! Setup runs exactly once per power cycle; there is no ongoing work.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use {defmt_rtt as _, panic_probe as _};

use oled_bringup::{bring_up, BootState, OledDriver, Splash, DEFAULT_ADDRESS};

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("oled-bringup-fw starting");

    // —— Pin assignments ————————————————————————————————————————————————
    // I2C_SDA → GP20  (p.PIN_20)
    // I2C_SCL → GP21  (p.PIN_21)
    // ———————————————————————————————————————————————————————————————————

    // Blocking I2C0 — the bring-up sequence is linear, nothing else
    // contends for the bus.
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_21, p.PIN_20, i2c::Config::default());

    let mut oled = OledDriver::new(i2c, DEFAULT_ADDRESS);

    // Swap in `None` for the bare init-only variant.
    match bring_up(&mut oled, Some(&Splash::banner())) {
        BootState::Ready => info!("Display ready"),
        BootState::Halted => {
            // "OLED not found" already logged by bring_up(). Nothing left
            // to do this power cycle.
        }
    }

    // Terminal state either way: park instead of spinning.
    core::future::pending::<()>().await
}
