//! What the bring-up needs from the board support layer.
//!
//! Each trait covers one hardware block. Configuration (pin routing,
//! timing, the Smart I/O lookup tables) is owned by the implementation;
//! the sequencer only decides when things happen.

use crate::config::CoreBoot;

/// A board that has not been initialized yet.
pub trait Board: Sized {
    type Console: Console;
    type Pwm: PwmCounter;
    type SmartIo: SmartIo;
    type Core: SecondaryCore;
    type Cpu: Cpu;

    /// Bring up clocks and pins and hand out the peripherals.
    ///
    /// On failure the raw `cy_rslt_t` is returned and nothing has been
    /// handed out.
    fn init(self) -> Result<Peripherals<Self>, u32>;
}

/// The peripherals of an initialized board, none of them configured yet.
pub struct Peripherals<B: Board> {
    pub console: B::Console,
    pub pwm: B::Pwm,
    pub smart_io: B::SmartIo,
    pub core: B::Core,
    pub cpu: B::Cpu,
}

/// Human readable text output. Failures are not checked.
pub trait Console: embedded_hal_nb::serial::Write<u8> {
    fn init(&mut self);
}

/// A timer/counter used in PWM mode.
pub trait PwmCounter {
    /// Apply the PWM configuration. `Err` carries the driver status.
    fn init(&mut self) -> Result<(), u32>;

    /// Connect the counter; the output is live but not counting.
    fn enable(&mut self);

    /// Start counting. From here on the hardware runs on its own.
    fn trigger_start(&mut self);
}

/// A Smart I/O block.
pub trait SmartIo {
    /// Load the sequential logic configuration. `Err` carries the driver
    /// status.
    fn init(&mut self) -> Result<(), u32>;

    /// Route the port through the logic fabric.
    fn enable(&mut self);
}

/// A core that is held in reset until released.
pub trait SecondaryCore {
    /// Release the core. Waiting for boot start is bounded by `boot.wait`;
    /// what happens on timeout is up to the implementation.
    fn enable(&mut self, boot: &CoreBoot);
}

/// The core running this program.
pub trait Cpu {
    fn enable_interrupts(&mut self);

    /// Called on every turn of the idle loop.
    fn idle_hint(&mut self);
}
