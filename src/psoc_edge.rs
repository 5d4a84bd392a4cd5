//! The KIT_PSE84_EVAL board, CM33 non-secure side.
//!
//! Also provides the global logger and panic behavior for the firmware.

use core::sync::atomic::{AtomicBool, Ordering};

use defmt_rtt as _; // global logger
use embedded_hal_nb::serial::{ErrorKind, ErrorType, Write};
use panic_probe as _;
use pse84_pdl::{device, ffi, scb, smartio, syslib, tcpwm};

use crate::board::{self, Peripherals};
use crate::config::CoreBoot;

// same panicking *behavior* as `panic-probe` but doesn't print a panic message
// this prevents the panic message being printed *twice* when `defmt::panic` is invoked
#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}

static TAKEN: AtomicBool = AtomicBool::new(false);

/// The board before `cybsp_init`.
pub struct Board {
    _private: (),
}

impl Board {
    /// Returns `None` if the board was already taken.
    pub fn take() -> Option<Self> {
        if TAKEN.swap(true, Ordering::AcqRel) {
            None
        } else {
            Some(Board { _private: () })
        }
    }
}

impl board::Board for Board {
    type Console = DebugUart;
    type Pwm = SmartIoPwm;
    type SmartIo = SmartIo11;
    type Core = Cm55;
    type Cpu = Cm33;

    fn init(self) -> Result<Peripherals<Self>, u32> {
        pse84_pdl::board_init().map_err(|rslt| {
            defmt::error!("cybsp_init: {}", defmt::Display2Format(&rslt));
            u32::from(rslt)
        })?;

        // SAFETY: board init succeeded exactly once (guarded by `take`) and
        // each block is handed out once, below.
        unsafe {
            Ok(Peripherals {
                console: DebugUart(scb::Uart::new(device::DEBUG_UART_HW)),
                pwm: SmartIoPwm(tcpwm::Counter::new(
                    device::SMARTIO_PWM_HW,
                    device::SMARTIO_PWM_NUM,
                )),
                smart_io: SmartIo11(smartio::Port::new(device::SMART_IO_11_HW)),
                core: Cm55 { _private: () },
                cpu: Cm33 { _private: () },
            })
        }
    }
}

/// `CYBSP_DEBUG_UART`, wired to the KitProg3 USB-UART bridge
pub struct DebugUart(scb::Uart);

impl ErrorType for DebugUart {
    type Error = ErrorKind;
}

impl Write<u8> for DebugUart {
    fn write(&mut self, word: u8) -> nb::Result<(), Self::Error> {
        if self.0.put(word) {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        if self.0.is_tx_complete() {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}

impl board::Console for DebugUart {
    fn init(&mut self) {
        if let Err(status) = self.0.init(unsafe { &ffi::DEBUG_UART_CONFIG }) {
            defmt::warn!("debug UART init failed: {=u32}", status);
        }
        // console failures are not fatal, enable regardless
        self.0.enable();
    }
}

/// `CYBSP_SMARTIO_PWM`
pub struct SmartIoPwm(tcpwm::Counter);

impl board::PwmCounter for SmartIoPwm {
    fn init(&mut self) -> Result<(), u32> {
        self.0.pwm_init(unsafe { &ffi::SMARTIO_PWM_CONFIG })
    }

    fn enable(&mut self) {
        self.0.pwm_enable();
    }

    fn trigger_start(&mut self) {
        self.0.trigger_start_single();
    }
}

/// `CYBSP_SMART_IO_11`
pub struct SmartIo11(smartio::Port);

impl board::SmartIo for SmartIo11 {
    fn init(&mut self) -> Result<(), u32> {
        self.0.init(unsafe { &ffi::SMART_IO_11_CONFIG })
    }

    fn enable(&mut self) {
        self.0.enable();
    }
}

pub struct Cm55 {
    _private: (),
}

impl board::SecondaryCore for Cm55 {
    fn enable(&mut self, boot: &CoreBoot) {
        // SAFETY: `boot.address` is the CM55 image slot from the memory map.
        unsafe { syslib::enable_cm55(device::MXCM55, boot.address, boot.wait.as_micros()) }
    }
}

pub struct Cm33 {
    _private: (),
}

impl board::Cpu for Cm33 {
    fn enable_interrupts(&mut self) {
        // SAFETY: no interrupt handler shares state with the sequencer.
        unsafe { cortex_m::interrupt::enable() }
    }

    fn idle_hint(&mut self) {
        cortex_m::asm::nop();
    }
}
