//! Board constants.
//!
//! These come from the board's memory map and pin assignment and are
//! fixed at build time.

use core::fmt;

/// Start of the CM55 image region in external flash (`m55_nvm`)
pub const CM55_NVM_START: u32 = 0x6058_0000;

/// Size of the MCUboot header in front of each image
pub const MCUBOOT_HEADER_SIZE: u32 = 0x400;

/// How long to wait for the CM55 to start booting, in microseconds.
/// `0` waits until it does.
pub const CM55_BOOT_WAIT_US: u32 = 10;

/// Vector table of the CM55 application. Must be updated if the CM55
/// memory layout changes.
pub const CM55_APP_BOOT_ADDR: u32 = CM55_NVM_START + MCUBOOT_HEADER_SIZE;

pub const CM55_BOOT: CoreBoot = CoreBoot {
    address: CM55_APP_BOOT_ADDR,
    wait: BootWait::from_micros(CM55_BOOT_WAIT_US),
};

/// Pin carrying the Smart I/O output
pub const SMART_IO_OUTPUT: PinRef = PinRef { port: 11, pin: 3 };

/// Jumper needed to see the ramp on the board LED
pub const LED_JUMPER: &str = "P11[3](D3) to J7.4(USER_LED1)";

/// How long to wait for a secondary core to start booting.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootWait {
    Forever,
    Micros(u32),
}

impl BootWait {
    /// Uses the driver encoding, where `0` means "forever".
    pub const fn from_micros(us: u32) -> Self {
        if us == 0 {
            BootWait::Forever
        } else {
            BootWait::Micros(us)
        }
    }

    pub const fn as_micros(self) -> u32 {
        match self {
            BootWait::Forever => 0,
            BootWait::Micros(us) => us,
        }
    }
}

/// Where and how to boot a secondary core.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CoreBoot {
    /// Address of the image's vector table
    pub address: u32,
    pub wait: BootWait,
}

/// A GPIO, as `P<port>_<pin>`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinRef {
    pub port: u8,
    pub pin: u8,
}

impl fmt::Display for PinRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}_{}", self.port, self.pin)
    }
}
