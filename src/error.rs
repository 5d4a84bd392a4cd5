use core::fmt;

/// Peripherals whose initialization is checked
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Peripheral {
    /// The TCPWM counter driving the Smart I/O input
    Pwm,
    /// The Smart I/O block on port 11
    SmartIo,
}

impl Peripheral {
    /// Driver name, as printed on the console
    pub fn name(self) -> &'static str {
        match self {
            Peripheral::Pwm => "TCPWM",
            Peripheral::SmartIo => "SmartIO",
        }
    }
}

/// A fatal bring-up failure. Neither kind is recoverable.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BringUpError {
    /// Board init (clocks, pins) returned a non-success `cy_rslt_t`
    BoardInit(u32),
    /// A peripheral driver rejected its configuration
    PeripheralInit { peripheral: Peripheral, status: u32 },
}

impl fmt::Display for BringUpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BringUpError::BoardInit(rslt) => {
                write!(f, "Board init failed with result: 0x{:08X}", rslt)
            }
            BringUpError::PeripheralInit { peripheral, status } => {
                write!(f, "{} init failed with error: {}", peripheral.name(), status)
            }
        }
    }
}
