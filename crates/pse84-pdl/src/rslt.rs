use core::fmt;

/// Severity field of a `cy_rslt_t`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Severity {
    Info,
    Warning,
    Error,
    Fatal,
}

/// A `cy_rslt_t` as returned by the BSP and middleware.
///
/// Layout, least significant bit first:
///
/// * bits 0..16: result code
/// * bits 16..18: severity
/// * bits 18..32: module identifier
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CyRslt(pub u32);

const CODE_MASK: u32 = 0xFFFF;
const TYPE_POSITION: u32 = 16;
const TYPE_MASK: u32 = 0x3;
const MODULE_POSITION: u32 = 18;
const MODULE_MASK: u32 = 0x3FFF;

impl CyRslt {
    /// `CY_RSLT_SUCCESS`
    pub const SUCCESS: CyRslt = CyRslt(0);

    pub const fn is_success(self) -> bool {
        self.0 == Self::SUCCESS.0
    }

    pub const fn code(self) -> u16 {
        (self.0 & CODE_MASK) as u16
    }

    pub const fn severity(self) -> Severity {
        match (self.0 >> TYPE_POSITION) & TYPE_MASK {
            0 => Severity::Info,
            1 => Severity::Warning,
            2 => Severity::Error,
            _ => Severity::Fatal,
        }
    }

    pub const fn module(self) -> u16 {
        ((self.0 >> MODULE_POSITION) & MODULE_MASK) as u16
    }
}

impl From<u32> for CyRslt {
    fn from(raw: u32) -> Self {
        CyRslt(raw)
    }
}

impl From<CyRslt> for u32 {
    fn from(rslt: CyRslt) -> Self {
        rslt.0
    }
}

impl fmt::Display for CyRslt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:08X} (module 0x{:04X}, {:?}, code 0x{:04X})",
            self.0,
            self.module(),
            self.severity(),
            self.code()
        )
    }
}
