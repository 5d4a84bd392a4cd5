//! Bindings to the parts of the PSOC Edge E84 peripheral driver library
//! (PDL) and generated board-support package (BSP) that the CM33 bring-up
//! needs.
//!
//! The PDL and the BSP are C code built by the board project into one
//! static archive. `build.rs` links it from `PSE84_BSP_LIB_DIR` (archive
//! name `libpse84_bsp.a`, or `PSE84_BSP_LIB`) when building for the
//! target. Only the symbols used here are declared; the configuration
//! structures generated by the device configurator are treated as opaque.
//!
//! A few PDL helpers only exist as header inlines, so they have no symbol
//! to link against. Those are reimplemented here as volatile register
//! accesses.

#![cfg_attr(not(test), no_std)]

pub mod device;
pub mod ffi;
#[cfg(test)]
#[allow(dead_code)]
mod link;
mod rslt;
pub mod scb;
pub mod smartio;
pub mod syslib;
pub mod tcpwm;

pub use rslt::{CyRslt, Severity};

/// Status value shared by the PDL drivers for "no error"
/// (`CY_TCPWM_SUCCESS`, `CY_SMARTIO_SUCCESS`, `CY_SCB_UART_SUCCESS`).
pub const PDL_SUCCESS: u32 = 0;

/// Turn a PDL driver status into a `Result`, keeping the raw code on error.
pub(crate) fn check(status: u32) -> Result<(), u32> {
    if status == PDL_SUCCESS {
        Ok(())
    } else {
        Err(status)
    }
}

/// Initialize clocks, pins and the generated peripheral configuration.
///
/// Wraps `cybsp_init`. Must be called once, before any other function in
/// this crate.
#[inline]
pub fn board_init() -> Result<(), CyRslt> {
    let rslt = CyRslt::from(unsafe { ffi::cybsp_init() });
    if rslt.is_success() {
        Ok(())
    } else {
        Err(rslt)
    }
}
