//! Instance addresses and board assignments.
//!
//! Addresses are the non-secure aliases from the E84 device header. The
//! assignments (which counter, which port, which SCB) mirror the macros in
//! the generated `cycfg_peripherals.h` and must be kept in sync with the
//! board's `design.modus`.

use crate::ffi::{Mxcm55Type, ScbType, SmartioPrtType, TcpwmType};
use crate::tcpwm;

const TCPWM0_BASE: usize = 0x4240_0000;
const SMARTIO_BASE: usize = 0x4242_0000;
const SMARTIO_PRT_STRIDE: usize = 0x100;
const SCB2_BASE: usize = 0x4262_0000;
const MXCM55_BASE: usize = 0x4400_0000;

/// `TCPWM0`
pub const TCPWM0: *mut TcpwmType = TCPWM0_BASE as *mut TcpwmType;

/// `SMARTIO_PRT<n>`
pub const fn smartio_prt(port: usize) -> *mut SmartioPrtType {
    (SMARTIO_BASE + port * SMARTIO_PRT_STRIDE) as *mut SmartioPrtType
}

/// `SCB2`
pub const SCB2: *mut ScbType = SCB2_BASE as *mut ScbType;

/// `MXCM55`
pub const MXCM55: *mut Mxcm55Type = MXCM55_BASE as *mut Mxcm55Type;

/// `CYBSP_SMARTIO_PWM_HW`
pub const SMARTIO_PWM_HW: *mut TcpwmType = TCPWM0;

/// `CYBSP_SMARTIO_PWM_NUM`
pub const SMARTIO_PWM_NUM: u32 = tcpwm::cnt_num(0, 3);

/// `CYBSP_SMART_IO_11_HW`
pub const SMART_IO_11_HW: *mut SmartioPrtType = smartio_prt(11);

/// `CYBSP_DEBUG_UART_HW`
pub const DEBUG_UART_HW: *mut ScbType = SCB2;

