//! SCB blocks in UART mode, low-level API only (no context, no interrupts)

use core::ptr;

use crate::ffi::{self, ScbType, ScbUartConfig};

// SCB_CTRL, offset 0
const SCB_CTRL_ENABLED: u32 = 1 << 31;

pub struct Uart {
    base: *mut ScbType,
}

impl Uart {
    /// # Safety
    ///
    /// `base` must point at an SCB block and no other `Uart` may exist for
    /// it.
    pub const unsafe fn new(base: *mut ScbType) -> Self {
        Uart { base }
    }

    /// `Cy_SCB_UART_Init` without a context
    #[inline]
    pub fn init(&mut self, config: &'static ScbUartConfig) -> Result<(), u32> {
        crate::check(unsafe { ffi::Cy_SCB_UART_Init(self.base, config, ptr::null_mut()) })
    }

    /// `Cy_SCB_UART_Enable`
    #[inline]
    pub fn enable(&mut self) {
        let ctrl = self.base.cast::<u32>();
        unsafe { ctrl.write_volatile(ctrl.read_volatile() | SCB_CTRL_ENABLED) }
    }

    /// Place one byte in the TX FIFO. Returns `false` if the FIFO is full.
    #[inline]
    pub fn put(&mut self, byte: u8) -> bool {
        unsafe { ffi::Cy_SCB_UART_PutArray(self.base, &byte, 1) == 1 }
    }

    /// `Cy_SCB_UART_IsTxComplete`
    #[inline]
    pub fn is_tx_complete(&self) -> bool {
        unsafe { ffi::Cy_SCB_UART_IsTxComplete(self.base) }
    }
}
