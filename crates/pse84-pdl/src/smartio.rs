//! Smart I/O ports

use crate::ffi::{self, SmartioConfig, SmartioPrtType};

/// The Smart I/O fabric of one GPIO port.
pub struct Port {
    base: *mut SmartioPrtType,
}

impl Port {
    /// # Safety
    ///
    /// `base` must point at a Smart I/O port and no other `Port` may exist
    /// for it.
    pub const unsafe fn new(base: *mut SmartioPrtType) -> Self {
        Port { base }
    }

    /// `Cy_SmartIO_Init`
    #[inline]
    pub fn init(&mut self, config: &'static SmartioConfig) -> Result<(), u32> {
        crate::check(unsafe { ffi::Cy_SmartIO_Init(self.base, config) })
    }

    /// `Cy_SmartIO_Enable`
    #[inline]
    pub fn enable(&mut self) {
        unsafe { ffi::Cy_SmartIO_Enable(self.base) }
    }
}
