use crate::ffi::{self, Mxcm55Type};

/// Release the CM55 from reset with its vector table at `vector_table`.
///
/// `wait_us` bounds how long the PDL polls for the core to start booting;
/// `0` waits until it does.
///
/// # Safety
///
/// `base` must be the `MXCM55` block and `vector_table` must hold a valid
/// CM55 image.
#[inline]
pub unsafe fn enable_cm55(base: *mut Mxcm55Type, vector_table: u32, wait_us: u32) {
    ffi::Cy_SysEnableCM55(base, vector_table, wait_us)
}
