//! TCPWM (timer, counter, PWM) counters

use crate::ffi::{self, TcpwmPwmConfig, TcpwmType};

// TCPWM_GRP_CNT_V2 register layout
const GRP_STRIDE: usize = 0x1_0000;
const CNT_STRIDE: usize = 0x80;
const CNT_CTRL: usize = 0x00;
const CNT_TR_CMD: usize = 0x40;
const CTRL_ENABLED: u32 = 1 << 31;
const TR_CMD_START: u32 = 1 << 4;

/// Build a counter number from group and counter index, like
/// `TCPWM_GRP_CNT(grp, cnt)`.
pub const fn cnt_num(group: u32, counter: u32) -> u32 {
    (group << 8) | (counter & 0xFF)
}

const fn cnt_offset(cnt_num: u32) -> usize {
    let group = (cnt_num >> 8) as usize;
    let counter = (cnt_num & 0xFF) as usize;
    group * GRP_STRIDE + counter * CNT_STRIDE
}

/// Byte offset of the counter's `CTRL` register from the block base.
pub const fn ctrl_offset(cnt_num: u32) -> usize {
    cnt_offset(cnt_num) + CNT_CTRL
}

/// Byte offset of the counter's `TR_CMD` register from the block base.
pub const fn tr_cmd_offset(cnt_num: u32) -> usize {
    cnt_offset(cnt_num) + CNT_TR_CMD
}

/// One counter of a TCPWM block.
pub struct Counter {
    base: *mut TcpwmType,
    num: u32,
}

impl Counter {
    /// # Safety
    ///
    /// `base` must point at a TCPWM block, `num` must name a counter of it,
    /// and no other `Counter` may exist for the same pair.
    pub const unsafe fn new(base: *mut TcpwmType, num: u32) -> Self {
        Counter { base, num }
    }

    /// `Cy_TCPWM_PWM_Init`
    #[inline]
    pub fn pwm_init(&mut self, config: &'static TcpwmPwmConfig) -> Result<(), u32> {
        crate::check(unsafe { ffi::Cy_TCPWM_PWM_Init(self.base, self.num, config) })
    }

    fn reg(&self, offset: usize) -> *mut u32 {
        unsafe { self.base.cast::<u8>().add(offset) }.cast::<u32>()
    }

    /// `Cy_TCPWM_PWM_Enable` (header inline, no symbol)
    #[inline]
    pub fn pwm_enable(&mut self) {
        let ctrl = self.reg(ctrl_offset(self.num));
        unsafe { ctrl.write_volatile(ctrl.read_volatile() | CTRL_ENABLED) }
    }

    /// `Cy_TCPWM_TriggerStart_Single` (header inline, no symbol)
    #[inline]
    pub fn trigger_start_single(&mut self) {
        unsafe { self.reg(tr_cmd_offset(self.num)).write_volatile(TR_CMD_START) }
    }
}
