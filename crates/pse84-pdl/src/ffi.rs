//! Raw PDL and BSP declarations.
//!
//! Names follow the C headers; the generated configuration statics get
//! Rust-style names through `link_name`.

#![allow(non_snake_case)]

use core::marker::{PhantomData, PhantomPinned};

macro_rules! opaque {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[repr(C)]
        pub struct $name {
            _data: [u8; 0],
            _marker: PhantomData<(*mut u8, PhantomPinned)>,
        }
    };
}

opaque!(
    /// `TCPWM_Type`
    TcpwmType
);
opaque!(
    /// `SMARTIO_PRT_Type`
    SmartioPrtType
);
opaque!(
    /// `CySCB_Type`
    ScbType
);
opaque!(
    /// `MXCM55_Type`
    Mxcm55Type
);
opaque!(
    /// `cy_stc_tcpwm_pwm_config_t`, generated by the device configurator
    TcpwmPwmConfig
);
opaque!(
    /// `cy_stc_smartio_config_t`, generated by the device configurator
    SmartioConfig
);
opaque!(
    /// `cy_stc_scb_uart_config_t`, generated by the device configurator
    ScbUartConfig
);
opaque!(
    /// `cy_stc_scb_uart_context_t`
    ScbUartContext
);

// Generated configuration, from `cycfg_peripherals.c`
extern "C" {
    #[link_name = "CYBSP_SMARTIO_PWM_config"]
    pub static SMARTIO_PWM_CONFIG: TcpwmPwmConfig;

    #[link_name = "CYBSP_SMART_IO_11_config"]
    pub static SMART_IO_11_CONFIG: SmartioConfig;

    #[link_name = "CYBSP_DEBUG_UART_config"]
    pub static DEBUG_UART_CONFIG: ScbUartConfig;
}

extern "C" {
    pub fn cybsp_init() -> u32;

    pub fn Cy_TCPWM_PWM_Init(
        base: *mut TcpwmType,
        cntNum: u32,
        config: *const TcpwmPwmConfig,
    ) -> u32;

    pub fn Cy_SmartIO_Init(base: *mut SmartioPrtType, config: *const SmartioConfig) -> u32;
    pub fn Cy_SmartIO_Enable(base: *mut SmartioPrtType);

    pub fn Cy_SCB_UART_Init(
        base: *mut ScbType,
        config: *const ScbUartConfig,
        context: *mut ScbUartContext,
    ) -> u32;
    pub fn Cy_SCB_UART_PutArray(base: *mut ScbType, buffer: *const u8, size: u32) -> u32;
    pub fn Cy_SCB_UART_IsTxComplete(base: *const ScbType) -> bool;

    pub fn Cy_SysEnableCM55(base: *mut Mxcm55Type, vectorTableOffset: u32, waitus: u32);
}
