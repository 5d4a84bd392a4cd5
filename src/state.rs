//! Typestate wrappers for the peripherals touched during bring-up.
//!
//! Every transition consumes the previous state, so a peripheral can only
//! move forward (`Uninitialized` -> `Initialized` -> `Enabled` ->
//! `Running`) and each step happens at most once.

use core::marker::PhantomData;

use crate::board::{PwmCounter, SecondaryCore, SmartIo};
use crate::config::CoreBoot;

mod sealed {
    pub trait State {}
}

/// Marker for a peripheral state.
pub trait State: sealed::State {}

macro_rules! impl_state {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub struct $name;
            impl sealed::State for $name {}
            impl State for $name {}
        )*
    };
}

impl_state!(
    /// Not configured
    Uninitialized,
    /// Configured, output not connected
    Initialized,
    /// Output connected
    Enabled,
    /// Running on its own
    Running,
    /// Held in reset
    Held,
    /// Released, boot start requested
    Booting,
);

/// A PWM counter in state `S`.
pub struct Counter<P, S: State> {
    pwm: P,
    _state: PhantomData<S>,
}

impl<P, S: State> Counter<P, S> {
    fn into_state<T: State>(self) -> Counter<P, T> {
        Counter {
            pwm: self.pwm,
            _state: PhantomData,
        }
    }
}

impl<P: PwmCounter> Counter<P, Uninitialized> {
    pub fn new(pwm: P) -> Self {
        Counter {
            pwm,
            _state: PhantomData,
        }
    }

    pub fn init(mut self) -> Result<Counter<P, Initialized>, u32> {
        self.pwm.init()?;
        Ok(self.into_state())
    }
}

impl<P: PwmCounter> Counter<P, Initialized> {
    pub fn enable(mut self) -> Counter<P, Enabled> {
        self.pwm.enable();
        self.into_state()
    }
}

impl<P: PwmCounter> Counter<P, Enabled> {
    pub fn start(mut self) -> Counter<P, Running> {
        self.pwm.trigger_start();
        self.into_state()
    }
}

/// A Smart I/O block in state `S`.
pub struct LogicBlock<L, S: State> {
    block: L,
    _state: PhantomData<S>,
}

impl<L: SmartIo> LogicBlock<L, Uninitialized> {
    pub fn new(block: L) -> Self {
        LogicBlock {
            block,
            _state: PhantomData,
        }
    }

    pub fn init(mut self) -> Result<LogicBlock<L, Initialized>, u32> {
        self.block.init()?;
        Ok(LogicBlock {
            block: self.block,
            _state: PhantomData,
        })
    }
}

impl<L: SmartIo> LogicBlock<L, Initialized> {
    pub fn enable(mut self) -> LogicBlock<L, Enabled> {
        self.block.enable();
        LogicBlock {
            block: self.block,
            _state: PhantomData,
        }
    }
}

/// A secondary core in state `S`.
pub struct Core<C, S: State> {
    core: C,
    _state: PhantomData<S>,
}

impl<C: SecondaryCore> Core<C, Held> {
    pub fn new(core: C) -> Self {
        Core {
            core,
            _state: PhantomData,
        }
    }

    /// Release the core. It is assumed to boot; nothing checks.
    pub fn release(mut self, boot: &CoreBoot) -> Core<C, Booting> {
        self.core.enable(boot);
        Core {
            core: self.core,
            _state: PhantomData,
        }
    }
}
