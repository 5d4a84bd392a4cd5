//! A board that records what was done to it.
//!
//! Everything goes into a shared [`Recorder`], so a test can check the
//! order of operations after the sequencer has taken the peripherals apart.
//! Only `core` and `heapless` are used, so it runs on the target too.

use core::cell::{Cell, RefCell};

use embedded_hal_nb::serial::{ErrorKind, ErrorType, Write};
use heapless::{String, Vec};

use crate::board::{Board, Console, Cpu, Peripherals, PwmCounter, SecondaryCore, SmartIo};
use crate::config::CoreBoot;

pub const MAX_STEPS: usize = 32;
pub const CONSOLE_CAPACITY: usize = 1024;

/// Panic message of [`MockCpu::idle_hint`] once the idle limit is hit
pub const IDLE_LIMIT_REACHED: &str = "idle limit reached";

/// A side effect observed by the mock
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    BoardInit,
    ConsoleInit,
    EnableInterrupts,
    PwmInit,
    PwmEnable,
    PwmStart,
    SmartIoInit,
    SmartIoEnable,
    CoreEnable(CoreBoot),
}

pub struct Recorder {
    steps: RefCell<Vec<Step, MAX_STEPS>>,
    console: RefCell<String<CONSOLE_CAPACITY>>,
    flushes: Cell<usize>,
    idle_turns: Cell<u32>,
}

impl Recorder {
    pub const fn new() -> Self {
        Recorder {
            steps: RefCell::new(Vec::new()),
            console: RefCell::new(String::new()),
            flushes: Cell::new(0),
            idle_turns: Cell::new(0),
        }
    }

    fn record(&self, step: Step) {
        if self.steps.borrow_mut().push(step).is_err() {
            panic!("step log full");
        }
    }

    pub fn steps(&self) -> Vec<Step, MAX_STEPS> {
        self.steps.borrow().clone()
    }

    pub fn saw(&self, step: Step) -> bool {
        self.steps.borrow().contains(&step)
    }

    /// Number of times the secondary core was released
    pub fn core_enables(&self) -> usize {
        self.steps
            .borrow()
            .iter()
            .filter(|s| matches!(s, Step::CoreEnable(_)))
            .count()
    }

    pub fn console_text(&self) -> String<CONSOLE_CAPACITY> {
        self.console.borrow().clone()
    }

    pub fn flushes(&self) -> usize {
        self.flushes.get()
    }

    pub fn idle_turns(&self) -> u32 {
        self.idle_turns.get()
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Recorder::new()
    }
}

/// The board. Every part succeeds unless told otherwise.
pub struct MockBoard<'a> {
    rec: &'a Recorder,
    board_status: u32,
    pwm_status: u32,
    smart_io_status: u32,
    idle_limit: Option<u32>,
}

impl<'a> MockBoard<'a> {
    pub fn new(rec: &'a Recorder) -> Self {
        MockBoard {
            rec,
            board_status: 0,
            pwm_status: 0,
            smart_io_status: 0,
            idle_limit: None,
        }
    }

    pub fn fail_board(mut self, rslt: u32) -> Self {
        self.board_status = rslt;
        self
    }

    pub fn fail_pwm(mut self, status: u32) -> Self {
        self.pwm_status = status;
        self
    }

    pub fn fail_smart_io(mut self, status: u32) -> Self {
        self.smart_io_status = status;
        self
    }

    /// Panic with [`IDLE_LIMIT_REACHED`] after `turns` turns of the idle loop.
    pub fn idle_limit(mut self, turns: u32) -> Self {
        self.idle_limit = Some(turns);
        self
    }
}

impl<'a> Board for MockBoard<'a> {
    type Console = MockConsole<'a>;
    type Pwm = MockPwm<'a>;
    type SmartIo = MockSmartIo<'a>;
    type Core = MockCore<'a>;
    type Cpu = MockCpu<'a>;

    fn init(self) -> Result<Peripherals<Self>, u32> {
        self.rec.record(Step::BoardInit);
        if self.board_status != 0 {
            return Err(self.board_status);
        }

        Ok(Peripherals {
            console: MockConsole::new(self.rec),
            pwm: MockPwm::new(self.rec, self.pwm_status),
            smart_io: MockSmartIo::new(self.rec, self.smart_io_status),
            core: MockCore::new(self.rec),
            cpu: MockCpu {
                rec: self.rec,
                idle_limit: self.idle_limit,
            },
        })
    }
}

pub struct MockConsole<'a> {
    rec: &'a Recorder,
    busy_every_other: bool,
    busy: bool,
}

impl<'a> MockConsole<'a> {
    pub fn new(rec: &'a Recorder) -> Self {
        MockConsole {
            rec,
            busy_every_other: false,
            busy: false,
        }
    }

    /// Answer `WouldBlock` to every other write.
    pub fn busy_every_other_write(mut self) -> Self {
        self.busy_every_other = true;
        self
    }
}

impl ErrorType for MockConsole<'_> {
    type Error = ErrorKind;
}

impl Write<u8> for MockConsole<'_> {
    fn write(&mut self, word: u8) -> nb::Result<(), Self::Error> {
        if self.busy_every_other {
            self.busy = !self.busy;
            if self.busy {
                return Err(nb::Error::WouldBlock);
            }
        }

        self.rec
            .console
            .borrow_mut()
            .push(word as char)
            .map_err(|_| nb::Error::Other(ErrorKind::Overrun))
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        self.rec.flushes.set(self.rec.flushes.get() + 1);
        Ok(())
    }
}

impl Console for MockConsole<'_> {
    fn init(&mut self) {
        self.rec.record(Step::ConsoleInit);
    }
}

pub struct MockPwm<'a> {
    rec: &'a Recorder,
    status: u32,
}

impl<'a> MockPwm<'a> {
    /// `status` is what `init` reports; `0` is success.
    pub fn new(rec: &'a Recorder, status: u32) -> Self {
        MockPwm { rec, status }
    }
}

impl PwmCounter for MockPwm<'_> {
    fn init(&mut self) -> Result<(), u32> {
        self.rec.record(Step::PwmInit);
        match self.status {
            0 => Ok(()),
            status => Err(status),
        }
    }

    fn enable(&mut self) {
        self.rec.record(Step::PwmEnable);
    }

    fn trigger_start(&mut self) {
        self.rec.record(Step::PwmStart);
    }
}

pub struct MockSmartIo<'a> {
    rec: &'a Recorder,
    status: u32,
}

impl<'a> MockSmartIo<'a> {
    /// `status` is what `init` reports; `0` is success.
    pub fn new(rec: &'a Recorder, status: u32) -> Self {
        MockSmartIo { rec, status }
    }
}

impl SmartIo for MockSmartIo<'_> {
    fn init(&mut self) -> Result<(), u32> {
        self.rec.record(Step::SmartIoInit);
        match self.status {
            0 => Ok(()),
            status => Err(status),
        }
    }

    fn enable(&mut self) {
        self.rec.record(Step::SmartIoEnable);
    }
}

pub struct MockCore<'a> {
    rec: &'a Recorder,
}

impl<'a> MockCore<'a> {
    pub fn new(rec: &'a Recorder) -> Self {
        MockCore { rec }
    }
}

impl SecondaryCore for MockCore<'_> {
    fn enable(&mut self, boot: &CoreBoot) {
        self.rec.record(Step::CoreEnable(*boot));
    }
}

pub struct MockCpu<'a> {
    rec: &'a Recorder,
    idle_limit: Option<u32>,
}

impl Cpu for MockCpu<'_> {
    fn enable_interrupts(&mut self) {
        self.rec.record(Step::EnableInterrupts);
    }

    fn idle_hint(&mut self) {
        let turns = self.rec.idle_turns.get() + 1;
        self.rec.idle_turns.set(turns);

        if let Some(limit) = self.idle_limit {
            if turns >= limit {
                panic!("{}", IDLE_LIMIT_REACHED);
            }
        }
    }
}
