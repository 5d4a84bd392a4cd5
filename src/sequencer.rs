//! The bring-up sequence.
//!
//! Strictly linear: every step runs once, in order, and the first failure
//! ends the sequence. Nothing already started is stopped again; there is
//! nothing to fall back to.

use crate::board::{Board, Console, Cpu, Peripherals};
use crate::config::{self, CoreBoot};
use crate::console;
use crate::error::{BringUpError, Peripheral};
use crate::state::{self, Booting, Core, Counter, Enabled, LogicBlock};

/// The board after a successful bring-up. PWM and Smart I/O run on their
/// own and the secondary core has been released.
pub struct System<B: Board> {
    _pwm: Counter<B::Pwm, state::Running>,
    _smart_io: LogicBlock<B::SmartIo, Enabled>,
    _core: Core<B::Core, Booting>,
    _console: B::Console,
    cpu: B::Cpu,
}

impl<B: Board> System<B> {
    /// Nothing left to do for this core.
    pub fn idle(mut self) -> ! {
        info!("bring-up complete, idling");
        loop {
            self.cpu.idle_hint();
        }
    }
}

/// Run the whole sequence, releasing the secondary core with `boot`.
pub fn bring_up<B: Board>(board: B, boot: &CoreBoot) -> Result<System<B>, BringUpError> {
    let Peripherals {
        mut console,
        pwm,
        smart_io,
        core,
        mut cpu,
    } = board.init().map_err(BringUpError::BoardInit)?;
    debug!("board initialized");

    console.init();
    console::banner(&mut console);

    cpu.enable_interrupts();

    let pwm = Counter::new(pwm)
        .init()
        .map_err(|status| report(&mut console, Peripheral::Pwm, status))?;
    let pwm = pwm.enable().start();
    debug!("PWM running");

    let smart_io = LogicBlock::new(smart_io)
        .init()
        .map_err(|status| report(&mut console, Peripheral::SmartIo, status))?;
    let smart_io = smart_io.enable();
    info!(
        "Smart I/O enabled, output on P{}_{}",
        config::SMART_IO_OUTPUT.port,
        config::SMART_IO_OUTPUT.pin
    );

    console::output_ready(&mut console, config::SMART_IO_OUTPUT, config::LED_JUMPER);

    // From here on the LED breathes without the CPU.
    let core = Core::new(core).release(boot);
    info!("secondary core released at {=u32:#x}", boot.address);

    Ok(System {
        _pwm: pwm,
        _smart_io: smart_io,
        _core: core,
        _console: console,
        cpu,
    })
}

fn report<C: Console>(
    console: &mut C,
    peripheral: Peripheral,
    status: u32,
) -> BringUpError {
    let err = BringUpError::PeripheralInit { peripheral, status };
    console::init_failed(console, &err);
    err
}

/// Stop for good. There is no caller to return an error to, and no state
/// to fall back to.
pub fn halt(err: BringUpError) -> ! {
    panic!("{}", err)
}

/// Bring the board up with the fixed CM55 boot configuration, then idle.
/// Any failure halts.
pub fn run<B: Board>(board: B) -> ! {
    match bring_up(board, &config::CM55_BOOT) {
        Ok(system) => system.idle(),
        Err(err) => halt(err),
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{self, AssertUnwindSafe};

    use super::*;
    use crate::config::BootWait;
    use crate::mock::{MockBoard, Recorder, Step, IDLE_LIMIT_REACHED};

    const BOOT: CoreBoot = CoreBoot {
        address: 0x6058_0400,
        wait: BootWait::Micros(10),
    };

    fn panic_message(f: impl FnOnce()) -> String {
        let payload = panic::catch_unwind(AssertUnwindSafe(f)).expect_err("expected a panic");
        if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = payload.downcast_ref::<&str>() {
            String::from(*s)
        } else {
            String::new()
        }
    }

    #[test]
    fn board_failure_touches_nothing_else() {
        let rec = Recorder::new();
        let board = MockBoard::new(&rec).fail_board(0x0102_0003);

        let err = bring_up(board, &BOOT).err();

        assert_eq!(err, Some(BringUpError::BoardInit(0x0102_0003)));
        assert_eq!(rec.steps().as_slice(), &[Step::BoardInit]);
        assert!(rec.console_text().is_empty());
    }

    #[test]
    fn pwm_failure_reports_code_and_stops() {
        let rec = Recorder::new();
        let board = MockBoard::new(&rec).fail_pwm(0x00B4_0001);

        let err = bring_up(board, &BOOT).err();

        assert_eq!(
            err,
            Some(BringUpError::PeripheralInit {
                peripheral: Peripheral::Pwm,
                status: 0x00B4_0001,
            })
        );
        assert!(rec
            .console_text()
            .contains("TCPWM init failed with error: 11796481"));
        assert!(rec.saw(Step::PwmInit));
        assert!(!rec.saw(Step::PwmEnable));
        assert!(!rec.saw(Step::SmartIoInit));
        assert_eq!(rec.core_enables(), 0);
    }

    #[test]
    fn smart_io_failure_reports_code_and_stops() {
        let rec = Recorder::new();
        let board = MockBoard::new(&rec).fail_smart_io(9);

        let err = bring_up(board, &BOOT).err();

        assert_eq!(
            err,
            Some(BringUpError::PeripheralInit {
                peripheral: Peripheral::SmartIo,
                status: 9,
            })
        );
        let text = rec.console_text();
        assert!(text.contains("SmartIO init failed with error: 9"));
        assert!(!text.contains("SmartIO enabled"));
        assert!(rec.saw(Step::PwmStart));
        assert!(!rec.saw(Step::SmartIoEnable));
        assert_eq!(rec.core_enables(), 0);
    }

    #[test]
    fn success_runs_every_step_in_order() {
        let rec = Recorder::new();

        assert!(bring_up(MockBoard::new(&rec), &BOOT).is_ok());

        assert_eq!(
            rec.steps().as_slice(),
            &[
                Step::BoardInit,
                Step::ConsoleInit,
                Step::EnableInterrupts,
                Step::PwmInit,
                Step::PwmEnable,
                Step::PwmStart,
                Step::SmartIoInit,
                Step::SmartIoEnable,
                Step::CoreEnable(BOOT),
            ]
        );
    }

    #[test]
    fn success_prints_banner_then_wiring() {
        let rec = Recorder::new();

        assert!(bring_up(MockBoard::new(&rec), &BOOT).is_ok());

        let text = rec.console_text();
        let banner = text.find(console::BANNER).unwrap();
        let pin = text.find("observed on pin P11_3.").unwrap();
        let jumper = text
            .find("Connect P11[3](D3) to J7.4(USER_LED1) to see ramping effect on Board LED.")
            .unwrap();
        assert!(text.starts_with(console::CLEAR_SCREEN));
        assert!(banner < pin && pin < jumper);
    }

    #[test]
    fn run_never_returns_and_releases_the_core_once() {
        let rec = Recorder::new();
        let board = MockBoard::new(&rec).idle_limit(1_000);

        let msg = panic_message(|| {
            run(board);
        });

        assert_eq!(msg, IDLE_LIMIT_REACHED);
        assert_eq!(rec.idle_turns(), 1_000);
        assert_eq!(rec.core_enables(), 1);
    }

    #[test]
    fn run_uses_the_fixed_boot_configuration() {
        let rec = Recorder::new();
        let board = MockBoard::new(&rec).idle_limit(1);

        panic_message(|| {
            run(board);
        });

        assert!(rec.saw(Step::CoreEnable(config::CM55_BOOT)));
    }

    #[test]
    fn run_halts_on_board_failure() {
        let rec = Recorder::new();
        let board = MockBoard::new(&rec).fail_board(1);

        let msg = panic_message(|| {
            run(board);
        });

        assert_eq!(msg, "Board init failed with result: 0x00000001");
        assert_eq!(rec.steps().as_slice(), &[Step::BoardInit]);
        assert_eq!(rec.idle_turns(), 0);
    }

    #[test]
    fn run_halts_on_smart_io_failure_without_idling() {
        let rec = Recorder::new();
        let board = MockBoard::new(&rec).fail_smart_io(4);

        let msg = panic_message(|| {
            run(board);
        });

        assert_eq!(msg, "SmartIO init failed with error: 4");
        assert_eq!(rec.core_enables(), 0);
        assert_eq!(rec.idle_turns(), 0);
    }
}
