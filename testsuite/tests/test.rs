#![no_std]
#![no_main]

use smartio_ramp as _; // global logger + panicking-behavior + memory layout

#[defmt_test::tests]
mod tests {
    use defmt::{assert, assert_eq};
    use smartio_ramp::config::{BootWait, CoreBoot, CM55_BOOT};
    use smartio_ramp::mock::{MockBoard, Recorder, Step};
    use smartio_ramp::{bring_up, BringUpError, Peripheral};

    const BOOT: CoreBoot = CoreBoot {
        address: 0x6058_0400,
        wait: BootWait::Micros(10),
    };

    #[test]
    fn board_can_be_taken_once() {
        assert!(smartio_ramp::psoc_edge::Board::take().is_some());
        assert!(smartio_ramp::psoc_edge::Board::take().is_none());
    }

    #[test]
    fn cm55_boot_constant() {
        assert_eq!(CM55_BOOT, BOOT);
    }

    #[test]
    fn board_failure() {
        let rec = Recorder::new();

        let err = bring_up(MockBoard::new(&rec).fail_board(1), &BOOT).err();

        assert_eq!(err, Some(BringUpError::BoardInit(1)));
        assert_eq!(rec.steps().as_slice(), &[Step::BoardInit]);
    }

    #[test]
    fn pwm_failure() {
        let rec = Recorder::new();

        let err = bring_up(MockBoard::new(&rec).fail_pwm(5), &BOOT).err();

        assert_eq!(
            err,
            Some(BringUpError::PeripheralInit {
                peripheral: Peripheral::Pwm,
                status: 5,
            })
        );
        assert!(rec.console_text().contains("TCPWM init failed with error: 5"));
        assert!(!rec.saw(Step::SmartIoInit));
        assert_eq!(rec.core_enables(), 0);
    }

    #[test]
    fn smart_io_failure() {
        let rec = Recorder::new();

        let err = bring_up(MockBoard::new(&rec).fail_smart_io(6), &BOOT).err();

        assert!(err.is_some());
        assert!(rec.console_text().contains("SmartIO init failed with error: 6"));
        assert_eq!(rec.core_enables(), 0);
    }

    #[test]
    fn full_sequence() {
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
}
