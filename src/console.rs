//! Console text
//!
//! Nothing here is checked: if the console is broken the board still comes
//! up, just silently.

use core::fmt::{self, Write};

use embedded_hal_nb::serial::Write as _;

use crate::board::Console;
use crate::config::PinRef;
use crate::error::BringUpError;

/// ANSI: clear screen, cursor home
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[;H";

pub const BANNER: &str = "*********** PSOC Edge MCU: Ramping LED using Smart IO ***********";

/// `core::fmt::Write` on top of a console, blocking while it's busy.
pub struct ConsoleWriter<'a, C> {
    console: &'a mut C,
}

impl<'a, C: Console> ConsoleWriter<'a, C> {
    pub fn new(console: &'a mut C) -> Self {
        ConsoleWriter { console }
    }

    /// Block until everything written so far has left the console.
    pub fn flush(&mut self) -> fmt::Result {
        nb::block!(self.console.flush()).map_err(|_| fmt::Error)
    }
}

impl<C: Console> Write for ConsoleWriter<'_, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            nb::block!(self.console.write(byte)).map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}

pub fn banner<C: Console>(console: &mut C) {
    let mut w = ConsoleWriter::new(console);
    let _ = w.write_str(CLEAR_SCREEN);
    let _ = write!(w, "\r\n{}\r\n", BANNER);
}

/// Report a failed init. Flushes, since a halt follows.
pub fn init_failed<C: Console>(console: &mut C, err: &BringUpError) {
    let mut w = ConsoleWriter::new(console);
    let _ = write!(w, "{}\r\n", err);
    let _ = w.flush();
}

pub fn output_ready<C: Console>(console: &mut C, output: PinRef, jumper: &str) {
    let mut w = ConsoleWriter::new(console);
    let _ = write!(
        w,
        "\r\nSmartIO enabled. The output can be observed on pin {}.\r\n",
        output
    );
    let _ = write!(
        w,
        "\r\nConnect {} to see ramping effect on Board LED.\r\n",
        jumper
    );
}
