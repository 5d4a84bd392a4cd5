#![no_main]
#![no_std]

use smartio_ramp::psoc_edge::Board;

#[cortex_m_rt::entry]
fn main() -> ! {
    defmt::info!("Ramping LED using Smart IO, CM33");

    let board = Board::take().unwrap();

    smartio_ramp::run(board)
}
