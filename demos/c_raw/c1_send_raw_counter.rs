#![allow(missing_docs)]
#![no_std]
#![no_main]

use core::{convert::Infallible, panic};

use bargraph_kit::{Result, bar_graph};
use embassy_executor::Spawner;
use embassy_time::Timer;
use {defmt::info, defmt_rtt as _, panic_probe as _};

// Only the low 30 bits have LEDs.
const LED_MASK: u32 = (1 << 30) - 1;

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(_spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    // Single board: send_raw bypasses the canvas.
    let mut bar_graph = bar_graph! {
        spi: p.SPI0,
        clk: p.PIN_18,
        mosi: p.PIN_19,
        latch: p.PIN_17,
    }?;
    info!("binary counter on one board");

    let mut count: u32 = 0;
    loop {
        bar_graph.send_raw(count & LED_MASK)?;
        count = count.wrapping_add(1);
        Timer::after_millis(50).await;
    }
}
