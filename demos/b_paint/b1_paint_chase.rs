#![allow(missing_docs)]
#![no_std]
#![no_main]

use core::{convert::Infallible, future, panic};

use bargraph_kit::{Result, bar_graph};
use embassy_executor::Spawner;
use embassy_time::Timer;
use {defmt::info, defmt_rtt as _, panic_probe as _};

const GAP: u16 = 6;

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(_spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    let mut bar_graph = bar_graph! {
        spi: p.SPI0,
        clk: p.PIN_18,
        mosi: p.PIN_19,
        latch: p.PIN_17,
        boards: 3,
        frequency: 4_000_000,
    }?;
    let led_count = bar_graph.led_count();
    info!("chasing across {} boards", bar_graph.board_count().get());

    // Every GAP-th LED lit, shifted by one each step; runs across board seams.
    for offset in (0..GAP).cycle() {
        bar_graph.clear();
        for position in (offset..led_count).step_by(usize::from(GAP)) {
            bar_graph.paint(position, true);
        }
        bar_graph.flush()?;
        Timer::after_millis(80).await;
    }

    future::pending().await // cycle() never ends
}
