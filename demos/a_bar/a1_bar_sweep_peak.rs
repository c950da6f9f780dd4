#![allow(missing_docs)]
#![no_std]
#![no_main]

use core::{convert::Infallible, future, panic};

use bargraph_kit::{Result, bar_graph};
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use {defmt::info, defmt_rtt as _, panic_probe as _};

const FRAME: Duration = Duration::from_millis(30);
const PEAK_HOLD_FRAMES: u8 = 20;

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(_spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    // Two boards: SIN on GPIO 19, CLK on GPIO 18, LAT on GPIO 17.
    let mut bar_graph = bar_graph! {
        spi: p.SPI0,
        clk: p.PIN_18,
        mosi: p.PIN_19,
        latch: p.PIN_17,
        boards: 2,
    }?;
    let led_count = bar_graph.led_count();
    info!("sweeping {} LEDs", led_count);

    let mut peak = 0;
    let mut peak_age = 0;

    // Up to the top and back down, forever. The peak marker lingers, then falls.
    for level in (0..=led_count).chain((0..led_count).rev()).cycle() {
        if level >= peak {
            peak = level;
            peak_age = 0;
        } else if peak_age >= PEAK_HOLD_FRAMES {
            peak = peak.saturating_sub(1);
        } else {
            peak_age += 1;
        }
        bar_graph.fill(level, peak)?;
        Timer::after(FRAME).await;
    }

    future::pending().await // cycle() never ends
}
