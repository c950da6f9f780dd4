//! Construct a [`BarGraph`] straight from Pico 1 (RP2040) peripherals.
//!
//! Use the [`bar_graph!`] macro for a keyword-driven constructor with defaults.

use embassy_rp::Peri;
use embassy_rp::gpio::{Level, Output, Pin};
use embassy_rp::spi::{Blocking, ClkPin, Config, Instance, MosiPin, Spi};

use crate::Result;
use crate::bar_graph::BarGraph;
use crate::mapping::BoardCount;

/// Default SPI clock for the bargraph chain (Hz).
pub const BAR_GRAPH_FREQUENCY_DEFAULT: u32 = 1_000_000;

/// Default number of chained boards.
pub const BAR_GRAPH_BOARDS_DEFAULT: u8 = 1;

/// A [`BarGraph`] on a blocking, transmit-only RP2040 SPI with a GPIO latch.
pub type BarGraphRp<'d, T> = BarGraph<Spi<'d, T, Blocking>, Output<'d>>;

/// Create a bargraph chain with keyword arguments and defaults.
///
/// Required fields: `spi`, `clk`, `mosi`, `latch`.
///
/// Optional fields: `boards` (defaults to [`BAR_GRAPH_BOARDS_DEFAULT`]) and `frequency`
/// (defaults to [`BAR_GRAPH_FREQUENCY_DEFAULT`]).
///
/// Wire `SIN` to `mosi`, `CLK` to `clk` and `LAT` to `latch`. The latch can be any GPIO.
///
/// # Example
///
/// ```rust,no_run
/// # #![no_std]
/// # #![no_main]
/// # #[panic_handler]
/// # fn panic(_: &core::panic::PanicInfo) -> ! { loop {} }
/// use bargraph_kit::{Result, bar_graph};
///
/// fn example(p: embassy_rp::Peripherals) -> Result<()> {
///     let mut bar_graph = bar_graph! {
///         spi: p.SPI0,
///         clk: p.PIN_18,
///         mosi: p.PIN_19,
///         latch: p.PIN_17,
///         boards: 2,
///     }?;
///
///     bar_graph.fill(45, 0)?;
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! bar_graph {
    ($($tt:tt)*) => { $crate::__bar_graph_impl! { $($tt)* } };
}
#[doc(inline)]
pub use bar_graph;

// Public for macro expansion in downstream crates.
#[doc(hidden)]
#[macro_export]
macro_rules! __bar_graph_impl {
    (@__fill_defaults
        spi: $spi:tt,
        clk: $clk:tt,
        mosi: $mosi:tt,
        latch: $latch:tt,
        boards: $boards:expr,
        frequency: $frequency:expr,
        fields: [ ]
    ) => {
        $crate::bar_graph_rp::bar_graph_from_pins($spi, $clk, $mosi, $latch, $boards, $frequency)
    };

    (@__fill_defaults
        spi: $spi:tt,
        clk: $clk:tt,
        mosi: $mosi:tt,
        latch: $latch:tt,
        boards: $boards:expr,
        frequency: $frequency:expr,
        fields: [ spi: $spi_value:expr $(, $($rest:tt)*)? ]
    ) => {
        $crate::__bar_graph_impl! {
            @__fill_defaults
            spi: $spi_value,
            clk: $clk,
            mosi: $mosi,
            latch: $latch,
            boards: $boards,
            frequency: $frequency,
            fields: [ $($($rest)*)? ]
        }
    };

    (@__fill_defaults
        spi: $spi:tt,
        clk: $clk:tt,
        mosi: $mosi:tt,
        latch: $latch:tt,
        boards: $boards:expr,
        frequency: $frequency:expr,
        fields: [ clk: $clk_value:expr $(, $($rest:tt)*)? ]
    ) => {
        $crate::__bar_graph_impl! {
            @__fill_defaults
            spi: $spi,
            clk: $clk_value,
            mosi: $mosi,
            latch: $latch,
            boards: $boards,
            frequency: $frequency,
            fields: [ $($($rest)*)? ]
        }
    };

    (@__fill_defaults
        spi: $spi:tt,
        clk: $clk:tt,
        mosi: $mosi:tt,
        latch: $latch:tt,
        boards: $boards:expr,
        frequency: $frequency:expr,
        fields: [ mosi: $mosi_value:expr $(, $($rest:tt)*)? ]
    ) => {
        $crate::__bar_graph_impl! {
            @__fill_defaults
            spi: $spi,
            clk: $clk,
            mosi: $mosi_value,
            latch: $latch,
            boards: $boards,
            frequency: $frequency,
            fields: [ $($($rest)*)? ]
        }
    };

    (@__fill_defaults
        spi: $spi:tt,
        clk: $clk:tt,
        mosi: $mosi:tt,
        latch: $latch:tt,
        boards: $boards:expr,
        frequency: $frequency:expr,
        fields: [ latch: $latch_value:expr $(, $($rest:tt)*)? ]
    ) => {
        $crate::__bar_graph_impl! {
            @__fill_defaults
            spi: $spi,
            clk: $clk,
            mosi: $mosi,
            latch: $latch_value,
            boards: $boards,
            frequency: $frequency,
            fields: [ $($($rest)*)? ]
        }
    };

    (@__fill_defaults
        spi: $spi:tt,
        clk: $clk:tt,
        mosi: $mosi:tt,
        latch: $latch:tt,
        boards: $boards:expr,
        frequency: $frequency:expr,
        fields: [ boards: $boards_value:expr $(, $($rest:tt)*)? ]
    ) => {
        $crate::__bar_graph_impl! {
            @__fill_defaults
            spi: $spi,
            clk: $clk,
            mosi: $mosi,
            latch: $latch,
            boards: $boards_value,
            frequency: $frequency,
            fields: [ $($($rest)*)? ]
        }
    };

    (@__fill_defaults
        spi: $spi:tt,
        clk: $clk:tt,
        mosi: $mosi:tt,
        latch: $latch:tt,
        boards: $boards:expr,
        frequency: $frequency:expr,
        fields: [ frequency: $frequency_value:expr $(, $($rest:tt)*)? ]
    ) => {
        $crate::__bar_graph_impl! {
            @__fill_defaults
            spi: $spi,
            clk: $clk,
            mosi: $mosi,
            latch: $latch,
            boards: $boards,
            frequency: $frequency_value,
            fields: [ $($($rest)*)? ]
        }
    };

    (
        $($fields:tt)*
    ) => {
        $crate::__bar_graph_impl! {
            @__fill_defaults
            spi: _UNSET_,
            clk: _UNSET_,
            mosi: _UNSET_,
            latch: _UNSET_,
            boards: $crate::bar_graph_rp::BAR_GRAPH_BOARDS_DEFAULT,
            frequency: $crate::bar_graph_rp::BAR_GRAPH_FREQUENCY_DEFAULT,
            fields: [ $($fields)* ]
        }
    };
}

/// Build a [`BarGraphRp`] from an SPI block, its clock and data pins, and a latch pin.
///
/// The SPI runs in mode 0 at `frequency` Hz without a receive pin; the latch starts high.
///
/// # Errors
///
/// Returns [`Error::BoardCount`](crate::Error::BoardCount) if `boards` is outside `1..=8`.
// Public for macro expansion in downstream crates.
#[doc(hidden)]
pub fn bar_graph_from_pins<'d, T: Instance>(
    spi: Peri<'d, T>,
    clk: Peri<'d, impl ClkPin<T> + 'd>,
    mosi: Peri<'d, impl MosiPin<T> + 'd>,
    latch: Peri<'d, impl Pin + 'd>,
    boards: u8,
    frequency: u32,
) -> Result<BarGraphRp<'d, T>> {
    let board_count = BoardCount::new(boards)?;
    let mut config = Config::default();
    config.frequency = frequency;
    let spi = Spi::new_blocking_txonly(spi, clk, mosi, config);
    let latch = Output::new(latch, Level::High);
    BarGraph::new(spi, latch, board_count)
}
