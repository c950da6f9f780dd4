//! A device abstraction for chains of 30-LED bargraph boards.
//!
//! See [`BarGraph`] for usage examples.

use embedded_hal::digital::{Error as _, OutputPin};
use embedded_hal::spi::{Error as _, SpiBus};

use crate::Result;
use crate::canvas::Canvas;
use crate::mapping::{self, BoardCount};

/// Daisy-chained bargraph boards driven over SPI, latched by a select line.
///
/// `BarGraph` keeps a [`Canvas`] of the whole chain. [`paint`](Self::paint) and
/// [`clear`](Self::clear) only change the canvas; [`flush`](Self::flush) shifts it out
/// and latches it. [`fill`](Self::fill) redraws the canvas as a bar and flushes in one
/// step.
///
/// LED numbering:
/// - [`paint`](Self::paint) takes a 0-based LED index, contiguous across boards.
/// - [`fill`](Self::fill) takes a 1-based lit count; 0 lights nothing.
///
/// Positions beyond the chain are ignored rather than reported.
///
/// The SPI bus should idle low, sample on the rising edge (mode 0), and may run at any
/// rate the boards accept. The latch is held high while idle; the low-to-high edge at the
/// end of a transfer makes the shifted data visible.
///
/// # Example
///
/// ```rust,no_run
/// use bargraph_kit::{BarGraph, Result, mapping::BoardCount};
/// use embedded_hal::{digital::OutputPin, spi::SpiBus};
///
/// fn show_level<SPI: SpiBus, LATCH: OutputPin>(spi: SPI, latch: LATCH) -> Result<()> {
///     let mut bar_graph = BarGraph::new(spi, latch, BoardCount::new(2)?)?;
///
///     bar_graph.fill(42, 55)?; // 42 LEDs lit plus a peak marker on LED 55
///
///     bar_graph.clear();
///     bar_graph.paint(0, true);
///     bar_graph.paint(59, true);
///     bar_graph.flush()?; // only the two end LEDs
///     Ok(())
/// }
/// ```
pub struct BarGraph<SPI, LATCH> {
    spi: SPI,
    latch: LATCH,
    canvas: Canvas,
}

impl<SPI, LATCH> BarGraph<SPI, LATCH>
where
    SPI: SpiBus,
    LATCH: OutputPin,
{
    /// Take ownership of the bus and latch line and start with every LED off.
    ///
    /// The latch is driven high (idle). Nothing is sent to the boards until the first
    /// flush.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CanvasCapacity`](crate::Error::CanvasCapacity) if the canvas cannot
    /// be sized, or [`Error::Latch`](crate::Error::Latch) if the latch cannot be driven
    /// high. The board count is checked earlier, by [`BoardCount::new`].
    pub fn new(spi: SPI, mut latch: LATCH, board_count: BoardCount) -> Result<Self> {
        let canvas = Canvas::new(board_count)?;
        latch.set_high().map_err(|err| err.kind())?;
        #[cfg(feature = "defmt")]
        defmt::info!(
            "BarGraph::new: {} board(s), {} LEDs, {} canvas bytes",
            board_count.get(),
            board_count.led_count(),
            board_count.canvas_len()
        );
        Ok(Self { spi, latch, canvas })
    }

    /// Same as [`new`](Self::new) with a single board.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn new_single(spi: SPI, latch: LATCH) -> Result<Self> {
        Self::new(spi, latch, BoardCount::ONE)
    }

    /// Turn every LED off in the canvas. Call [`flush`](Self::flush) to show it.
    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    /// Turn one LED on or off in the canvas. Call [`flush`](Self::flush) to show it.
    ///
    /// `position` is 0-based and runs across the whole chain: LED 30 is the first LED of
    /// the second board. Positions past the last LED are ignored.
    pub fn paint(&mut self, position: u16, value: bool) {
        let physical = mapping::paint_position(position);
        if !self.canvas.set_cell(physical, value) {
            #[cfg(feature = "defmt")]
            defmt::trace!("BarGraph::paint: dropped LED {} (cell {})", position, physical);
        }
    }

    /// Whether LED `position` (0-based) is lit in the canvas. Positions past the last LED
    /// read as off.
    #[must_use]
    pub fn is_lit(&self, position: u16) -> bool {
        self.canvas
            .cell(mapping::paint_position(position))
            .unwrap_or(false)
    }

    /// Show a traditional bargraph: light the first `bar` LEDs, then flush.
    ///
    /// `bar` counts LEDs from 1; 0 lights none. A non-zero `peak` additionally lights LED
    /// `peak` (also counted from 1), whether or not it falls inside the bar, which suits a
    /// peak-hold marker. The previous canvas contents are discarded.
    ///
    /// If `bar` reaches past the end of the chain nothing changes and nothing is sent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Spi`](crate::Error::Spi) or [`Error::Latch`](crate::Error::Latch)
    /// if the flush fails.
    pub fn fill(&mut self, bar: u16, peak: u16) -> Result<()> {
        let boundary = mapping::fill_boundary(bar);
        if !self.canvas.fill_below(boundary) {
            #[cfg(feature = "defmt")]
            defmt::trace!("BarGraph::fill: dropped bar {} (boundary {})", bar, boundary);
            return Ok(());
        }
        if let Some(peak_position) = peak.checked_sub(1) {
            self.paint(peak_position, true);
        }
        self.flush()
    }

    /// Shift the canvas out to the chain and latch it.
    ///
    /// Bytes go out last-first: the far end of the chain must receive its data first so
    /// that, after every board has shifted in 4 bytes, each board holds its own. The LEDs
    /// keep showing the result until the next flush.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Spi`](crate::Error::Spi) if shifting fails (the latch is then left
    /// low, so the partial data is never shown) or [`Error::Latch`](crate::Error::Latch)
    /// if the latch line fails.
    pub fn flush(&mut self) -> Result<()> {
        #[cfg(feature = "defmt")]
        defmt::debug!("BarGraph::flush: {=[u8]:x}", self.canvas.as_slice());
        let Self { spi, latch, canvas } = self;
        transfer(spi, latch, canvas.iter().rev().copied())
    }

    /// Send a 32-bit pattern straight to the chain, bypassing the canvas.
    ///
    /// Bytes go out most significant first, so bit 0 of `value` lands on the first LED of
    /// a single board. In a chain the pattern lands on the board nearest the controller and
    /// every other board takes over its neighbour's previous contents; use the canvas for
    /// chains.
    ///
    /// # Errors
    ///
    /// See [`flush`](Self::flush).
    pub fn send_raw(&mut self, value: u32) -> Result<()> {
        #[cfg(feature = "defmt")]
        defmt::debug!("BarGraph::send_raw: {=u32:#x}", value);
        transfer(&mut self.spi, &mut self.latch, value.to_be_bytes())
    }

    /// The canvas as it will be sent by the next flush.
    #[must_use]
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Boards in the chain.
    #[must_use]
    pub const fn board_count(&self) -> BoardCount {
        self.canvas.board_count()
    }

    /// LEDs in the chain (30 per board).
    #[must_use]
    pub const fn led_count(&self) -> u16 {
        self.canvas.board_count().led_count()
    }

    /// Release the bus and latch line.
    pub fn free(self) -> (SPI, LATCH) {
        (self.spi, self.latch)
    }
}

/// One latch-framed transfer: latch low, shift `bytes` in order, wait for the bus,
/// latch high.
fn transfer<SPI, LATCH>(
    spi: &mut SPI,
    latch: &mut LATCH,
    bytes: impl IntoIterator<Item = u8>,
) -> Result<()>
where
    SPI: SpiBus,
    LATCH: OutputPin,
{
    latch.set_low().map_err(|err| err.kind())?;
    for byte in bytes {
        spi.write(&[byte]).map_err(|err| err.kind())?;
    }
    spi.flush().map_err(|err| err.kind())?;
    latch.set_high().map_err(|err| err.kind())?;
    Ok(())
}
