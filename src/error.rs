use derive_more::{Display, Error, From};

/// Errors returned by [`BarGraph`](crate::bar_graph::BarGraph) and its building blocks.
#[derive(Debug, Display, Error, From, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The board count was outside `1..=MAX_BOARDS`.
    #[display("board count {_0} is outside 1..=8")]
    #[from(ignore)]
    BoardCount(#[error(not(source))] u8),

    /// The fixed-capacity canvas could not hold the requested number of boards.
    #[display("canvas of {_0} bytes does not fit the fixed-capacity buffer")]
    #[from(ignore)]
    CanvasCapacity(#[error(not(source))] usize),

    /// Shifting bytes out over SPI failed.
    #[display("SPI transfer failed: {_0}")]
    Spi(#[error(not(source))] embedded_hal::spi::ErrorKind),

    /// Driving the latch (select) line failed.
    #[display("latch line failed: {_0}")]
    Latch(#[error(not(source))] embedded_hal::digital::ErrorKind),
}

/// Result type for this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
