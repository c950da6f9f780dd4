//! Translation from LED numbering to shift-register bit positions.
//!
//! Each board carries a 32-bit shift register but only 30 LEDs. The last two cells of
//! every board (physical cells 30 and 31) are padding, so every translation skips two
//! bits per board boundary.
//!
//! ```text
//! logical:   0 .. 29 | 30 .. 59 | 60 ..
//! physical:  0 .. 29 | 32 .. 61 | 64 ..
//!            board 0   board 1    board 2
//! ```
//!
//! Two numbering conventions coexist, and existing firmware depends on both:
//! - [`paint_position`]: 0-based LED index, used by [`BarGraph::paint`](crate::bar_graph::BarGraph::paint).
//! - [`fill_boundary`]: 1-based lit count, used by [`BarGraph::fill`](crate::bar_graph::BarGraph::fill).

use core::num::NonZeroU8;

use crate::{Error, Result};

/// LEDs driven by one board.
pub const LEDS_PER_BOARD: u16 = 30;

/// Shift-register cells on one board (LEDs plus padding).
pub const BITS_PER_BOARD: u16 = 32;

/// Padding cells per board with no LED attached.
pub const PADDING_BITS_PER_BOARD: u16 = BITS_PER_BOARD - LEDS_PER_BOARD;

/// Canvas bytes per board.
pub const BYTES_PER_BOARD: usize = 4;

/// Largest supported chain.
pub const MAX_BOARDS: u8 = 8;

/// Canvas bytes for the largest supported chain.
pub const MAX_CANVAS_BYTES: usize = MAX_BOARDS as usize * BYTES_PER_BOARD;

/// Number of daisy-chained boards, always within `1..=MAX_BOARDS`.
///
/// ```rust
/// use bargraph_kit::mapping::BoardCount;
///
/// let boards = BoardCount::new(2)?;
/// assert_eq!(boards.led_count(), 60);
/// assert_eq!(boards.canvas_len(), 8);
/// assert!(BoardCount::new(9).is_err());
/// # Ok::<(), bargraph_kit::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardCount(NonZeroU8);

impl BoardCount {
    /// A single board.
    pub const ONE: Self = Self(NonZeroU8::MIN);

    /// Validate a board count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BoardCount`] when `count` is 0 or greater than [`MAX_BOARDS`].
    pub const fn new(count: u8) -> Result<Self> {
        if count > MAX_BOARDS {
            return Err(Error::BoardCount(count));
        }
        match NonZeroU8::new(count) {
            Some(count) => Ok(Self(count)),
            None => Err(Error::BoardCount(count)),
        }
    }

    /// The number of boards.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Canvas size in bytes (4 per board).
    #[must_use]
    pub const fn canvas_len(self) -> usize {
        self.0.get() as usize * BYTES_PER_BOARD
    }

    /// Shift-register cells across the chain, padding included.
    #[must_use]
    pub const fn physical_len(self) -> u32 {
        self.0.get() as u32 * BITS_PER_BOARD as u32
    }

    /// Real LEDs across the chain.
    #[must_use]
    pub const fn led_count(self) -> u16 {
        self.0.get() as u16 * LEDS_PER_BOARD
    }
}

impl Default for BoardCount {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u8> for BoardCount {
    type Error = Error;

    fn try_from(count: u8) -> Result<Self> {
        Self::new(count)
    }
}

impl From<BoardCount> for u8 {
    fn from(board_count: BoardCount) -> Self {
        board_count.get()
    }
}

/// Physical cell for a 0-based LED index.
///
/// `physical = logical + 2 * (logical / 30)`. The result is not range checked; compare it
/// against [`BoardCount::physical_len`].
///
/// ```rust
/// use bargraph_kit::mapping::paint_position;
///
/// assert_eq!(paint_position(29), 29);
/// assert_eq!(paint_position(30), 32);
/// assert_eq!(paint_position(59), 61);
/// assert_eq!(paint_position(60), 64);
/// ```
#[must_use]
pub const fn paint_position(logical: u16) -> u32 {
    let logical = logical as u32;
    logical + (logical / LEDS_PER_BOARD as u32) * PADDING_BITS_PER_BOARD as u32
}

/// Fill boundary (exclusive, in physical cells) for a 1-based lit count.
///
/// `adjusted = bar + 2 * ((bar - 1) / 30)`, with `bar == 0` giving 0. The `- 1` places the
/// padding skip one LED later than [`paint_position`] does: a full board (`bar == 30`)
/// stops at cell 30 without skipping, and the skip is taken from `bar == 31` on.
///
/// ```rust
/// use bargraph_kit::mapping::fill_boundary;
///
/// assert_eq!(fill_boundary(0), 0);
/// assert_eq!(fill_boundary(30), 30);
/// assert_eq!(fill_boundary(31), 33);
/// assert_eq!(fill_boundary(60), 62);
/// ```
#[must_use]
pub const fn fill_boundary(bar: u16) -> u32 {
    let bar = bar as u32;
    let boards_before = match bar.checked_sub(1) {
        Some(below) => below / LEDS_PER_BOARD as u32,
        None => 0,
    };
    bar + boards_before * PADDING_BITS_PER_BOARD as u32
}

/// Canvas byte index and bit mask for a physical cell.
#[must_use]
pub const fn byte_and_mask(physical: u32) -> (usize, u8) {
    ((physical / 8) as usize, 1 << (physical % 8))
}

/// Whether a physical cell is one of a board's two padding cells.
#[must_use]
pub const fn is_padding(physical: u32) -> bool {
    physical % BITS_PER_BOARD as u32 >= LEDS_PER_BOARD as u32
}
