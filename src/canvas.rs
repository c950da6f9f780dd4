//! Fixed-size bit buffer mirroring the shift-register chain.
//!
//! See [`Canvas`].

use core::ops::Deref;

use heapless::Vec;

use crate::mapping::{self, BoardCount, MAX_CANVAS_BYTES};
use crate::{Error, Result};

/// In-memory mirror of the shift-register contents, 4 bytes per board.
///
/// Bit `n % 8` of byte `n / 8` holds physical cell `n`; byte 0 belongs to the first board
/// in the chain (the one wired to the controller). The canvas is sized once and never
/// grows or shrinks.
///
/// Changes made here only reach the LEDs when the owning
/// [`BarGraph`](crate::bar_graph::BarGraph) flushes.
///
/// ```rust
/// use bargraph_kit::canvas::Canvas;
/// use bargraph_kit::mapping::BoardCount;
///
/// let mut canvas = Canvas::new(BoardCount::new(2)?)?;
/// assert_eq!(canvas.len(), 8);
///
/// canvas.set_cell(32, true);
/// assert_eq!(canvas.as_slice(), &[0, 0, 0, 0, 1, 0, 0, 0]);
///
/// // Beyond the chain: dropped.
/// canvas.set_cell(64, true);
/// assert_eq!(canvas.cell(64), None);
/// # Ok::<(), bargraph_kit::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    bytes: Vec<u8, MAX_CANVAS_BYTES>,
    board_count: BoardCount,
}

impl Canvas {
    /// Create an all-off canvas for `board_count` boards.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CanvasCapacity`] if the buffer cannot hold the boards.
    pub fn new(board_count: BoardCount) -> Result<Self> {
        let len = board_count.canvas_len();
        let mut bytes = Vec::new();
        bytes
            .resize(len, 0)
            .map_err(|()| Error::CanvasCapacity(len))?;
        Ok(Self { bytes, board_count })
    }

    /// Boards this canvas covers.
    #[must_use]
    pub const fn board_count(&self) -> BoardCount {
        self.board_count
    }

    /// Shift-register cells covered, padding included.
    #[must_use]
    pub const fn physical_len(&self) -> u32 {
        self.board_count.physical_len()
    }

    /// Canvas bytes in buffer order.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    /// Turn every cell off.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Set or clear one physical cell. Returns `false`, leaving the canvas untouched, when
    /// `physical` is beyond the chain.
    pub fn set_cell(&mut self, physical: u32, value: bool) -> bool {
        if physical >= self.physical_len() {
            return false;
        }
        let (index, mask) = mapping::byte_and_mask(physical);
        let Some(byte) = self.bytes.get_mut(index) else {
            return false;
        };
        if value {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
        true
    }

    /// State of one physical cell, or `None` beyond the chain.
    #[must_use]
    pub fn cell(&self, physical: u32) -> Option<bool> {
        if physical >= self.physical_len() {
            return None;
        }
        let (index, mask) = mapping::byte_and_mask(physical);
        self.bytes.get(index).map(|byte| byte & mask != 0)
    }

    /// Replace the contents with cells `0..boundary` on and everything else off.
    ///
    /// Whole bytes below `boundary / 8` are set to `0xFF`, padding cells included; the
    /// byte holding the boundary gets its low `boundary % 8` bits. Returns `false`,
    /// leaving the canvas untouched, when `boundary` exceeds the chain.
    pub fn fill_below(&mut self, boundary: u32) -> bool {
        if boundary > self.physical_len() {
            return false;
        }
        let (full_bytes, boundary_mask) = mapping::byte_and_mask(boundary);
        self.clear();
        for (index, byte) in self.bytes.iter_mut().enumerate() {
            if index < full_bytes {
                *byte = 0xFF;
            } else if index == full_bytes {
                *byte = boundary_mask.wrapping_sub(1);
            } else {
                break;
            }
        }
        true
    }
}

impl Deref for Canvas {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl AsRef<[u8]> for Canvas {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}
