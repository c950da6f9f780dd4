//! Recording stand-ins for the SPI bus and latch pin.
#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::cell::RefCell;
use std::rc::Rc;

use bargraph_kit::BarGraph;
use bargraph_kit::mapping::BoardCount;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, SpiBus};

/// One observable event on the wires, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wire {
    LatchLow,
    LatchHigh,
    Byte(u8),
    Flush,
}

/// Event log shared by a [`FakeSpi`] and a [`FakeLatch`].
#[derive(Clone, Debug, Default)]
pub struct WireLog(Rc<RefCell<Vec<Wire>>>);

impl WireLog {
    pub fn push(&self, wire: Wire) {
        self.0.borrow_mut().push(wire);
    }

    pub fn events(&self) -> Vec<Wire> {
        self.0.borrow().clone()
    }

    /// Only the shifted bytes, in transmission order.
    pub fn bytes(&self) -> Vec<u8> {
        self.0
            .borrow()
            .iter()
            .filter_map(|wire| match wire {
                Wire::Byte(byte) => Some(*byte),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// The events a single latch-framed transfer of `bytes` produces.
pub fn framed(bytes: &[u8]) -> Vec<Wire> {
    let mut wires = vec![Wire::LatchLow];
    wires.extend(bytes.iter().copied().map(Wire::Byte));
    wires.push(Wire::Flush);
    wires.push(Wire::LatchHigh);
    wires
}

#[derive(Debug)]
pub struct FakeSpiError;

impl spi::Error for FakeSpiError {
    fn kind(&self) -> spi::ErrorKind {
        spi::ErrorKind::Overrun
    }
}

/// SPI bus that logs every written byte. Optionally fails once `fail_after` bytes have
/// been accepted.
pub struct FakeSpi {
    log: WireLog,
    fail_after: Option<usize>,
    written: usize,
}

impl FakeSpi {
    pub fn new(log: &WireLog) -> Self {
        Self {
            log: log.clone(),
            fail_after: None,
            written: 0,
        }
    }

    pub fn failing_after(log: &WireLog, bytes: usize) -> Self {
        Self {
            fail_after: Some(bytes),
            ..Self::new(log)
        }
    }
}

impl spi::ErrorType for FakeSpi {
    type Error = FakeSpiError;
}

impl SpiBus<u8> for FakeSpi {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        words.fill(0);
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        for word in words {
            if self.fail_after == Some(self.written) {
                return Err(FakeSpiError);
            }
            self.log.push(Wire::Byte(*word));
            self.written += 1;
        }
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        read.fill(0);
        self.write(write)
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        let outgoing = words.to_vec();
        words.fill(0);
        self.write(&outgoing)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.log.push(Wire::Flush);
        Ok(())
    }
}

#[derive(Debug)]
pub struct FakeLatchError;

impl digital::Error for FakeLatchError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

/// Latch pin that logs every level change, or refuses to move when `broken`.
pub struct FakeLatch {
    log: WireLog,
    broken: bool,
}

impl FakeLatch {
    pub fn new(log: &WireLog) -> Self {
        Self {
            log: log.clone(),
            broken: false,
        }
    }

    pub fn broken(log: &WireLog) -> Self {
        Self {
            log: log.clone(),
            broken: true,
        }
    }
}

impl digital::ErrorType for FakeLatch {
    type Error = FakeLatchError;
}

impl OutputPin for FakeLatch {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.broken {
            return Err(FakeLatchError);
        }
        self.log.push(Wire::LatchLow);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.broken {
            return Err(FakeLatchError);
        }
        self.log.push(Wire::LatchHigh);
        Ok(())
    }
}

/// A bar graph of `boards` boards on fakes, with the construction events already cleared.
pub fn new_chain(boards: u8) -> (BarGraph<FakeSpi, FakeLatch>, WireLog) {
    let log = WireLog::default();
    let bar_graph = BarGraph::new(
        FakeSpi::new(&log),
        FakeLatch::new(&log),
        BoardCount::new(boards).unwrap(),
    )
    .unwrap();
    log.clear();
    (bar_graph, log)
}
