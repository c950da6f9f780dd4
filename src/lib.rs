//! Drive daisy-chained 30-segment LED bargraph boards over SPI.
//!
//! Each board holds a 32-bit shift register driving 30 LEDs; boards chain `SOUT` to `SIN`
//! and share clock and latch. [`BarGraph`] keeps an in-memory canvas of the chain, hides
//! the two unused register bits per board, and shifts the canvas out in the order the
//! chain needs.
//!
//! Works with any [`embedded_hal::spi::SpiBus`] and [`embedded_hal::digital::OutputPin`].
//! With the `pico1` feature, the `bar_graph!` macro builds one straight from RP2040 peripherals.
//!
//! # Glossary
//!
//! - **Canvas:** in-memory mirror of the shift registers. Painting changes only the canvas;
//!   flushing sends it.
//! - **Logical position:** LED index that ignores padding bits.
//! - **Physical position (cell):** shift-register bit index, padding included.
//! - **Padding bit:** one of the two register bits per board with no LED attached.
//! - **Latch:** the select line whose low-to-high edge shows the shifted data.
#![no_std]

pub mod bar_graph;
#[cfg(feature = "pico1")]
pub mod bar_graph_rp;
pub mod canvas;
mod error;
pub mod mapping;

pub use crate::bar_graph::BarGraph;
// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
