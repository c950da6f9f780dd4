#![allow(missing_docs)]
//! Host-level tests for the canvas buffer.

use bargraph_kit::canvas::Canvas;
use bargraph_kit::mapping::BoardCount;

fn canvas(boards: u8) -> Canvas {
    Canvas::new(BoardCount::new(boards).unwrap()).unwrap()
}

#[test]
fn new_canvas_is_zeroed_and_sized_per_board() {
    for boards in 1..=8 {
        let canvas = canvas(boards);
        assert_eq!(canvas.len(), usize::from(boards) * 4);
        assert!(canvas.iter().all(|byte| *byte == 0));
        assert_eq!(canvas.board_count().get(), boards);
    }
}

#[test]
fn set_cell_sets_and_clears_one_bit() {
    let mut canvas = canvas(1);
    assert!(canvas.set_cell(13, true));
    assert_eq!(canvas.as_slice(), &[0x00, 0x20, 0x00, 0x00]);
    assert_eq!(canvas.cell(13), Some(true));

    assert!(canvas.set_cell(12, true));
    assert!(canvas.set_cell(13, false));
    assert_eq!(canvas.as_slice(), &[0x00, 0x10, 0x00, 0x00]);
    assert_eq!(canvas.cell(13), Some(false));
}

#[test]
fn set_cell_beyond_chain_is_dropped() {
    let mut canvas = canvas(2);
    canvas.set_cell(0, true);
    let before = canvas.clone();

    assert!(!canvas.set_cell(64, true));
    assert!(!canvas.set_cell(u32::MAX, true));
    assert_eq!(canvas, before);
    assert_eq!(canvas.cell(64), None);
}

#[test]
fn padding_cells_are_reachable_by_cell_index() {
    let mut canvas = canvas(1);
    assert!(canvas.set_cell(31, true));
    assert_eq!(canvas.as_slice(), &[0, 0, 0, 0x80]);
}

#[test]
fn clear_zeroes_every_byte() {
    let mut canvas = canvas(3);
    for cell in (0..96).step_by(5) {
        canvas.set_cell(cell, true);
    }
    canvas.clear();
    assert_eq!(canvas.as_slice(), &[0; 12]);
    assert_eq!(canvas.len(), 12);
}

#[test]
fn fill_below_lights_whole_bytes_then_partial_byte() {
    let mut canvas = canvas(1);
    assert!(canvas.fill_below(30));
    assert_eq!(canvas.as_slice(), &[0xFF, 0xFF, 0xFF, 0x3F]);

    assert!(canvas.fill_below(8));
    assert_eq!(canvas.as_slice(), &[0xFF, 0x00, 0x00, 0x00]);

    assert!(canvas.fill_below(0));
    assert_eq!(canvas.as_slice(), &[0x00, 0x00, 0x00, 0x00]);
}

#[test]
fn fill_below_passes_through_padding() {
    let mut canvas = canvas(2);
    assert!(canvas.fill_below(42));
    assert_eq!(
        canvas.as_slice(),
        &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x03, 0x00, 0x00]
    );
    assert_eq!(canvas.cell(30), Some(true));
    assert_eq!(canvas.cell(31), Some(true));
}

#[test]
fn fill_below_whole_chain() {
    let mut canvas = canvas(1);
    assert!(canvas.fill_below(32));
    assert_eq!(canvas.as_slice(), &[0xFF; 4]);
}

#[test]
fn fill_below_beyond_chain_is_dropped() {
    let mut canvas = canvas(1);
    canvas.set_cell(3, true);
    assert!(!canvas.fill_below(33));
    assert_eq!(canvas.as_slice(), &[0x08, 0, 0, 0]);
}
