use tracing::warn;

use super::canvas::{Canvas, Rect};
use crate::game::{Coordinate, Position, Roster};

/// Share of a cell left empty on each side so neighbouring squares stay apart
pub const CELL_INSET_RATIO: f64 = 0.05;

/// Pixel rectangle painted for a board cell.
///
/// Board row 0 is the bottom row of the canvas. Returns `None` for a
/// zero-sized board.
pub fn cell_rect(canvas_size: f64, board_size: u32, coordinate: Coordinate) -> Option<Rect> {
    if board_size == 0 {
        return None;
    }

    let square = canvas_size / board_size as f64;
    let inset = square * CELL_INSET_RATIO;
    let flipped_row = board_size as f64 - (coordinate.y as f64 + 1.0);

    Some(Rect::new(
        square * coordinate.x as f64 + inset,
        square * flipped_row + inset,
        square * (1.0 - 2.0 * CELL_INSET_RATIO),
        square * (1.0 - 2.0 * CELL_INSET_RATIO),
    ))
}

/// Clears the canvas and paints one inset square per position, in order, so a
/// later position on the same cell covers an earlier one.
pub fn render<C: Canvas + ?Sized>(
    canvas: &mut C,
    board_size: u32,
    positions: &[Position],
    roster: &Roster,
) {
    canvas.clear();

    if board_size == 0 {
        warn!(
            positions = positions.len(),
            "Board size is zero, nothing to paint"
        );
        return;
    }

    let canvas_size = canvas.size();
    for position in positions {
        if let Some(rect) = cell_rect(canvas_size, board_size, position.coordinate) {
            canvas.fill_rect(rect, roster.color_for(&position.player_name));
        }
    }
}
