//! Integer line rasterization used by the best-first heuristic.

use crate::types::Position;

/// Cells on the Bresenham line from `start` to `end`, both ends included, in order.
pub fn bresenham_line(start: Position, end: Position) -> Vec<Position> {
    let (mut x1, mut y1, mut x2, mut y2) = (start.x, start.y, end.x, end.y);
    let steep = y2.abs_diff(y1) > x2.abs_diff(x1);
    if steep {
        (x1, y1) = (y1, x1);
        (x2, y2) = (y2, x2);
    }
    let reversed = x1 > x2;
    if reversed {
        (x1, x2) = (x2, x1);
        (y1, y2) = (y2, y1);
    }

    let delta_x = x2 - x1;
    let delta_y = (y2 - y1).abs();
    let y_step = if y1 < y2 { 1 } else { -1 };
    let mut error = delta_x / 2;
    let mut y = y1;

    let mut cells = Vec::with_capacity(delta_x as usize + 1);
    for x in x1..=x2 {
        cells.push(if steep { Position::new(y, x) } else { Position::new(x, y) });
        error -= delta_y;
        if error < 0 {
            y += y_step;
            error += delta_x;
        }
    }

    if reversed {
        cells.reverse();
    }
    cells
}
