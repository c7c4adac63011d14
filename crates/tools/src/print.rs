//! Plain-text rendering of a board grid, one padded label per cell.

use board_core::{Field, Grid, Position};

pub fn cell_label(field: &Field) -> String {
    match *field {
        Field::Grass | Field::Hole => field.label().to_string(),
        Field::Eye { direction } | Field::StartField { direction } | Field::River { direction } => {
            format!("{}{}", field.label(), direction.arrow())
        }
        Field::Checkpoint { rank } => format!("{}:{rank}", field.label()),
        Field::ResourceField { amount } => format!("{}:{amount}", field.label()),
    }
}

pub fn render_grid(grid: &Grid) -> String {
    let labels: Vec<String> = grid.positions().map(|pos| cell_label(grid.field_at(pos))).collect();
    let column_width = labels.iter().map(|label| label.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for y in 0..grid.height() {
        let row: Vec<String> = (0..grid.width())
            .map(|x| {
                let index = grid.index(Position::new(x as i32, y as i32));
                format!("{:<column_width$}", labels[index])
            })
            .collect();
        out.push_str(row.join(" ").trim_end());
        out.push('\n');
    }
    out
}
