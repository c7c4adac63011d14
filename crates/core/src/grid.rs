//! The rectangular cell grid and its adjacency queries.

use crate::config::checked_cell_count;
use crate::error::GenerateError;
use crate::model::BoardDocument;
use crate::types::{Direction, Field, Position};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Field>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![Field::Grass; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Row-major index of `pos`. Panics when `pos` lies outside the board.
    pub fn index(&self, pos: Position) -> usize {
        assert!(self.in_bounds(pos), "position {pos} outside {}x{} board", self.width, self.height);
        (pos.y as usize) * self.width + (pos.x as usize)
    }

    pub fn position_of(&self, index: usize) -> Position {
        Position::new((index % self.width) as i32, (index / self.width) as i32)
    }

    pub fn field_at(&self, pos: Position) -> &Field {
        &self.cells[self.index(pos)]
    }

    pub fn is_free(&self, pos: Position) -> bool {
        self.field_at(pos).is_grass()
    }

    /// In-bounds orthogonal neighbors in north, east, south, west order.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        Direction::ALL
            .into_iter()
            .map(|direction| pos.step(direction))
            .filter(|&next| self.in_bounds(next))
            .collect()
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(|index| self.position_of(index))
    }

    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|field| field.is_grass()).count()
    }

    pub fn count_matching(&self, predicate: impl Fn(&Field) -> bool) -> usize {
        self.cells.iter().filter(|field| predicate(field)).count()
    }

    pub(crate) fn place(&mut self, pos: Position, field: Field) {
        let index = self.index(pos);
        debug_assert!(self.cells[index].is_grass(), "cell {pos} is already occupied");
        self.cells[index] = field;
    }

    /// Rebuilds the typed grid described by a finished board document.
    pub fn from_document(document: &BoardDocument) -> Result<Self, GenerateError> {
        checked_cell_count(document.width, document.height)?;
        let mut grid = Self::new(document.width, document.height);

        let eye = document.eye;
        grid.place_checked(eye.position, Field::Eye { direction: eye.direction })?;
        for start in &document.start_fields {
            grid.place_checked(start.position, Field::StartField { direction: start.direction })?;
        }
        for (rank, &checkpoint) in document.checkpoints.iter().enumerate() {
            grid.place_checked(checkpoint, Field::Checkpoint { rank })?;
        }
        for &hole in &document.holes {
            grid.place_checked(hole, Field::Hole)?;
        }
        for resource in &document.resource_fields {
            let field = Field::ResourceField { amount: resource.amount };
            grid.place_checked(resource.position, field)?;
        }
        for river in &document.river_fields {
            grid.place_checked(river.position, Field::River { direction: river.direction })?;
        }
        for wall in &document.walls {
            let (a, b) = wall.endpoints();
            if !grid.in_bounds(a) || !grid.in_bounds(b) {
                return Err(GenerateError::invalid(format!("wall {a} - {b} leaves the board")));
            }
        }

        Ok(grid)
    }

    fn place_checked(&mut self, pos: Position, field: Field) -> Result<(), GenerateError> {
        if !self.in_bounds(pos) {
            let label = field.label();
            return Err(GenerateError::invalid(format!("{label} at {pos} is off the board")));
        }
        if !self.is_free(pos) {
            return Err(GenerateError::invalid(format!(
                "{} at {pos} overlaps {}",
                field.label(),
                self.field_at(pos).label()
            )));
        }
        self.place(pos, field);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_two_neighbors_in_fixed_order() {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.neighbors(Position::new(0, 0)), vec![Position::new(1, 0), Position::new(0, 1)]);
        assert_eq!(
            grid.neighbors(Position::new(1, 1)),
            vec![Position::new(1, 0), Position::new(2, 1), Position::new(1, 2), Position::new(0, 1)]
        );
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        let grid = Grid::new(1, 1);
        assert!(grid.neighbors(Position::new(0, 0)).is_empty());
    }

    #[test]
    fn placing_a_field_consumes_a_free_cell() {
        let mut grid = Grid::new(2, 3);
        assert_eq!(grid.free_count(), 6);
        grid.place(Position::new(1, 2), Field::Hole);
        assert!(!grid.is_free(Position::new(1, 2)));
        assert_eq!(grid.free_count(), 5);
        assert_eq!(grid.field_at(Position::new(1, 2)), &Field::Hole);
    }

    #[test]
    fn positions_are_row_major() {
        let grid = Grid::new(2, 2);
        let order: Vec<Position> = grid.positions().collect();
        assert_eq!(
            order,
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(0, 1), Position::new(1, 1)]
        );
        assert_eq!(grid.index(Position::new(1, 1)), 3);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_bounds_lookup_fails_fast() {
        let grid = Grid::new(2, 2);
        let _ = grid.field_at(Position::new(2, 0));
    }
}
