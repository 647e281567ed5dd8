//! Exit validation for head cells.
//!
//! A head leaves the grid moving away from its body: the first body
//! neighbor (in `Direction::ALL` order) fixes the exit as the opposite
//! direction, and every cell from the head to the boundary along that line
//! must be empty.

use crate::types::{Cell, Direction, Grid, Point};

/// Direction pointing away from the first body neighbor of `p`.
///
/// Only the first body-adjacent direction is considered. A head touching
/// body cells on two sides gets a single candidate exit.
pub fn find_direction(grid: &Grid, p: Point) -> Option<Direction> {
    Direction::ALL
        .into_iter()
        .find(|&d| grid.step(p, d).is_some_and(|n| grid.at(n) == Cell::Body))
        .map(Direction::opposite)
}

/// True when every cell strictly after `p` along `dir` is empty up to the boundary.
pub fn path_clear(grid: &Grid, p: Point, dir: Direction) -> bool {
    let mut cur = p;
    while let Some(next) = grid.step(cur, dir) {
        if grid.at(next) != Cell::Empty {
            return false;
        }
        cur = next;
    }
    true
}

/// Exit direction for the head at `p`, if its single candidate path is clear.
pub fn has_exit(grid: &Grid, p: Point) -> Option<Direction> {
    let dir = find_direction(grid, p)?;
    path_clear(grid, p, dir).then_some(dir)
}
