//! Snake removal with an undo stack.

use crate::types::{Cell, Grid, Snake};

/// LIFO log of removed snakes. Unbounded; lives as long as the session.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<Snake>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the snake's cells and record a copy of it.
    ///
    /// Cell contents are not validated; `snake` is expected to come from
    /// `find_free` on the same grid.
    pub fn remove(&mut self, grid: &mut Grid, snake: &Snake) {
        self.entries.push(snake.clone());
        for p in snake.points() {
            grid.set(p.x, p.y, Cell::Empty);
        }
    }

    /// Pop the most recent removal and write it back (body = 1, head = 2).
    ///
    /// Whatever currently occupies those cells is overwritten.
    pub fn restore(&mut self, grid: &mut Grid) -> Option<Snake> {
        let snake = self.entries.pop()?;
        for p in &snake.body {
            grid.set(p.x, p.y, Cell::Body);
        }
        grid.set(snake.head.x, snake.head.y, Cell::Head);
        Some(snake)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::find_free;
    use crate::level::parse;
    use crate::types::Point;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_remove_clears_cells_and_records() {
        let mut g = parse("2110\n0000").unwrap();
        let mut h = History::new();
        let snake = find_free(&g).unwrap();
        h.remove(&mut g, &snake);
        assert_eq!(g.occupied(), 0);
        assert_eq!(h.len(), 1);
        assert_eq!(h.restore(&mut g), Some(snake));
        assert_eq!(g.occupied(), 3);
    }

    #[test]
    fn test_restore_empty_is_noop() {
        let mut g = parse("21").unwrap();
        let before = g.clone();
        let mut h = History::new();
        assert_eq!(h.restore(&mut g), None);
        assert_eq!(g, before);
    }

    #[test]
    fn test_restore_is_lifo() {
        let mut g = parse("210\n000\n012").unwrap();
        let mut h = History::new();
        let first = find_free(&g).unwrap();
        h.remove(&mut g, &first);
        let second = find_free(&g).unwrap();
        h.remove(&mut g, &second);
        assert_eq!(first.head, Point::new(0, 0));
        assert_eq!(second.head, Point::new(2, 2));

        assert_eq!(h.restore(&mut g), Some(second));
        assert_eq!(g.get(2, 2), Cell::Head);
        assert_eq!(g.get(0, 0), Cell::Empty);
        assert_eq!(h.restore(&mut g), Some(first));
        assert!(h.is_empty());
    }

    #[test]
    fn test_restore_overwrites_current_contents() {
        let mut g = parse("21").unwrap();
        let mut h = History::new();
        let snake = find_free(&g).unwrap();
        h.remove(&mut g, &snake);
        g.set(0, 0, Cell::Body);
        g.set(1, 0, Cell::Head);
        h.restore(&mut g);
        assert_eq!(g.get(0, 0), Cell::Head);
        assert_eq!(g.get(1, 0), Cell::Body);
    }

    #[test]
    fn test_remove_then_restore_is_identity() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut checked = 0;
        for _ in 0..300 {
            let (w, hgt) = (rng.random_range(2..9), rng.random_range(2..9));
            let mut g = Grid::new(w, hgt);
            for y in 0..hgt {
                for x in 0..w {
                    let cell = match rng.random_range(0..6) {
                        0 => Cell::Head,
                        1 | 2 => Cell::Body,
                        _ => Cell::Empty,
                    };
                    g.set(x, y, cell);
                }
            }
            let Some(snake) = find_free(&g) else { continue };
            // Restoring rewrites the head as 2 and the body as 1; other heads the
            // component walked through are not part of the snake.
            let original = g.clone();
            let mut h = History::new();
            h.remove(&mut g, &snake);
            h.restore(&mut g);
            assert_eq!(g, original);
            checked += 1;
        }
        assert!(checked > 0);
    }
}
