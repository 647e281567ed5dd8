//! Snake search: first removable snake in row-major order.

use crate::exit::has_exit;
use crate::scan::collect_body;
use crate::types::{Cell, Grid, Point, Snake};

/// Find the first head (scanning y, then x, ascending) with a clear exit and
/// materialize its snake. `None` means the puzzle is finished.
pub fn find_free(grid: &Grid) -> Option<Snake> {
    for y in 0..grid.height {
        for x in 0..grid.width {
            if grid.get(x, y) != Cell::Head {
                continue;
            }
            let head = Point::new(x, y);
            if has_exit(grid, head).is_none() {
                continue;
            }
            return Some(Snake {
                head,
                body: collect_body(grid, head),
            });
        }
    }
    None
}

/// Number of head cells on the grid.
pub fn count_heads(grid: &Grid) -> usize {
    (0..grid.height)
        .flat_map(|y| (0..grid.width).map(move |x| (x, y)))
        .filter(|&(x, y)| grid.get(x, y) == Cell::Head)
        .count()
}
