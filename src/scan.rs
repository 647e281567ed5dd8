//! Connected-component extraction over body/head cells.

use crate::types::{Cell, Grid, Point};

/// Collect every body cell 4-connected to `start` through body or head cells.
///
/// The traversal passes through head cells but only `Body` cells are returned,
/// so the starting head is never part of the result. Points come back in
/// depth-first discovery order; callers that need a canonical order sort.
pub fn collect_body(grid: &Grid, start: Point) -> Vec<Point> {
    let mut body = Vec::new();
    if !grid.in_bounds(start.x, start.y) {
        return body;
    }

    let mut visited = vec![false; grid.width * grid.height];
    let mut stack: Vec<Point> = vec![start];

    while let Some(p) = stack.pop() {
        let idx = grid.index(p);
        if visited[idx] {
            continue;
        }
        visited[idx] = true;

        if grid.at(p) == Cell::Body {
            body.push(p);
        }

        for n in grid.neighbors(p) {
            if grid.at(n).is_snake() && !visited[grid.index(n)] {
                stack.push(n);
            }
        }
    }

    body
}
