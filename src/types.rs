//! Core data types for the snake-extraction solver.
//!
//! The grid uses flat `Vec` storage with row-major layout:
//! `cells[y * width + x]` maps to the JS equivalent `grid[y][x]`.

use serde::{Deserialize, Serialize};

/// State of a single grid position: 0 = empty, 1 = body, 2 = head.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Body = 1,
    Head = 2,
}

impl Cell {
    /// Decode a level character. Anything other than `1`/`2` is empty.
    pub fn from_char(ch: char) -> Self {
        match ch {
            '1' => Cell::Body,
            '2' => Cell::Head,
            _ => Cell::Empty,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::Body => '1',
            Cell::Head => '2',
        }
    }

    /// Body or head: part of some snake.
    #[inline(always)]
    pub fn is_snake(self) -> bool {
        self != Cell::Empty
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Cardinal step direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// Fixed iteration order: +x, -x, +y, -y.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    #[inline(always)]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
        }
    }
}

/// Rectangular grid of cells. Dimensions are fixed after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Sizes from untrusted input go through `try_new`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Empty grid, or `None` when `width * height` overflows `usize`.
    pub fn try_new(width: usize, height: usize) -> Option<Self> {
        let len = width.checked_mul(height)?;
        Some(Self {
            width,
            height,
            cells: vec![Cell::Empty; len],
        })
    }

    /// Build from rows of cells. Short rows are padded with `Empty`.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                grid.set(x, y, cell);
            }
        }
        grid
    }

    /// Flat row-major index of an in-bounds point.
    #[inline(always)]
    pub fn index(&self, p: Point) -> usize {
        p.y * self.width + p.x
    }

    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.width + x]
    }

    #[inline(always)]
    pub fn set(&mut self, x: usize, y: usize, val: Cell) {
        self.cells[y * self.width + x] = val;
    }

    #[inline(always)]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline(always)]
    pub fn at(&self, p: Point) -> Cell {
        self.get(p.x, p.y)
    }

    /// Bounds-checked read.
    pub fn checked(&self, x: usize, y: usize) -> Option<Cell> {
        self.in_bounds(x, y).then(|| self.get(x, y))
    }

    /// Step one cell from `p` in `dir`, or `None` when that leaves the grid.
    #[inline(always)]
    pub fn step(&self, p: Point, dir: Direction) -> Option<Point> {
        let (dx, dy) = dir.delta();
        let nx = p.x as i64 + dx as i64;
        let ny = p.y as i64 + dy as i64;
        if nx < 0 || ny < 0 {
            return None;
        }
        let (nx, ny) = (nx as usize, ny as usize);
        self.in_bounds(nx, ny).then_some(Point::new(nx, ny))
    }

    /// In-bounds 4-neighbors of `p`, in `Direction::ALL` order.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        Direction::ALL.into_iter().filter_map(move |d| self.step(p, d))
    }

    /// Raw cell codes, row-major.
    pub fn codes(&self) -> Vec<u8> {
        self.cells.iter().map(|&c| c as u8).collect()
    }

    /// Count of body and head cells still on the grid.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_snake()).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() panics on 0; an empty-width grid has no rows to show.
        self.cells.chunks(self.width.max(1))
    }
}

/// A removable snake: the head plus every connected body cell.
/// `body` never contains `head`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    pub head: Point,
    pub body: Vec<Point>,
}

impl Snake {
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }
}
