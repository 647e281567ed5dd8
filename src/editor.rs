//! Level editor grid state: painting, hotkeys, load and export.
//!
//! Heads may only be painted on the even lattice (both coordinates even).
//! The head hotkey ignores the lattice. Dimensions are clamped to at least 1
//! so an exported grid always loads back.

use std::fmt;

use crate::config::{EditorConfig, DEFAULT_EDITOR_SIZE, MAX_EDITOR_CELLS};
use crate::level::{self, LevelError};
use crate::types::{Cell, Grid};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorError {
    /// `width * height` overflows or exceeds `MAX_EDITOR_CELLS`.
    GridTooLarge { width: usize, height: usize },
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::GridTooLarge { width, height } => {
                write!(f, "grid too large: {}x{} exceeds {} cells", width, height, MAX_EDITOR_CELLS)
            }
        }
    }
}

impl std::error::Error for EditorError {}

fn sized_grid(width: usize, height: usize) -> Result<Grid, EditorError> {
    let (width, height) = (width.max(1), height.max(1));
    match width.checked_mul(height) {
        Some(cells) if cells <= MAX_EDITOR_CELLS => {
            Grid::try_new(width, height).ok_or(EditorError::GridTooLarge { width, height })
        }
        _ => Err(EditorError::GridTooLarge { width, height }),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    Pan,
    Body,
    Erase,
    Head,
    Background,
}

impl Tool {
    /// Accepts the toolbar names (`pan`, `black`, `white`, `red`, `bg`) and
    /// the descriptive ones.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pan" => Some(Tool::Pan),
            "black" | "body" => Some(Tool::Body),
            "white" | "erase" => Some(Tool::Erase),
            "red" | "head" => Some(Tool::Head),
            "bg" | "background" => Some(Tool::Background),
            _ => None,
        }
    }

    /// Tools that write cells (as opposed to moving the view or background).
    pub fn paints(self) -> bool {
        matches!(self, Tool::Body | Tool::Erase | Tool::Head)
    }
}

#[derive(Clone, Debug)]
pub struct Editor {
    grid: Grid,
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            grid: Grid::new(DEFAULT_EDITOR_SIZE, DEFAULT_EDITOR_SIZE),
        }
    }
}

impl Editor {
    pub fn new(width: usize, height: usize) -> Result<Self, EditorError> {
        Ok(Self {
            grid: sized_grid(width, height)?,
        })
    }

    pub fn from_config(config: &EditorConfig) -> Result<Self, EditorError> {
        Self::new(config.width, config.height)
    }

    /// Replace the grid with an empty one of the new size. On error the grid
    /// is untouched.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), EditorError> {
        self.grid = sized_grid(width, height)?;
        Ok(())
    }

    pub fn is_head_slot(x: usize, y: usize) -> bool {
        x % 2 == 0 && y % 2 == 0
    }

    /// Apply `tool` at (x, y). Returns whether the cell changed.
    pub fn paint(&mut self, x: usize, y: usize, tool: Tool) -> bool {
        let cell = match tool {
            Tool::Body => Cell::Body,
            Tool::Erase => Cell::Empty,
            Tool::Head if Self::is_head_slot(x, y) => Cell::Head,
            Tool::Head | Tool::Pan | Tool::Background => return false,
        };
        self.write(x, y, cell)
    }

    /// Head hotkey: place a head anywhere in bounds.
    pub fn stamp_head(&mut self, x: usize, y: usize) -> bool {
        self.write(x, y, Cell::Head)
    }

    /// Clear hotkey.
    pub fn clear_cell(&mut self, x: usize, y: usize) -> bool {
        self.write(x, y, Cell::Empty)
    }

    /// Replace the grid with a parsed level. On error the grid is untouched.
    pub fn load(&mut self, text: &str) -> Result<(), LevelError> {
        self.grid = level::parse(text)?;
        Ok(())
    }

    pub fn export(&self) -> String {
        level::serialize(&self.grid)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    fn write(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        match self.grid.checked(x, y) {
            Some(current) if current != cell => {
                self.grid.set(x, y, cell);
                true
            }
            _ => false,
        }
    }
}
