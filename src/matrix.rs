//! Dense grid of per-cell planner state
//!
//! A [`Matrix`] is created once with its extents and every cell is filled with
//! an [`LpState`] that knows its own coordinate and starts at
//! [`INFINITY`] for both estimates. The planner then edits cells in place.

use std::ops::{Index, IndexMut};

use crate::coordinate::Coordinate;
use crate::error::{PlanningError, Result};

/// Cost sentinel for "not reached yet"
pub const INFINITY: i32 = i32::MAX;

/// Cost of a single move between adjacent cells
pub const STEP_COST: i32 = 1;

/// Planner state of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LpState {
    pub coordinate: Coordinate,
    /// Best known cost estimate
    pub g: i32,
    /// One-step lookahead estimate (rhs)
    pub r: i32,
}

impl LpState {
    /// A state at `coordinate` with both estimates at [`INFINITY`]
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            g: INFINITY,
            r: INFINITY,
        }
    }

    /// `g == r`; an inconsistent state needs reprocessing
    pub fn is_consistent(&self) -> bool {
        self.g == self.r
    }
}

/// `height` rows of `width` cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    cells: Vec<LpState>,
    height: usize,
    width: usize,
}

impl Matrix {
    /// Creates a `height` by `width` grid of unreached cells
    ///
    /// # Errors
    /// Returns [`PlanningError::GridTooLarge`] if the extents fail
    /// [`check_extents`](Self::check_extents). Nothing is allocated then.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        let (rows, cols) = Self::check_extents(height, width)?;
        let mut cells = Vec::with_capacity(height * width);
        for y in 0..rows {
            for x in 0..cols {
                cells.push(LpState::new(Coordinate::new(x, y)));
            }
        }
        Ok(Self {
            cells,
            height,
            width,
        })
    }

    /// Checks that every cell of a `height` by `width` grid is addressable
    ///
    /// Each axis must fit in `i32` so cell coordinates stay exact, and the
    /// cell count must fit in `usize`. Returns the extents as `(rows, cols)`.
    ///
    /// # Errors
    /// Returns [`PlanningError::GridTooLarge`] otherwise.
    pub fn check_extents(height: usize, width: usize) -> Result<(i32, i32)> {
        let too_large = || PlanningError::GridTooLarge { height, width };
        let rows = i32::try_from(height).map_err(|_| too_large())?;
        let cols = i32::try_from(width).map_err(|_| too_large())?;
        height.checked_mul(width).ok_or_else(too_large)?;
        Ok((rows, cols))
    }

    /// Returns the number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// True if `c` lies within `[0, width) x [0, height)`
    pub fn contains(&self, c: Coordinate) -> bool {
        self.offset(c).is_some()
    }

    /// # Errors
    /// Returns [`PlanningError::OutOfRange`] outside the grid.
    pub fn get(&self, c: Coordinate) -> Result<&LpState> {
        let i = self.checked_offset(c)?;
        Ok(&self.cells[i])
    }

    /// # Errors
    /// Returns [`PlanningError::OutOfRange`] outside the grid.
    pub fn get_mut(&mut self, c: Coordinate) -> Result<&mut LpState> {
        let i = self.checked_offset(c)?;
        Ok(&mut self.cells[i])
    }

    /// Neighbours of `c` that fall inside the grid, in direction-code order
    pub fn in_bounds_neighbours(&self, c: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        c.neighbours().into_iter().filter(move |n| self.contains(*n))
    }

    /// Cells in row-major order
    pub fn iter(&self) -> std::slice::Iter<'_, LpState> {
        self.cells.iter()
    }

    fn offset(&self, c: Coordinate) -> Option<usize> {
        let x = usize::try_from(c.x).ok()?;
        let y = usize::try_from(c.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    fn checked_offset(&self, c: Coordinate) -> Result<usize> {
        self.offset(c).ok_or(PlanningError::OutOfRange {
            coordinate: c,
            width: self.width,
            height: self.height,
        })
    }
}

/// Unchecked-by-contract access; panics outside the grid
impl Index<Coordinate> for Matrix {
    type Output = LpState;

    fn index(&self, c: Coordinate) -> &LpState {
        match self.offset(c) {
            Some(i) => &self.cells[i],
            None => panic!(
                "coordinate {c} is outside a {}x{} grid",
                self.width, self.height
            ),
        }
    }
}

impl IndexMut<Coordinate> for Matrix {
    fn index_mut(&mut self, c: Coordinate) -> &mut LpState {
        match self.offset(c) {
            Some(i) => &mut self.cells[i],
            None => panic!(
                "coordinate {c} is outside a {}x{} grid",
                self.width, self.height
            ),
        }
    }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = &'a LpState;
    type IntoIter = std::slice::Iter<'a, LpState>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
