//! Ships and the cells they cover once placed.

use core::cell::Cell;
use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::bitboard::BitBoard;
use crate::common::BoardError;

/// Axis along which a ship extends from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Row fixed, columns increase.
    RowWise,
    /// Column fixed, rows increase.
    ColumnWise,
}

/// A ship owned by the caller: a name, a fixed length and the damage taken so far.
///
/// Boards only borrow ships. Damage sits behind a [`Cell`] so the board can
/// record hits through a shared reference while the caller keeps reading it.
pub struct Ship {
    name: &'static str,
    length: usize,
    damage: Cell<usize>,
    placed: Cell<bool>,
}

impl Ship {
    /// Create an undamaged ship.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self {
            name,
            length,
            damage: Cell::new(0),
            placed: Cell::new(false),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of distinct cells hit so far.
    pub fn damage(&self) -> usize {
        self.damage.get()
    }

    /// Cells left to hit before the ship sinks.
    pub fn health(&self) -> usize {
        self.length - self.damage.get()
    }

    pub fn is_sunk(&self) -> bool {
        self.damage.get() == self.length
    }

    /// Whether a board has accepted this ship.
    pub fn is_placed(&self) -> bool {
        self.placed.get()
    }

    /// Record one hit. Saturates at `length`; returns `true` if this hit sank the ship.
    pub(crate) fn hit(&self) -> bool {
        let damage = self.damage.get();
        if damage >= self.length {
            return false;
        }
        self.damage.set(damage + 1);
        damage + 1 == self.length
    }

    pub(crate) fn mark_placed(&self) {
        self.placed.set(true);
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", length: {}, damage: {} }}",
            self.name,
            self.length,
            self.damage.get()
        )
    }
}

/// The cells a ship of some length covers on an N×N grid from an anchor.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Placement<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    orientation: Orientation,
    row: usize,
    col: usize,
    length: usize,
    mask: BitBoard<T, N>,
}

impl<T, const N: usize> Placement<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Lay out `length` cells from (`row`, `col`) along `orientation`.
    /// Fails if any of them falls off the grid.
    pub fn new(
        length: usize,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidLength);
        }
        let (last_row, last_col) = match orientation {
            Orientation::RowWise => (row, col.saturating_add(length - 1)),
            Orientation::ColumnWise => (row.saturating_add(length - 1), col),
        };
        if last_row >= N || last_col >= N {
            return Err(BoardError::ShipOutOfBounds);
        }

        let mut placement = Placement {
            orientation,
            row,
            col,
            length,
            mask: BitBoard::new(),
        };
        placement.mask = BitBoard::from_iter(placement.cells())?;
        Ok(placement)
    }

    /// Covered cells, starting at the anchor.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (row, col, orientation) = (self.row, self.col, self.orientation);
        (0..self.length).map(move |i| match orientation {
            Orientation::RowWise => (row, col + i),
            Orientation::ColumnWise => (row + i, col),
        })
    }

    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Covered cells as a bitboard.
    pub fn mask(&self) -> BitBoard<T, N> {
        self.mask
    }
}

impl<T, const N: usize> fmt::Debug for Placement<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Placement {{ origin: ({}, {}), orientation: {:?}, length: {} }}",
            self.row, self.col, self.orientation, self.length
        )
    }
}
