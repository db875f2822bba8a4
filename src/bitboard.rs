//! Square bit grids packed into a single unsigned integer.
//!
//! Cell `(row, col)` of an `N×N` grid lives at bit `row * N + col`. The board
//! uses these for ship occupancy and attack history, and placements use them
//! to describe the cells a ship covers.

use core::fmt;
use core::mem;
use core::ops::{BitAnd, BitOr, BitOrAssign};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// `N * N` does not fit into the backing integer.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column is outside `0..N`.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "{}x{} grid needs {} bits, only {} available", n, n, n * n, capacity)
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is off the grid", row, col)
            }
        }
    }
}

/// An `N×N` grid of flags stored in `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// An empty grid. Does not check that `N * N` fits in `T`; see [`BitBoard::try_new`].
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// An empty grid, or `SizeTooLarge` when `T` cannot hold `N * N` cells.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if N * N > capacity {
            return Err(BitBoardError::SizeTooLarge { n: N, capacity });
        }
        Ok(Self::new())
    }

    /// Number of set cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether `(row, col)` is set.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        let bit = Self::bit(row, col)?;
        Ok(!(self.bits & bit).is_zero())
    }

    /// Sets `(row, col)`. Setting an already set cell is a no-op.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let bit = Self::bit(row, col)?;
        self.bits = self.bits | bit;
        Ok(())
    }

    /// Builds a grid with every listed cell set.
    pub fn from_iter<I>(cells: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::new();
        for (row, col) in cells {
            board.set(row, col)?;
        }
        Ok(board)
    }

    /// Set cells in row-major order.
    pub fn iter_set_bits(&self) -> SetBits<'_, T, N> {
        SetBits { board: self, idx: 0 }
    }

    #[inline]
    fn bit(row: usize, col: usize) -> Result<T, BitBoardError> {
        if row >= N || col >= N {
            return Err(BitBoardError::IndexOutOfBounds { row, col });
        }
        Ok(T::one() << (row * N + col))
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter_set_bits()).finish()
    }
}

/// Renders one line per row, `#` for set cells and `.` for clear ones.
impl<T, const N: usize> fmt::Display for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            for col in 0..N {
                let set = self.get(row, col).unwrap_or(false);
                write!(f, "{}", if set { '#' } else { '.' })?;
            }
            if row + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the set cells of a [`BitBoard`].
#[derive(Clone, Copy)]
pub struct SetBits<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for SetBits<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let (row, col) = (self.idx / N, self.idx % N);
            self.idx += 1;
            if self.board.get(row, col).unwrap_or(false) {
                return Some((row, col));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        BitBoard { bits: self.bits & rhs.bits }
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        BitBoard { bits: self.bits | rhs.bits }
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
