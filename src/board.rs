//! Board state: which ship sits on each cell and which cells have been attacked.

use crate::bitboard::BitBoard;
use crate::common::{AttackResult, BoardError};
use crate::config::BOARD_SIZE;
use crate::ship::{Orientation, Placement, Ship};
use core::fmt;
use rand::Rng;

const N: usize = BOARD_SIZE as usize;

type BB = BitBoard<u128, N>;

/// A `BOARD_SIZE`×`BOARD_SIZE` grid of borrowed ships and attack marks.
///
/// Ships are owned by the caller and must outlive the board. Placement is
/// all-or-nothing, and attacks bump the damage of the ship they land on.
pub struct Board<'s> {
    cells: [[Option<&'s Ship>; N]; N],
    ship_map: BB,
    attacks: BB,
    ships_remaining: usize,
}

impl<'s> Board<'s> {
    /// Create an empty board: no ships, no attacks.
    pub fn new() -> Self {
        Board {
            cells: [[None; N]; N],
            ship_map: BB::new(),
            attacks: BB::new(),
            ships_remaining: 0,
        }
    }

    /// Place `ship` at (`row`, `col`) extending along `orientation`.
    ///
    /// Nothing changes unless every cell is on the board and unoccupied.
    pub fn place_ship(
        &mut self,
        ship: &'s Ship,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if ship.is_placed() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let placement = match Placement::<u128, N>::new(ship.length(), orientation, row, col) {
            Ok(p) => p,
            Err(e) => {
                log::debug!("rejected {} at ({}, {}) {:?}: {}", ship.name(), row, col, orientation, e);
                return Err(e);
            }
        };
        let mask = placement.mask();
        if !(self.ship_map & mask).is_empty() {
            log::debug!("rejected {} at ({}, {}) {:?}: overlap", ship.name(), row, col, orientation);
            return Err(BoardError::ShipOverlaps);
        }

        for (r, c) in placement.cells() {
            self.cells[r][c] = Some(ship);
        }
        self.ship_map |= mask;
        self.ships_remaining += 1;
        ship.mark_placed();
        log::debug!("placed {} at ({}, {}) {:?}", ship.name(), row, col, orientation);
        Ok(())
    }

    /// Random in-bounds, non-overlapping `(row, col, Orientation)` for a ship of `length`.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidLength);
        }
        if length > N {
            return Err(BoardError::UnableToPlaceShip);
        }
        for _ in 0..100 {
            let orientation = if rng.random() {
                Orientation::RowWise
            } else {
                Orientation::ColumnWise
            };
            let (max_r, max_c) = match orientation {
                Orientation::RowWise => (N - 1, N - length),
                Orientation::ColumnWise => (N - length, N - 1),
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            let placement = Placement::<u128, N>::new(length, orientation, r, c)?;
            if (self.ship_map & placement.mask()).is_empty() {
                return Ok((r, c, orientation));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Attack (`row`, `col`).
    ///
    /// The cell is marked attacked whatever it holds. A ship only takes damage
    /// the first time one of its cells is attacked; attacking the same cell
    /// again still reports a hit.
    pub fn attack(&mut self, row: usize, col: usize) -> Result<AttackResult, BoardError> {
        let already_attacked = self.attacks.get(row, col)?;
        self.attacks.set(row, col)?;

        let Some(ship) = self.cells[row][col] else {
            log::trace!("attack ({}, {}): miss", row, col);
            return Ok(AttackResult::Miss);
        };
        if already_attacked {
            log::trace!("attack ({}, {}): repeat hit on {}", row, col, ship.name());
            return Ok(AttackResult::Hit);
        }
        if ship.hit() {
            self.ships_remaining -= 1;
            log::info!("{} sunk, {} ships remaining", ship.name(), self.ships_remaining);
            return Ok(AttackResult::Sunk(ship.name()));
        }
        log::trace!("attack ({}, {}): hit {} ({}/{})", row, col, ship.name(), ship.damage(), ship.length());
        Ok(AttackResult::Hit)
    }

    /// Placed ships that are not yet sunk.
    pub fn ships_remaining(&self) -> usize {
        self.ships_remaining
    }

    /// `true` once ships have been placed and every one of them is sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ship_map.is_empty() && self.ships_remaining == 0
    }

    /// The ship occupying (`row`, `col`), if any. `None` off the board.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<&'s Ship> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    /// Whether (`row`, `col`) has been attacked. `false` off the board.
    pub fn is_attacked(&self, row: usize, col: usize) -> bool {
        self.attacks.get(row, col).unwrap_or(false)
    }

    /// Occupancy mask of all placed ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    /// Every cell attacked so far.
    pub fn attacks(&self) -> BB {
        self.attacks
    }

    /// Write the board to stdout.
    #[cfg(feature = "std")]
    pub fn print_board(&self) {
        std::println!("{}", self);
    }
}

impl Default for Board<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// `.` open water, `#` ship, `X` hit, `o` miss.
impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..N {
            write!(f, " {}", c)?;
        }
        for r in 0..N {
            writeln!(f)?;
            write!(f, "{:>2}", r)?;
            for c in 0..N {
                let attacked = self.is_attacked(r, c);
                let mark = match (self.cells[r][c].is_some(), attacked) {
                    (true, true) => 'X',
                    (true, false) => '#',
                    (false, true) => 'o',
                    (false, false) => '.',
                };
                write!(f, " {}", mark)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  attacks: {:?},\n  ships_remaining: {}\n}}",
            self.ship_map, self.attacks, self.ships_remaining
        )
    }
}
