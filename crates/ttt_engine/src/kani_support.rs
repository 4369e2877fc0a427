//! Kani arbitrary implementations for tic-tac-toe types.
//!
//! These allow Kani to explore every value of our types during model
//! checking.

#[cfg(kani)]
use crate::{Board, Cell, Move, Player};

#[cfg(kani)]
impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Move {
    fn any() -> Self {
        let index: usize = kani::any();
        kani::assume(index < 9);
        Move::ALL[index]
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Cell {
    fn any() -> Self {
        if kani::any() {
            Cell::Empty
        } else {
            Cell::Occupied(kani::any())
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Board {
    fn any() -> Self {
        let cells: [[Cell; 3]; 3] = kani::any();
        Board::from_cells(cells)
    }
}
