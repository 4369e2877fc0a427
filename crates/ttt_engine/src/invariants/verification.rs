//! Bounded model checking of board invariants using Kani.

#[cfg(kani)]
mod proofs {
    use crate::{
        BalancedMarksInvariant, Board, Invariant, Move, Player, SingleWinnerInvariant,
        Speculation,
    };

    /// A legal placement on a balanced board keeps it balanced.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_place_keeps_marks_balanced() {
        let mut board: Board = kani::any();
        let mv: Move = kani::any();
        kani::assume(BalancedMarksInvariant::holds(&board));
        kani::assume(!board.is_occupied(mv));

        let player = board.to_move();
        board.place(mv, player);

        assert!(BalancedMarksInvariant::holds(&board));
    }

    /// Placing on a board without a winner cannot create two winners.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_single_winner_after_place() {
        let mut board: Board = kani::any();
        let mv: Move = kani::any();
        let player: Player = kani::any();
        kani::assume(board.winner().is_none());
        kani::assume(!board.is_occupied(mv));

        board.place(mv, player);

        assert!(SingleWinnerInvariant::holds(&board));
    }

    /// A speculative mark is always retracted when its guard drops.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_speculation_restores_board() {
        let mut board: Board = kani::any();
        let mv: Move = kani::any();
        let player: Player = kani::any();
        kani::assume(!board.is_occupied(mv));
        let before = board;

        {
            let guard = Speculation::place(&mut board, mv, player);
            assert!(guard.is_occupied(mv));
        }

        assert!(board == before);
    }
}
