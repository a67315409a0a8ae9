//! Exhaustive minimax search for the computer player.
//!
//! The full 3x3 game tree is small enough to search without pruning or
//! memoization. Terminal boards score +1 when the engine's mark has won, -1
//! when the opponent has won and 0 for a draw. Scores are not discounted by
//! depth, so a slow win ranks the same as a fast one.

use super::rules::evaluate_terminal;
use super::{Board, Player, Position, Square};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Score of a board the engine has won.
pub const WIN: i32 = 1;
/// Score of a drawn board.
pub const DRAW: i32 = 0;
/// Score of a board the opponent has won.
pub const LOSS: i32 = -1;

/// Minimax player for a given mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    me: Player,
}

impl Minimax {
    /// Creates a searcher that plays (and maximizes for) `me`.
    pub fn new(me: Player) -> Self {
        Self { me }
    }

    /// The mark this searcher plays.
    pub fn player(&self) -> Player {
        self.me
    }

    /// Picks the best square for this searcher's mark.
    ///
    /// Candidates are tried in ascending index order and the best move is
    /// replaced only on a strictly greater score, so the lowest-index optimal
    /// square wins ties. Returns `None` if the board is already terminal.
    #[instrument(skip(self, board), fields(me = ?self.me))]
    pub fn best_move(&self, board: &Board) -> Option<Position> {
        let mut best: Option<(Position, i32)> = None;
        for (pos, score) in self.score_moves(board) {
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        if let Some((pos, score)) = best {
            debug!(position = %pos, score, "Computer chose position");
        }
        best.map(|(pos, _)| pos)
    }

    /// Minimax score of every empty square, in ascending index order.
    ///
    /// Empty on a terminal board.
    pub fn score_moves(&self, board: &Board) -> Vec<(Position, i32)> {
        if evaluate_terminal(board).is_terminal {
            return Vec::new();
        }

        let mut scratch = board.clone();
        Position::iter()
            .filter(|pos| board.is_empty(*pos))
            .map(|pos| {
                scratch.put(pos, Square::Occupied(self.me));
                let score = self.minimax(&mut scratch, false);
                scratch.put(pos, Square::Empty);
                (pos, score)
            })
            .collect()
    }

    /// Scores `board` with `maximizing` telling whose turn it is.
    ///
    /// `board` is restored before returning.
    pub fn minimax(&self, board: &mut Board, maximizing: bool) -> i32 {
        let eval = evaluate_terminal(board);
        if eval.is_terminal {
            return match eval.winner {
                Some(player) if player == self.me => WIN,
                Some(_) => LOSS,
                None => DRAW,
            };
        }

        let (mark, mut best) = if maximizing {
            (self.me, i32::MIN)
        } else {
            (self.me.opponent(), i32::MAX)
        };

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.put(pos, Square::Occupied(mark));
            let score = self.minimax(board, !maximizing);
            board.put(pos, Square::Empty);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}

/// Picks the computer's move when it plays O.
pub fn computer_move(board: &Board) -> Option<Position> {
    Minimax::new(Player::O).best_move(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_immediate_win_when_it_is_lowest() {
        // O completes the left column at 6; nothing lower also wins.
        let board: Board = "OX.|OX.|...".parse().unwrap();
        assert_eq!(computer_move(&board), Some(Position::BottomLeft));
    }

    #[test]
    fn test_minimax_restores_board() {
        let board: Board = "X...O....".parse().unwrap();
        let mut scratch = board.clone();
        Minimax::new(Player::O).minimax(&mut scratch, false);
        assert_eq!(scratch, board);
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let board: Board = "XXX|OO.|...".parse().unwrap();
        assert_eq!(computer_move(&board), None);
        assert!(Minimax::new(Player::O).score_moves(&board).is_empty());
    }
}
