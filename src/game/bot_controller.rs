use serde::{Deserialize, Serialize};

use super::board::Board;
use super::game_state::GameState;
use super::types::Mark;
use super::win_detector::check_win;
use crate::session::SessionRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotType {
    Random,
    Negamax,
}

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: *state.board(),
            current_mark: state.current_mark(),
        }
    }
}

pub fn calculate_move(bot_type: BotType, input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    match bot_type {
        BotType::Random => calculate_random_move(input, rng),
        BotType::Negamax => calculate_negamax_move(input),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = input.board.available_moves();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

/// Full-depth search. Returns a move whenever any empty cell exists.
pub fn calculate_negamax_move(input: &BotInput) -> Option<usize> {
    let side = input.current_mark.sign()?;
    let mut board = input.board;

    let mut best_score = i32::MIN;
    let mut best_move = None;

    for index in board.available_moves() {
        board.set(index, input.current_mark);
        let score = -negamax(&mut board, -side);
        board.clear(index);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
            // Winning reply found, nothing can score higher.
            if best_score == 1 {
                break;
            }
        }
    }

    best_move
}

/// Negamax over the {-1, 0, +1} outcome space. `side` is +1 for X to move,
/// -1 for O to move. Terminal positions score +1 when the winner matches
/// `side`. Moves are tried in preferred order with a place/undo discipline,
/// short-circuiting once a forced win is found.
fn negamax(board: &mut Board, side: i32) -> i32 {
    if let Some(winner_mark) = check_win(board) {
        return if winner_mark.sign() == Some(side) { 1 } else { -1 };
    }

    if board.is_full() {
        return 0;
    }

    let mut best = i32::MIN;

    for index in board.available_moves() {
        board.set(index, Mark::from_sign(side));
        let score = -negamax(board, -side);
        board.clear(index);

        if score > best {
            best = score;
        }
        if best == 1 {
            break;
        }
    }

    best
}
