mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{BOARD_CELLS, Board, MOVE_ORDER};
pub use bot_controller::{BotInput, BotType, calculate_move, calculate_negamax_move};
pub use game_state::GameState;
pub use types::{GameStatus, Mark, WinningLine};
pub use win_detector::{check_win, check_win_with_line};
