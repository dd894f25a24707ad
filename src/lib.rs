pub mod config;
pub mod game;
pub mod logger;
pub mod session;

pub use game::{
    Board, BotInput, BotType, GameState, GameStatus, Mark, WinningLine, calculate_move,
    calculate_negamax_move, check_win, check_win_with_line,
};
pub use session::{FirstPlayerMode, LocalMatch, MatchSettings, MatchView, Opponent, SessionRng};
