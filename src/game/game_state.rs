use super::board::{BOARD_CELLS, Board};
use super::types::{GameStatus, Mark, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

/// Core match state: board, side to move and derived outcome.
/// X always moves first; the turn only advances while the game is in progress.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<usize>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err("Not your turn".to_string());
        }

        if index >= BOARD_CELLS {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.is_cell_empty(index) {
            return Err("Cell is already marked".to_string());
        }

        self.board.set(index, mark);
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn reset(&mut self) {
        self.board.clear_all();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }

    pub fn winner_mark(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.status {
            GameStatus::XWon | GameStatus::OWon => check_win_with_line(&self.board),
            _ => None,
        }
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            _ => Mark::X,
        };
    }

    fn check_game_over(&mut self) {
        if let Some(winner_mark) = check_win(&self.board) {
            self.status = match winner_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut GameState, moves: &[usize]) {
        for &index in moves {
            let mark = state.current_mark();
            state.place_mark(mark, index).unwrap();
        }
    }

    #[test]
    fn test_x_moves_first_and_turns_alternate() {
        let mut state = GameState::new();
        assert_eq!(state.current_mark(), Mark::X);
        state.place_mark(Mark::X, 4).unwrap();
        assert_eq!(state.current_mark(), Mark::O);
        state.place_mark(Mark::O, 0).unwrap();
        assert_eq!(state.current_mark(), Mark::X);
    }

    #[test]
    fn test_rejects_out_of_turn_mark() {
        let mut state = GameState::new();
        let result = state.place_mark(Mark::O, 4);
        assert_eq!(result, Err("Not your turn".to_string()));
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let mut state = GameState::new();
        state.place_mark(Mark::X, 4).unwrap();
        let result = state.place_mark(Mark::O, 4);
        assert_eq!(result, Err("Cell is already marked".to_string()));
    }

    #[test]
    fn test_rejects_out_of_bounds_index() {
        let mut state = GameState::new();
        let result = state.place_mark(Mark::X, 9);
        assert_eq!(result, Err("Position out of bounds".to_string()));
    }

    #[test]
    fn test_rejects_moves_after_game_over() {
        let mut state = GameState::new();
        // X: 0 1 2 (top row), O: 3 4
        play(&mut state, &[0, 3, 1, 4, 2]);
        assert_eq!(state.status(), GameStatus::XWon);
        let result = state.place_mark(Mark::O, 5);
        assert_eq!(result, Err("Game is already over".to_string()));
    }

    #[test]
    fn test_win_records_winner_and_line() {
        let mut state = GameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);
        assert_eq!(state.winner_mark(), Some(Mark::X));
        assert_eq!(state.winning_line().unwrap().cells, [0, 1, 2]);
        // Turn does not advance past a terminal position.
        assert_eq!(state.current_mark(), Mark::X);
    }

    #[test]
    fn test_full_board_without_winner_is_a_draw() {
        let mut state = GameState::new();
        // X O X / X O O / O X X, played in a legal order.
        play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(state.winner_mark(), None);
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_fixed_move_sequence_is_deterministic_after_reset() {
        let moves = [4, 0, 8, 2, 1, 7, 5];
        let mut state = GameState::new();
        play(&mut state, &moves);
        let first_status = state.status();
        let first_cells = *state.board().cells();

        state.reset();
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.current_mark(), Mark::X);
        assert!(state.board().available_moves().len() == 9);

        play(&mut state, &moves);
        assert_eq!(state.status(), first_status);
        assert_eq!(*state.board().cells(), first_cells);
    }
}
