use serde::{Deserialize, Serialize};

use super::session_rng::SessionRng;
use crate::game::{
    BOARD_CELLS, BotInput, BotType, GameState, GameStatus, Mark, WinningLine, calculate_move,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opponent {
    Human,
    Bot(BotType),
}

/// Who holds X. The bot plays second (O) unless the random toss gives it X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    Human,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSettings {
    pub opponent: Opponent,
    pub first_player: FirstPlayerMode,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            opponent: Opponent::Bot(BotType::Negamax),
            first_player: FirstPlayerMode::Human,
        }
    }
}

/// Everything a render loop needs to draw one frame of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchView {
    pub cells: [Mark; BOARD_CELLS],
    pub current_mark: Mark,
    pub status: GameStatus,
    pub winner: Option<Mark>,
    pub winning_line: Option<WinningLine>,
    pub last_move: Option<usize>,
}

/// Synchronous match driver: click in, state out. When the opponent is a
/// bot its reply is computed within the same call, so the renderer never
/// observes a board waiting on the bot.
pub struct LocalMatch {
    state: GameState,
    opponent: Opponent,
    bot_mark: Option<Mark>,
    rng: SessionRng,
}

impl LocalMatch {
    pub fn new(settings: MatchSettings, mut rng: SessionRng) -> Self {
        let bot_mark = match settings.opponent {
            Opponent::Human => None,
            Opponent::Bot(_) => Some(match settings.first_player {
                FirstPlayerMode::Human => Mark::O,
                FirstPlayerMode::Random => {
                    if rng.random_bool() {
                        Mark::X
                    } else {
                        Mark::O
                    }
                }
            }),
        };

        let mut game = Self {
            state: GameState::new(),
            opponent: settings.opponent,
            bot_mark,
            rng,
        };
        game.play_bot_turn();
        game
    }

    pub fn bot_mark(&self) -> Option<Mark> {
        self.bot_mark
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_bot_turn(&self) -> bool {
        self.state.status() == GameStatus::InProgress
            && self.bot_mark == Some(self.state.current_mark())
    }

    /// Disabled-cell logic the renderer polls before accepting a click.
    pub fn is_cell_enabled(&self, index: usize) -> bool {
        index < BOARD_CELLS
            && self.state.status() == GameStatus::InProgress
            && !self.is_bot_turn()
            && self.state.board().is_cell_empty(index)
    }

    /// A human placed a mark. In bot matches the bot replies immediately.
    pub fn handle_cell_click(&mut self, index: usize) -> Result<(), String> {
        if self.is_bot_turn() {
            return Err("Waiting for the bot to move".to_string());
        }

        let mark = self.state.current_mark();
        self.state.place_mark(mark, index)?;
        crate::log!("{:?} placed at cell {}", mark, index);

        self.play_bot_turn();
        self.log_outcome();
        Ok(())
    }

    /// New game on the same seats. A bot holding X opens again.
    pub fn reset(&mut self) {
        self.state.reset();
        crate::log!("match reset");
        self.play_bot_turn();
    }

    pub fn view(&self) -> MatchView {
        MatchView {
            cells: *self.state.board().cells(),
            current_mark: self.state.current_mark(),
            status: self.state.status(),
            winner: self.state.winner_mark(),
            winning_line: self.state.winning_line(),
            last_move: self.state.last_move(),
        }
    }

    fn play_bot_turn(&mut self) {
        if !self.is_bot_turn() {
            return;
        }
        let Opponent::Bot(bot_type) = self.opponent else {
            return;
        };

        let input = BotInput::from_game_state(&self.state);
        if let Some(index) = calculate_move(bot_type, &input, &mut self.rng) {
            let mark = self.state.current_mark();
            if self.state.place_mark(mark, index).is_ok() {
                crate::log!("bot ({:?}) placed {:?} at cell {}", bot_type, mark, index);
            }
        }
    }

    fn log_outcome(&self) {
        match self.state.status() {
            GameStatus::InProgress => {}
            GameStatus::Draw => crate::log!("game over: draw"),
            _ => {
                if let Some(winner) = self.state.winner_mark() {
                    crate::log!("game over: {:?} wins", winner);
                }
            }
        }
    }
}
