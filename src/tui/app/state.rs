use crate::game::{HanoiGame, PILE_COUNT};
use std::time::{Duration, Instant};

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    SelectPile(usize),
    CursorLeft,
    CursorRight,
    Confirm,
    Cancel,
    Undo,
    Redo,
    NewGame,
    ToggleHelp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
    Win,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub game: HanoiGame,
    // Pile under the keyboard cursor
    pub cursor: usize,
    // Source pile picked for the next move
    selected: Option<usize>,
    won: bool,
    help_open: bool,
    status: Option<(StatusKind, String)>,
    status_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(HanoiGame::new())
    }
}

impl AppState {
    const STATUS_TTL: Duration = Duration::from_secs(4);

    pub fn new(game: HanoiGame) -> Self {
        let won = game.is_game_won();
        Self {
            game,
            cursor: 0,
            selected: None,
            won,
            help_open: false,
            status: None,
            status_at: None,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn status(&self) -> Option<(StatusKind, &str)> {
        self.status.as_ref().map(|(kind, text)| (*kind, text.as_str()))
    }

    fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some((kind, text.into()));
        self.status_at = Some(Instant::now());
    }

    fn clear_status(&mut self) {
        self.status = None;
        self.status_at = None;
    }

    /// Expire stale status messages. The win banner stays until the next game.
    pub fn on_tick(&mut self) {
        if matches!(self.status, Some((StatusKind::Win, _))) {
            return;
        }
        if let Some(at) = self.status_at {
            if at.elapsed() >= Self::STATUS_TTL {
                self.clear_status();
            }
        }
    }

    /// Apply an input action. Returns true when the game position changed.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleHelp => {
                self.help_open = !self.help_open;
                false
            }
            InputAction::Cancel => {
                if self.help_open {
                    self.help_open = false;
                } else {
                    self.selected = None;
                }
                false
            }
            InputAction::CursorLeft => {
                self.cursor = (self.cursor + PILE_COUNT - 1) % PILE_COUNT;
                false
            }
            InputAction::CursorRight => {
                self.cursor = (self.cursor + 1) % PILE_COUNT;
                false
            }
            InputAction::SelectPile(idx) => self.select_pile(idx),
            InputAction::Confirm => self.select_pile(self.cursor),
            InputAction::Undo => self.undo(),
            InputAction::Redo => self.redo(),
            InputAction::NewGame => {
                self.new_game();
                true
            }
        }
    }

    fn select_pile(&mut self, idx: usize) -> bool {
        if idx >= PILE_COUNT {
            return false;
        }
        self.cursor = idx;
        if self.won {
            self.set_status(StatusKind::Win, self.win_text());
            return false;
        }
        match self.selected {
            None => {
                match self.game.pile(idx).and_then(|p| p.peek()) {
                    Some(card) => {
                        self.selected = Some(idx);
                        let text = format!("Picked {card} from pile {}", idx + 1);
                        self.set_status(StatusKind::Info, text);
                    }
                    None => {
                        self.set_status(StatusKind::Error, format!("Pile {} is empty", idx + 1))
                    }
                }
                false
            }
            Some(from) if from == idx => {
                self.selected = None;
                self.clear_status();
                false
            }
            Some(from) => {
                self.selected = None;
                self.attempt_move(from, idx)
            }
        }
    }

    fn attempt_move(&mut self, from: usize, to: usize) -> bool {
        match self.game.try_move(from, to) {
            Ok(mv) => {
                if self.game.is_game_won() {
                    self.won = true;
                    self.set_status(StatusKind::Win, self.win_text());
                } else {
                    self.set_status(StatusKind::Info, format!("Moved {mv}"));
                }
                true
            }
            Err(err) => {
                self.set_status(StatusKind::Error, err.to_string());
                false
            }
        }
    }

    fn undo(&mut self) -> bool {
        self.selected = None;
        if self.game.undo() {
            self.won = self.game.is_game_won();
            self.set_status(StatusKind::Info, "Undid last move");
            true
        } else {
            self.set_status(StatusKind::Error, "No moves to undo!");
            false
        }
    }

    fn redo(&mut self) -> bool {
        self.selected = None;
        if self.game.redo() {
            if self.game.is_game_won() {
                self.won = true;
                self.set_status(StatusKind::Win, self.win_text());
            } else {
                self.set_status(StatusKind::Info, "Redid move");
            }
            true
        } else {
            self.set_status(StatusKind::Error, "No moves to redo!");
            false
        }
    }

    pub fn new_game(&mut self) {
        self.game.reset();
        self.cursor = 0;
        self.selected = None;
        self.won = false;
        self.set_status(StatusKind::Info, "New game dealt");
    }

    fn win_text(&self) -> String {
        format!("You won in {} moves!", self.game.move_count())
    }
}
