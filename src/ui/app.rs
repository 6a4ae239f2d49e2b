use crate::game::{GameState, GameStatus, MoveError, Placement};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Next key press within `timeout`; releases, repeats and other events are
/// skipped.
fn poll_key(timeout: Duration) -> io::Result<Option<KeyEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
        _ => None,
    })
}

pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(game_state: GameState) -> Self {
        let selected_column = game_state.board().cols() / 2; // Start in middle
        App {
            game_state,
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Draw, then wait briefly for a key, until the player quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.should_quit {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if let Some(key) = poll_key(POLL_INTERVAL)? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;
        let last_column = self.game_state.board().cols() - 1;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.selected_column < last_column {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                // Digits map to 1-based columns, like clicking a column header
                let column = c as usize - '1' as usize;
                if column <= last_column {
                    self.selected_column = column;
                }
                self.drop_piece(column);
            }
            KeyCode::Char('r') => {
                self.game_state.restart();
                self.selected_column = self.game_state.board().cols() / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop the current player's piece and describe what happened
    fn drop_piece(&mut self, column: usize) {
        self.message = match self.game_state.drop_piece(column) {
            Ok(Placement { status, .. }) => match status {
                GameStatus::Won(winner) => {
                    Some(format!("{} won!", self.game_state.player(winner).name))
                }
                GameStatus::Tied => Some("Tie!".to_string()),
                GameStatus::InProgress => None,
            },
            Err(MoveError::ColumnFull(col)) => Some(format!("Column {} is full!", col + 1)),
            Err(MoveError::InvalidColumn { .. }) => Some("Invalid column!".to_string()),
            Err(MoveError::GameOver(_)) => {
                Some("Game over! Press 'r' to restart.".to_string())
            }
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_column, &self.message);
    }
}
