//! Terminal UI: renders the board, announces results and turns key presses
//! into column drops. Talks to the game only through `GameState`.

mod app;
pub mod game_view;
mod terminal;

pub use app::App;
pub use terminal::{CrosstermTerminal, TerminalSession};
