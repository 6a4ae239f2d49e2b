use tracing::{debug, info};

use super::board::RUN_LENGTH;
use super::{win, Board, Cell, Player, PlayerId};
use crate::config::AppConfig;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// A rejected move. The game state is unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the board (0..{cols})")]
    InvalidColumn { column: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("game is already over ({0:?})")]
    GameOver(GameStatus),
}

/// Where an accepted piece landed and the status it left the game in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: PlayerId,
    pub status: GameStatus,
}

/// Board, seats, turn pointer and status for one game. Only `drop_piece`
/// and `restart` mutate it; once the status is terminal every drop is a
/// no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    current_player: PlayerId,
    status: GameStatus,
}

impl GameState {
    /// Start a game on the default 6x7 board, player one to move.
    pub fn new(player_one: Player, player_two: Player) -> Self {
        GameState {
            board: Board::default(),
            players: [player_one, player_two],
            current_player: PlayerId::One,
            status: GameStatus::InProgress,
        }
    }

    /// Start a game on a `rows x cols` board. Both must be at least 4.
    pub fn with_dimensions(
        player_one: Player,
        player_two: Player,
        rows: usize,
        cols: usize,
    ) -> Result<Self, ConfigError> {
        Ok(GameState {
            board: Board::new(rows, cols)?,
            players: [player_one, player_two],
            current_player: PlayerId::One,
            status: GameStatus::InProgress,
        })
    }

    /// Start a game from validated configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::with_dimensions(
            config.player_one.to_player(),
            config.player_two.to_player(),
            config.board.rows,
            config.board.cols,
        )
    }

    /// Get current player
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned copy of the board, detached from further moves.
    pub fn board_snapshot(&self) -> Board {
        self.board.clone()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    pub fn move_count(&self) -> usize {
        self.board.occupied_count()
    }

    /// Columns that can still take a piece; empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Cells of the winning run, if the game has been won.
    pub fn winning_run(&self) -> Option<[(usize, usize); RUN_LENGTH]> {
        match self.status {
            GameStatus::Won(winner) => win::find_run(&self.board, winner),
            _ => None,
        }
    }

    /// Drop the current player's piece into `column`.
    ///
    /// After placing, the mover is checked for a win first and only then is
    /// the board checked for a tie, so filling the last cell with a winning
    /// move reports `Won`. The turn passes only while the game continues.
    pub fn drop_piece(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.is_terminal() {
            debug!(column, status = ?self.status, "move rejected: game over");
            return Err(MoveError::GameOver(self.status));
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player).map_err(|e| {
            debug!(column, ?player, error = %e, "move rejected");
            e
        })?;
        debug!(?player, row, column, "piece placed");

        if win::has_four_in_a_row(&self.board, player) {
            self.status = GameStatus::Won(player);
            info!(?player, moves = self.move_count(), "game won");
        } else if self.board.is_full() {
            self.status = GameStatus::Tied;
            info!(moves = self.move_count(), "game tied");
        } else {
            self.current_player = player.other();
        }

        Ok(Placement {
            row,
            column,
            player,
            status: self.status,
        })
    }

    /// Clear the board for a rematch with the same players and dimensions.
    pub fn restart(&mut self) {
        self.board = self.board.cleared();
        self.current_player = PlayerId::One;
        self.status = GameStatus::InProgress;
        info!(rows = self.board.rows(), cols = self.board.cols(), "game restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Column order that fills a 6x7 board with alternating moves and no
    /// four-in-a-row for either side.
    const TIE_SEQUENCE: [usize; 42] = [
        0, 1, 0, 0, 2, 0, 2, 0, 0, 1, 1, 2, 1, 2, 1, 1, 4, 2, 2, 3, 4, 3, 3, 4, 3, 4, 3, 3, 6,
        4, 4, 5, 6, 5, 5, 6, 5, 6, 5, 6, 6, 5,
    ];

    fn new_game() -> GameState {
        GameState::new(Player::new("Ada", "red"), Player::new("Grace", "yellow"))
    }

    fn play(state: &mut GameState, columns: &[usize]) {
        for &col in columns {
            state.drop_piece(col).unwrap();
        }
    }

    #[test]
    fn test_initial_state() {
        let state = new_game();
        assert_eq!(state.current_player(), PlayerId::One);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_columns().len(), 7);
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.player(PlayerId::Two).name, "Grace");
    }

    #[test]
    fn test_with_dimensions() {
        let state =
            GameState::with_dimensions(Player::new("a", "red"), Player::new("b", "blue"), 5, 9)
                .unwrap();
        assert_eq!(state.board().rows(), 5);
        assert_eq!(state.board().cols(), 9);

        let err =
            GameState::with_dimensions(Player::new("a", "red"), Player::new("b", "blue"), 6, 3)
                .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDimensions { cols: 3, .. }));
    }

    #[test]
    fn test_from_config() {
        let mut config = AppConfig::default();
        config.board.rows = 8;
        config.player_two.name = "Linus".to_string();
        let state = GameState::from_config(&config).unwrap();
        assert_eq!(state.board().rows(), 8);
        assert_eq!(state.player(PlayerId::Two).name, "Linus");

        config.board.cols = 2;
        assert!(GameState::from_config(&config).is_err());
    }

    #[test]
    fn test_drop_piece() {
        let mut state = new_game();
        let placement = state.drop_piece(3).unwrap();

        assert_eq!(
            placement,
            Placement {
                row: 5,
                column: 3,
                player: PlayerId::One,
                status: GameStatus::InProgress,
            }
        );
        assert_eq!(state.current_player(), PlayerId::Two);
        assert_eq!(state.cell(5, 3), Some(Cell::Occupied(PlayerId::One)));
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = new_game();
        let mut expected = PlayerId::One;
        for col in [0, 1, 2, 0, 1, 2, 4, 5] {
            assert_eq!(state.current_player(), expected);
            let placement = state.drop_piece(col).unwrap();
            assert_eq!(placement.player, expected);
            expected = expected.other();
        }
    }

    #[test]
    fn test_occupied_cells_never_change() {
        let mut state = new_game();
        let mut seen: Vec<(usize, usize, Cell)> = Vec::new();
        for &col in &TIE_SEQUENCE[..30] {
            let placement = state.drop_piece(col).unwrap();
            seen.push((
                placement.row,
                placement.column,
                Cell::Occupied(placement.player),
            ));
            for &(row, col, cell) in &seen {
                assert_eq!(state.cell(row, col), Some(cell));
            }
        }
    }

    #[test]
    fn test_full_column_is_a_no_op() {
        let mut state = new_game();
        play(&mut state, &[2, 2, 2, 2, 2, 2]);
        let before = state.clone();

        assert_eq!(state.drop_piece(2), Err(MoveError::ColumnFull(2)));
        assert_eq!(state, before);
        assert!(!state.legal_columns().contains(&2));
    }

    #[test]
    fn test_vertical_win_scenario() {
        // Player one stacks column 3, player two answers in column 0.
        let mut state = new_game();
        play(&mut state, &[3, 0, 3, 0, 3, 0]);
        assert_eq!(state.status(), GameStatus::InProgress);

        let placement = state.drop_piece(3).unwrap();
        assert_eq!(placement.row, 2);
        assert_eq!(placement.status, GameStatus::Won(PlayerId::One));
        assert_eq!(state.status(), GameStatus::Won(PlayerId::One));
        // Winner keeps the turn pointer.
        assert_eq!(state.current_player(), PlayerId::One);
        assert_eq!(state.winning_run(), Some([(2, 3), (3, 3), (4, 3), (5, 3)]));
    }

    #[test]
    fn test_horizontal_win() {
        let mut state = new_game();
        for col in 0..4 {
            state.drop_piece(col).unwrap(); // Player one, bottom row
            if col < 3 {
                state.drop_piece(col).unwrap(); // Player two, one row up
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.status(), GameStatus::Won(PlayerId::One));
    }

    #[test]
    fn test_player_two_can_win() {
        let mut state = new_game();
        play(&mut state, &[6, 0, 6, 1, 5, 2, 6]);
        let placement = state.drop_piece(3).unwrap();
        assert_eq!(placement.status, GameStatus::Won(PlayerId::Two));
        assert_eq!(state.current_player(), PlayerId::Two);
    }

    #[test]
    fn test_tie_on_full_board() {
        let mut state = new_game();
        let (last, rest) = TIE_SEQUENCE.split_last().unwrap();
        play(&mut state, rest);
        assert_eq!(state.status(), GameStatus::InProgress);

        let placement = state.drop_piece(*last).unwrap();
        assert_eq!(placement.status, GameStatus::Tied);
        assert_eq!(state.status(), GameStatus::Tied);
        assert!(state.board().is_full());
        assert_eq!(state.move_count(), 42);
        assert!(state.legal_columns().is_empty());
        assert_eq!(state.winning_run(), None);
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_tie() {
        // 4x4 board where the final piece completes column 2 for player two.
        let mut state =
            GameState::with_dimensions(Player::new("a", "red"), Player::new("b", "blue"), 4, 4)
                .unwrap();
        play(
            &mut state,
            &[3, 2, 1, 0, 0, 1, 3, 1, 0, 3, 1, 2, 0, 2, 3],
        );
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.current_player(), PlayerId::Two);

        let placement = state.drop_piece(2).unwrap();
        assert!(state.board().is_full());
        assert_eq!(placement.status, GameStatus::Won(PlayerId::Two));
        assert_eq!(state.winning_run(), Some([(0, 2), (1, 2), (2, 2), (3, 2)]));
    }

    #[test]
    fn test_moves_after_game_over_are_rejected() {
        let mut state = new_game();
        play(&mut state, &[3, 0, 3, 0, 3, 0, 3]);
        let before = state.clone();

        for col in [1, 3, 6, 99] {
            assert_eq!(
                state.drop_piece(col),
                Err(MoveError::GameOver(GameStatus::Won(PlayerId::One)))
            );
        }
        assert_eq!(state, before);
        assert!(state.legal_columns().is_empty());
    }

    #[test]
    fn test_moves_after_tie_are_rejected() {
        let mut state = new_game();
        play(&mut state, &TIE_SEQUENCE);
        let before = state.clone();
        assert_eq!(state.drop_piece(0), Err(MoveError::GameOver(GameStatus::Tied)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_invalid_column_is_rejected() {
        let mut state = new_game();
        state.drop_piece(1).unwrap();
        let before = state.clone();

        assert_eq!(
            state.drop_piece(7),
            Err(MoveError::InvalidColumn { column: 7, cols: 7 })
        );
        assert_eq!(state, before);
        assert_eq!(state.current_player(), PlayerId::Two);
    }

    #[test]
    fn test_board_snapshot_is_detached() {
        let mut state = new_game();
        state.drop_piece(0).unwrap();
        let snapshot = state.board_snapshot();
        state.drop_piece(0).unwrap();

        assert_eq!(snapshot.occupied_count(), 1);
        assert_eq!(state.board().occupied_count(), 2);
    }

    #[test]
    fn test_restart() {
        let mut state =
            GameState::with_dimensions(Player::new("a", "red"), Player::new("b", "blue"), 5, 8)
                .unwrap();
        play(&mut state, &[3, 0, 3, 0, 3, 0, 3]);
        assert!(state.is_terminal());

        state.restart();
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.current_player(), PlayerId::One);
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.board().rows(), 5);
        assert_eq!(state.board().cols(), 8);
        assert_eq!(state.board(), &Board::new(5, 8).unwrap());
        assert_eq!(state.player(PlayerId::One).name, "a");
    }

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::ColumnFull(2).to_string(), "column 2 is full");
        assert_eq!(
            MoveError::InvalidColumn { column: 9, cols: 7 }.to_string(),
            "column 9 is outside the board (0..7)"
        );
        assert_eq!(
            MoveError::GameOver(GameStatus::Tied).to_string(),
            "game is already over (Tied)"
        );
    }
}
