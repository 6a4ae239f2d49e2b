use std::str::FromStr;

use crate::game::{Cell, GameState, GameStatus, PlayerId};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
) {
    let board_height = game_state.board().rows() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),         // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state, selected_column, chunks[1]);
    render_message(frame, game_state, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Terminal color for a seat. Unparseable colors fall back to red/yellow.
pub fn player_color(game_state: &GameState, id: PlayerId) -> Color {
    Color::from_str(game_state.player(id).color.trim()).unwrap_or(match id {
        PlayerId::One => Color::Red,
        PlayerId::Two => Color::Yellow,
    })
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let seat = |id: PlayerId| {
        let color = player_color(game_state, id);
        let mut style = Style::default().fg(color);
        if game_state.current_player() == id && !game_state.is_terminal() {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        vec![
            Span::styled("● ", Style::default().fg(color)),
            Span::styled(game_state.player(id).name.clone(), style),
        ]
    };

    let mut players = seat(PlayerId::One);
    players.push(Span::raw("   vs   "));
    players.extend(seat(PlayerId::Two));

    let current = game_state.current_player();
    let status = match game_state.status() {
        GameStatus::InProgress => Line::from(vec![
            Span::raw("Turn: "),
            Span::styled(
                game_state.player(current).name.clone(),
                Style::default()
                    .fg(player_color(game_state, current))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        GameStatus::Won(winner) => Line::from(format!(
            "Game Over  |  {} won",
            game_state.player(winner).name
        )),
        GameStatus::Tied => Line::from("Game Over  |  Tie"),
    };

    let header = Paragraph::new(vec![Line::from(players), status])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game_state: &GameState, selected_column: usize, area: Rect) {
    let board = game_state.board();
    let winning = game_state.winning_run();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..board.cols() {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(board.cols() * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..board.cols() {
            let span = match board.get(row, col) {
                Some(Cell::Occupied(id)) => {
                    let mut style = Style::default().fg(player_color(game_state, id));
                    if winning.is_some_and(|run| run.contains(&(row, col))) {
                        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                    }
                    Span::styled(" ● ", style)
                }
                _ => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..board.cols() {
        if col == selected_column && !game_state.is_terminal() {
            indicator_line.push(Span::styled(
                " ▲ ",
                Style::default().fg(player_color(game_state, game_state.current_player())),
            ));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

/// Result and rejection line; a win is shown in the winner's color.
fn message_style(game_state: &GameState) -> Style {
    match game_state.status() {
        GameStatus::Won(winner) => Style::default()
            .fg(player_color(game_state, winner))
            .add_modifier(Modifier::BOLD),
        GameStatus::Tied => Style::default().add_modifier(Modifier::BOLD),
        GameStatus::InProgress => Style::default().fg(Color::Yellow),
    }
}

fn render_message(
    frame: &mut Frame,
    game_state: &GameState,
    message: &Option<String>,
    area: Rect,
) {
    let line = Line::styled(message.as_deref().unwrap_or_default(), message_style(game_state));
    let widget = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter: Drop  |  1-9: Drop in column  |  R: Restart  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Controls"),
    );

    frame.render_widget(controls, area);
}
