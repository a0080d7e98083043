//! TUI rendering with ratatui
//!
//! The guess grid on the left, ranked candidates and messages on the right.

use super::app::{App, InputMode, MessageStyle};
use crate::board::{Cell, RowState};
use crate::core::LetterStatus;
use crate::output::formatters::{green_pattern, yellow_letters};
use crate::scoring::{consonant_score, vowel_score};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Help bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board and summary
            Constraint::Percentage(50), // Candidates and messages
        ])
        .split(chunks[1]);

    render_board_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_help(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE HELPER")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Grid
            Constraint::Length(4), // Summary
        ])
        .split(area);

    render_grid(f, app, chunks[0]);
    render_summary(f, app, chunks[1]);
}

const fn status_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Green => Color::Green,
        LetterStatus::Yellow => Color::Yellow,
        LetterStatus::Gray => Color::DarkGray,
    }
}

fn cell_span(cell: Cell, state: RowState, selected: bool, cursor: bool) -> Span<'static> {
    let letter = match cell.letter {
        Some(l) => char::from(l).to_ascii_uppercase(),
        None if cursor => '_',
        None => '·',
    };

    let mut style = match state {
        RowState::Fixed => Style::default()
            .fg(Color::Black)
            .bg(status_color(cell.status))
            .add_modifier(Modifier::BOLD),
        RowState::Editing => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        RowState::Empty => Style::default().fg(Color::DarkGray),
    };
    if selected {
        style = style.add_modifier(Modifier::REVERSED | Modifier::UNDERLINED);
    }

    Span::styled(format!(" {letter} "), style)
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let cursor = app.board.cursor();
    let mut lines = vec![Line::from("")];

    for (row_index, row) in app.board.rows().iter().enumerate() {
        let mut spans = vec![Span::raw("  ")];
        for (column, cell) in row.cells().iter().enumerate() {
            let selected = app.mode == InputMode::Colouring && app.selected == (row_index, column);
            let at_cursor = cursor == Some((row_index, column));
            spans.push(cell_span(*cell, row.state(), selected, at_cursor));
            spans.push(Span::raw(" "));
        }
        if row.state() == RowState::Editing {
            spans.push(Span::styled("◀", Style::default().fg(Color::Yellow)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_summary(f: &mut Frame, app: &App, area: Rect) {
    let summary = app.board.summary();
    let content = vec![
        Line::from(vec![
            Span::raw("Greens:  "),
            Span::styled(
                green_pattern(&summary),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Yellows: "),
            Span::styled(
                yellow_letters(&summary),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph =
        Paragraph::new(content).block(Block::default().title(" Solution ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(70), // Candidates
            Constraint::Percentage(30), // Messages
        ])
        .split(area);

    render_candidates(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    // borders take two rows
    let visible = usize::from(area.height.saturating_sub(2));

    let items: Vec<ListItem> = if app.candidates.is_empty() {
        vec![ListItem::new("No candidates").style(Style::default().fg(Color::Red))]
    } else {
        app.candidates
            .iter()
            .take(visible)
            .enumerate()
            .map(|(rank, word)| {
                let style = if rank == 0 {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>4}. ", rank + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(word.text().to_uppercase(), style),
                    Span::styled(
                        format!("  v{:<2} c{:<3}", vowel_score(word), consonant_score(word)),
                        Style::default().fg(Color::Cyan),
                    ),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Candidates ({}) ", app.candidates.len()))
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let (title, text, color) = match app.mode {
        InputMode::Typing => (
            " Typing ",
            "letters: type | Backspace: delete | Enter: submit | Esc: stop typing",
            Color::Yellow,
        ),
        InputMode::Colouring => (
            " Colouring ",
            "arrows: select | Space: colour | Tab: type | e: re-type | u: undo | n: new | q: quit",
            Color::Cyan,
        ),
    };

    let help = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_candidates_and_count() {
        let words = words_from_slice(&["crane", "slate"]);
        let app = App::new(&words);
        let screen = screen_text(&app);

        assert!(screen.contains("Candidates (2)"));
        assert!(screen.contains("SLATE"));
        assert!(screen.contains("CRANE"));
    }

    #[test]
    fn draws_typed_letters_and_summary() {
        let words = words_from_slice(&["crane", "slate"]);
        let mut app = App::new(&words);
        app.type_letter('c');
        app.type_letter('r');
        let screen = screen_text(&app);

        assert!(screen.contains(" C "));
        assert!(screen.contains("Greens:  _ _ _ _ _"));
        assert!(screen.contains("Typing"));
    }
}
