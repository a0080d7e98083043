//! TUI application state and logic

use crate::board::{Board, ROWS};
use crate::core::{LetterStatus, WORD_LENGTH, Word};
use crate::solver::Solver;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Messages kept for the message panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a>,
    pub board: Board,
    pub mode: InputMode,
    /// Cell whose colour Space/Enter cycles, as (row, column)
    pub selected: (usize, usize),
    /// Ranked candidates for the current board
    pub candidates: Vec<Word>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Letters go into the editing row
    Typing,
    /// Arrow keys move over fixed cells and colours can be changed
    Colouring,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(words: &'a [Word]) -> Self {
        let solver = Solver::new(words);
        let mut app = Self {
            solver,
            board: Board::new(),
            mode: InputMode::Typing,
            selected: (0, 0),
            candidates: Vec::new(),
            messages: Vec::new(),
            should_quit: false,
        };
        if words.is_empty() {
            app.add_message(
                "Word list could not be loaded; no suggestions available.",
                MessageStyle::Error,
            );
        } else {
            app.add_message(
                "Type your first guess, then colour each letter with Space.",
                MessageStyle::Info,
            );
        }
        app.new_game();
        app
    }

    /// Recompute the ranked candidates from the board's fixed rows
    pub fn refresh_candidates(&mut self) {
        self.candidates = self.solver.suggest(&self.board.snapshot());
        debug!(candidates = self.candidates.len(), "refreshed suggestions");
    }

    pub fn new_game(&mut self) {
        self.board.reset();
        self.selected = (0, 0);
        self.start_typing();
        self.refresh_candidates();
    }

    /// Start typing into the first open row, or switch to colouring when the
    /// board is full
    pub fn start_typing(&mut self) {
        if let Some(row) = self.board.first_open_row() {
            self.edit_row(row);
        } else {
            self.mode = InputMode::Colouring;
            self.add_message(
                "Board is full. Press 'n' for a new game.",
                MessageStyle::Info,
            );
        }
    }

    /// Re-type a row; Esc restores its previous word and colours
    pub fn edit_row(&mut self, row: usize) {
        match self.board.start_editing(row) {
            Ok(()) => {
                self.mode = InputMode::Typing;
                self.selected = (row, 0);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn type_letter(&mut self, letter: char) {
        match self.board.type_letter(letter) {
            Ok(true) => self.submit(),
            Ok(false) => {}
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Fix the typed row; stays in typing mode if the word is rejected
    pub fn submit(&mut self) {
        let Some(row) = self.board.editing_row() else {
            return;
        };
        match self.board.submit(self.solver.words()) {
            Ok(word) => {
                self.mode = InputMode::Colouring;
                self.selected = (row, 0);
                self.refresh_candidates();
                self.add_message(
                    &format!("{} added. Colour its letters.", word.text().to_uppercase()),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn cancel_typing(&mut self) {
        self.board.cancel_editing();
        self.mode = InputMode::Colouring;
    }

    /// Cycle the selected cell's colour
    pub fn cycle_selected(&mut self) {
        let (row, column) = self.selected;
        match self.board.cycle_status(row, column) {
            Ok(status) => {
                self.refresh_candidates();
                let cells = self.board.rows()[row].cells();
                if cells.iter().all(|cell| cell.status == LetterStatus::Green) {
                    self.add_message(
                        "🎉 Solved! Press 'n' for a new game.",
                        MessageStyle::Success,
                    );
                } else if self.candidates.is_empty() {
                    self.add_message(
                        "No candidates remain; check the colours.",
                        MessageStyle::Error,
                    );
                }
                debug!(row, column, %status, "cycled cell");
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn move_selection(&mut self, rows: isize, columns: isize) {
        let (row, column) = self.selected;
        self.selected = (
            row.saturating_add_signed(rows).min(ROWS - 1),
            column.saturating_add_signed(columns).min(WORD_LENGTH - 1),
        );
    }

    pub fn undo_last(&mut self) {
        if self.board.undo_last() {
            self.refresh_candidates();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
        self.mode = InputMode::Colouring;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.mode {
            InputMode::Typing => match key.code {
                KeyCode::Char(c) if c.is_ascii_alphabetic() => self.type_letter(c),
                KeyCode::Backspace => self.board.backspace(),
                KeyCode::Enter => self.submit(),
                KeyCode::Esc => self.cancel_typing(),
                _ => {}
            },
            InputMode::Colouring => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                KeyCode::Char('e') => self.edit_row(self.selected.0),
                KeyCode::Tab | KeyCode::Char('i') => self.start_typing(),
                KeyCode::Char(' ') | KeyCode::Enter => self.cycle_selected(),
                KeyCode::Up => self.move_selection(-1, 0),
                KeyCode::Down => self.move_selection(1, 0),
                KeyCode::Left => self.move_selection(0, -1),
                KeyCode::Right => self.move_selection(0, 1),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
