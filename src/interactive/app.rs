//! TUI application state and logic
//!
//! The app only reacts to the session state: input is accepted while a game
//! is in progress and ignored otherwise.

use crate::core::Entity;
use crate::game::{GameState, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Maximum suggestions shown under the input
pub const MAX_SUGGESTIONS: usize = 8;

/// Application state
pub struct App<'a, R: Rng = StdRng> {
    pub session: Session<'a, R>,
    pub input_buffer: String,
    pub suggestions: Vec<&'a Entity>,
    pub selected: usize,
    pub hint: Option<Hint>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// Remaining-candidate hint
#[derive(Debug, Clone)]
pub struct Hint {
    pub remaining: usize,
    pub names: Vec<String>,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub total_guesses: usize,
    pub best: Option<usize>,
}

impl Statistics {
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.games_won == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.games_won as f64
        }
    }
}

impl<'a, R: Rng> App<'a, R> {
    /// Wrap a session, starting a game if none is running
    #[must_use]
    pub fn new(mut session: Session<'a, R>) -> Self {
        if session.state() == GameState::NotStarted {
            session.start_new_game();
        }

        Self {
            session,
            input_buffer: String::new(),
            suggestions: Vec::new(),
            selected: 0,
            hint: None,
            messages: vec![
                Message {
                    text: "Welcome! Guess the secret champion.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a name, pick with ↑/↓, submit with Enter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Whether the input accepts guesses
    #[must_use]
    pub fn input_enabled(&self) -> bool {
        self.session.state() == GameState::InProgress
    }

    /// Recompute suggestions, highlighting the one named exactly by the input
    fn refresh_suggestions(&mut self) {
        let typed = self.input_buffer.trim().to_lowercase();
        self.suggestions = self.session.suggest(&typed);
        self.suggestions.truncate(MAX_SUGGESTIONS);
        self.selected = self
            .suggestions
            .iter()
            .position(|e| e.display_name().to_lowercase() == typed)
            .unwrap_or(0);
    }

    pub fn push_char(&mut self, c: char) {
        if !self.input_enabled() {
            return;
        }
        self.input_buffer.push(c);
        self.refresh_suggestions();
    }

    pub fn backspace(&mut self) {
        self.input_buffer.pop();
        self.refresh_suggestions();
    }

    pub fn select_next(&mut self) {
        if !self.suggestions.is_empty() {
            self.selected = (self.selected + 1) % self.suggestions.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.suggestions.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.suggestions.len() - 1);
        }
    }

    /// Replace the input with the highlighted suggestion's name
    pub fn accept_suggestion(&mut self) {
        if let Some(entity) = self.suggestions.get(self.selected) {
            self.input_buffer = entity.display_name().to_string();
            self.refresh_suggestions();
        }
    }

    /// Submit the highlighted suggestion
    ///
    /// A typed name or identifier that is not in the list (already guessed, or
    /// not a name prefix) takes precedence over the highlight.
    pub fn submit(&mut self) {
        if !self.input_enabled() {
            return;
        }

        let typed = self.session.catalog().resolve(&self.input_buffer);
        let chosen = match typed {
            Some(entity) if !self.suggestions.contains(&entity) => Some(entity),
            _ => self.suggestions.get(self.selected).copied().or(typed),
        };

        let Some(entity) = chosen else {
            if !self.input_buffer.trim().is_empty() {
                let text = format!("No champion named '{}'", self.input_buffer.trim());
                self.add_message(&text, MessageStyle::Error);
            }
            return;
        };

        if self.session.guessed().contains(entity.identifier()) {
            let text = format!("Already guessed {}", entity.display_name());
            self.add_message(&text, MessageStyle::Error);
            return;
        }

        let outcome = self
            .session
            .submit_guess(entity.identifier())
            .map(|result| format!("{} {}", result.to_emoji(), entity.display_name()));
        match outcome {
            Ok(row) => self.add_message(&row, MessageStyle::Info),
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        }

        self.input_buffer.clear();
        self.hint = None;
        self.refresh_suggestions();

        if self.session.is_solved() {
            self.record_win();
        }
    }

    fn record_win(&mut self) {
        let guesses = self.session.history().len();
        self.stats.total_games += 1;
        self.stats.games_won += 1;
        self.stats.total_guesses += guesses;
        self.stats.best = Some(self.stats.best.map_or(guesses, |b| b.min(guesses)));

        let celebration = match guesses {
            1 => "🎯 FIRST TRY! Extraordinary! 🌟",
            2..=3 => "🔥 MAGNIFICENT! 🔥",
            4..=6 => "✨ WELL PLAYED! ✨",
            _ => "🎊 FOUND IT! 🎊",
        };
        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        // An abandoned game still counts as played
        if self.session.state() == GameState::InProgress && !self.session.history().is_empty() {
            self.stats.total_games += 1;
        }

        self.session.start_new_game();
        self.input_buffer.clear();
        self.suggestions.clear();
        self.selected = 0;
        self.hint = None;
        self.messages.clear();
        self.add_message("New game started! A new champion was chosen.", MessageStyle::Info);
    }

    pub fn show_hint(&mut self) {
        if !self.input_enabled() {
            return;
        }
        let candidates = self.session.candidates();
        self.hint = Some(Hint {
            remaining: candidates.len(),
            names: candidates
                .iter()
                .take(12)
                .map(|e| e.display_name().to_string())
                .collect(),
        });
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            _ if !self.input_enabled() => match key.code {
                // Solved: only new game or quit
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            KeyCode::Char('?') => self.show_hint(),
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Char(c) => self.push_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Down => self.select_next(),
            KeyCode::Up => self.select_previous(),
            KeyCode::Tab => self.accept_suggestion(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<'_, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<()> {
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
