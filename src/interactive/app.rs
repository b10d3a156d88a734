//! TUI application state and event loop

use crate::core::{GuessEngine, Word};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long the splash screen stays up
const SPLASH_DURATION: Duration = Duration::from_secs(3);

/// Event-poll tick; keeps the splash deadline firing without input
const TICK: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub engine: GuessEngine,
    pub day: u32,
    /// Splash stays up until this instant. The deadline is owned by the app
    /// and checked from the event loop, so quitting tears it down with
    /// everything else.
    pub splash_until: Option<Instant>,
    pub show_about: bool,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(target: Word, day: u32) -> Self {
        Self {
            engine: GuessEngine::new(target),
            day,
            splash_until: Some(Instant::now() + SPLASH_DURATION),
            show_about: false,
            should_quit: false,
        }
    }

    /// True while the splash screen is on
    #[must_use]
    pub fn splash_active(&self) -> bool {
        self.splash_until.is_some()
    }

    /// Clear the splash once its deadline has passed
    pub fn tick(&mut self) {
        if let Some(deadline) = self.splash_until
            && Instant::now() >= deadline
        {
            self.splash_until = None;
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // Ctrl-C quits from any screen
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The splash ignores everything else; it hides on its own
        if self.splash_active() {
            return;
        }

        if self.show_about {
            if matches!(code, KeyCode::Esc | KeyCode::Enter) {
                self.show_about = false;
            }
            return;
        }

        match code {
            KeyCode::Esc => self.show_about = true,
            KeyCode::Backspace => self.engine.delete_letter(),
            KeyCode::Enter => self.engine.commit_row(),
            KeyCode::Char(c) => self.handle_char(c),
            _ => {}
        }
    }

    fn handle_char(&mut self, c: char) {
        if self.engine.status().is_over() {
            // Letters are locked after the game; only the meta keys work
            match c {
                'n' | 'N' => self.engine.reset(),
                'q' | 'Q' => self.should_quit = true,
                _ => {}
            }
        } else {
            self.engine.push_letter(c);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameStatus;

    fn app(target: &str) -> App {
        App::new(Word::new(target).unwrap(), 1)
    }

    fn past_splash(target: &str) -> App {
        let mut app = app(target);
        app.splash_until = None;
        app
    }

    #[test]
    fn splash_swallows_game_keys() {
        let mut app = app("hello");
        assert!(app.splash_active());

        app.handle_key(KeyCode::Char('h'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.engine.current_col(), 0);
        assert!(!app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_even_during_splash() {
        let mut app = app("hello");
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn letters_flow_into_the_engine() {
        let mut app = past_splash("hello");
        for ch in "world".chars() {
            app.handle_key(KeyCode::Char(ch), KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.engine.committed_rows(), 1);
    }

    #[test]
    fn about_overlay_swallows_letters() {
        let mut app = past_splash("hello");
        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.show_about);

        app.handle_key(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(app.engine.current_col(), 0);

        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(!app.show_about);
    }

    #[test]
    fn meta_keys_after_game_over() {
        let mut app = past_splash("hello");
        for ch in "hello".chars() {
            app.handle_key(KeyCode::Char(ch), KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.engine.status(), GameStatus::Won);

        // Plain letters are locked
        app.handle_key(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(app.engine.current_col(), 0);

        // 'n' restarts with the same word
        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(app.engine.status(), GameStatus::InProgress);
        assert_eq!(app.engine.target().text(), "hello");

        // win again, then quit with 'q'
        for ch in "hello".chars() {
            app.handle_key(KeyCode::Char(ch), KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit);
    }
}
