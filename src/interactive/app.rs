//! TUI application loop

use crate::game::{Game, Key, Signal, Statistics};
use anyhow::Result;
use crossterm::{
    event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long to wait for input before drawing the next frame
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Application state
pub struct App<'a, R: Rng> {
    pub game: Game<'a, R>,
    pub should_quit: bool,
}

impl<'a, R: Rng> App<'a, R> {
    #[must_use]
    pub fn new(game: Game<'a, R>) -> Self {
        Self {
            game,
            should_quit: false,
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if let Some(key) = map_key(key)
            && self.game.handle_key(key) == Signal::Quit
        {
            self.should_quit = true;
        }
    }
}

/// Translate a terminal key event into game input
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Key> {
    // Only process key press events (fixes Windows double-input bug)
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Quit),
        KeyCode::Esc => Some(Key::Quit),
        KeyCode::Enter => Some(Key::Submit),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Char(c) => Key::from_char(c),
        _ => None,
    }
}

/// Puts the terminal back into cooked mode on the main screen
///
/// Dropping the guard restores on a best-effort basis; [`TerminalGuard::restore`]
/// does the same but reports the first failure.
struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { active: true })
    }

    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        // Every step runs even if an earlier one fails
        let raw = disable_raw_mode();
        let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
        log::debug!("terminal restored");
        raw.and(screen)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::warn!("failed to restore terminal: {e}");
        }
    }
}

/// Run the TUI application
///
/// Returns the statistics of the session once the player quits.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling. The terminal is restored on every
/// path, and a loop error takes precedence over a cleanup error.
pub fn run_tui<R: Rng>(game: Game<'_, R>) -> Result<Statistics> {
    // Setup terminal
    let mut guard = TerminalGuard::enable()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    log::debug!("terminal ready");

    // Run app
    let mut app = App::new(game);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    let restored = guard.restore();
    res?;
    restored?;

    Ok(app.game.stats().clone())
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    app: &mut App<'_, R>,
) -> Result<()> {
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        app.game.tick(now.duration_since(last_frame));
        last_frame = now;

        terminal.draw(|f| super::rendering::ui(f, &app.game))?;

        if event::poll(FRAME_INTERVAL)?
            && let TermEvent::Key(key) = event::read()?
        {
            app.handle_key_event(key);
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
    use crate::core::Word;
    use crate::game::Status;
    use crate::wordlists::WordList;
    use crossterm::event::KeyEventState;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn maps_editing_keys() {
        assert_eq!(map_key(press(KeyCode::Char('a'))), Some(Key::Letter(b'a')));
        assert_eq!(map_key(press(KeyCode::Char('Q'))), Some(Key::Letter(b'q')));
        assert_eq!(map_key(press(KeyCode::Enter)), Some(Key::Submit));
        assert_eq!(map_key(press(KeyCode::Backspace)), Some(Key::Backspace));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(Key::Quit));
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Key::Quit));
    }

    #[test]
    fn ignores_unmapped_keys_and_releases() {
        assert_eq!(map_key(press(KeyCode::Char('1'))), None);
        assert_eq!(map_key(press(KeyCode::Tab)), None);
        assert_eq!(map_key(press(KeyCode::Left)), None);

        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn terminal_guard_restores_once() {
        let mut guard = TerminalGuard { active: true };
        assert!(guard.restore().is_ok());
        assert!(!guard.active);
        assert!(guard.restore().is_ok());
    }

    #[test]
    fn app_plays_through_key_events() {
        let words = WordList::new(vec![Word::new("crane").unwrap()]).unwrap();
        let mut app = App::new(Game::new(&words, StdRng::seed_from_u64(1)));

        for c in "crane".chars() {
            app.handle_key_event(press(KeyCode::Char(c)));
        }
        app.handle_key_event(press(KeyCode::Enter));
        assert_eq!(app.game.status(), Status::Won);
        assert!(!app.should_quit);

        app.handle_key_event(press(KeyCode::Esc));
        assert!(app.should_quit);
    }
}
