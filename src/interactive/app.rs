//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{GameConfig, GameError, GameSession, GameStatus, MAX_ATTEMPTS};
use crate::wordlists::WordProvider;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long a message stays on screen
pub const MESSAGE_DISPLAY_TIME: Duration = Duration::from_secs(5);

/// Terminal event poll interval, bounds how late a message disappears
const TICK_RATE: Duration = Duration::from_millis(250);

/// Application state, generic over where the words come from
pub struct App<'a, P: WordProvider> {
    pub words: &'a P,
    pub config: GameConfig,
    pub session: GameSession<'a, P>,
    pub input_buffer: String,
    pub show_word: bool,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// A keypress after translation from the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Enter,
    Back,
    NewGame,
    ToggleReveal,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Per-process round tally, never saved
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    fn record(&mut self, status: GameStatus, guesses: usize) {
        self.total_games += 1;
        if status == GameStatus::Won {
            self.games_won += 1;
            if let Some(slot) = self.guess_distribution.get_mut(guesses) {
                *slot += 1;
            }
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl Key {
    /// Translate a terminal key event, `None` for keys the game ignores
    #[must_use]
    pub fn from_event(key: KeyEvent) -> Option<Self> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => Some(Self::Quit),
            KeyCode::Char('s') if ctrl => Some(Self::ToggleReveal),
            KeyCode::Char(c) if !ctrl && c.is_ascii_alphabetic() => {
                Some(Self::Letter(c.to_ascii_uppercase()))
            }
            KeyCode::Enter => Some(Self::Enter),
            KeyCode::Backspace => Some(Self::Back),
            KeyCode::Tab => Some(Self::NewGame),
            KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }
}

impl<'a, P: WordProvider> App<'a, P> {
    /// Create the app and start its first round
    ///
    /// # Errors
    ///
    /// Returns the rejection if `hidden_word` is not acceptable.
    pub fn new(
        words: &'a P,
        config: GameConfig,
        hidden_word: Option<&str>,
    ) -> Result<Self, GameError> {
        let session = GameSession::start(words, config, hidden_word)?;

        let mut app = Self {
            words,
            config,
            session,
            input_buffer: String::new(),
            show_word: config.reveal_word,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message("Guess the 5-letter word in 6 tries.", MessageStyle::Info);
        Ok(app)
    }

    /// Single entry point for every key the player presses
    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Quit => self.should_quit = true,
            Key::NewGame => self.new_game(),
            Key::ToggleReveal => self.show_word = !self.show_word,
            _ if self.session.is_finished() => {}
            Key::Letter(c) => {
                if self.input_buffer.len() < WORD_LENGTH {
                    self.input_buffer.push(c.to_ascii_uppercase());
                }
            }
            Key::Back => {
                self.input_buffer.pop();
            }
            Key::Enter => self.submit(),
        }
    }

    fn submit(&mut self) {
        if self.input_buffer.len() < WORD_LENGTH {
            self.add_message("Word not finished", MessageStyle::Error);
            return;
        }

        match self.session.submit_guess(&self.input_buffer) {
            Ok(submission) => {
                self.input_buffer.clear();
                match submission.status {
                    GameStatus::Won => {
                        self.stats.record(submission.status, self.session.history().len());
                        self.add_message("Correct. Nice job. Game over", MessageStyle::Success);
                        self.add_message("Press TAB for a new game", MessageStyle::Info);
                    }
                    GameStatus::Lost => {
                        self.stats.record(submission.status, self.session.history().len());
                        let text = format!(
                            "Guesses used up. Word was {}. Game over",
                            self.session.hidden_word()
                        );
                        self.add_message(&text, MessageStyle::Error);
                        self.add_message("Press TAB for a new game", MessageStyle::Info);
                    }
                    GameStatus::InProgress => {}
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Replace the session with a fresh round on a random answer
    pub fn new_game(&mut self) {
        match GameSession::start(self.words, self.config, None) {
            Ok(session) => {
                self.session = session;
                self.input_buffer.clear();
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
            expires_at: Instant::now() + MESSAGE_DISPLAY_TIME,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Drop messages whose display time has passed
    pub fn expire_messages(&mut self, now: Instant) {
        self.messages.retain(|m| m.expires_at > now);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<P: WordProvider>(app: App<'_, P>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, P: WordProvider>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, P>,
) -> Result<()> {
    loop {
        app.expire_messages(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(key) = Key::from_event(key) {
                app.handle_key(key);
            }
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
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;

    fn word_list() -> WordList {
        WordList::new(
            words_from_slice(&["crane", "slate"]),
            words_from_slice(&["trace", "audio"]),
        )
        .unwrap()
    }

    fn type_word(app: &mut App<'_, WordList>, word: &str) {
        for c in word.chars() {
            app.handle_key(Key::Letter(c));
        }
        app.handle_key(Key::Enter);
    }

    #[test]
    fn key_events_translate() {
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(Key::from_event(press(KeyCode::Char('a'))), Some(Key::Letter('A')));
        assert_eq!(Key::from_event(press(KeyCode::Enter)), Some(Key::Enter));
        assert_eq!(Key::from_event(press(KeyCode::Backspace)), Some(Key::Back));
        assert_eq!(Key::from_event(press(KeyCode::Esc)), Some(Key::Quit));
        assert_eq!(Key::from_event(press(KeyCode::Char('1'))), None);
        assert_eq!(
            Key::from_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::Quit)
        );
        assert_eq!(
            Key::from_event(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            Some(Key::ToggleReveal)
        );
    }

    #[test]
    fn typing_is_capped_at_word_length() {
        let words = word_list();
        let mut app = App::new(&words, GameConfig::default(), Some("crane")).unwrap();
        for c in "traces".chars() {
            app.handle_key(Key::Letter(c));
        }
        assert_eq!(app.input_buffer, "TRACE");

        app.handle_key(Key::Back);
        assert_eq!(app.input_buffer, "TRAC");
    }

    #[test]
    fn short_word_is_not_submitted() {
        let words = word_list();
        let mut app = App::new(&words, GameConfig::default(), Some("crane")).unwrap();
        type_word(&mut app, "tra");

        assert!(app.session.history().is_empty());
        assert_eq!(app.messages.last().unwrap().text, "Word not finished");
    }

    #[test]
    fn unknown_word_keeps_input() {
        let words = word_list();
        let mut app = App::new(&words, GameConfig::default(), Some("crane")).unwrap();
        type_word(&mut app, "xyzzy");

        assert_eq!(app.input_buffer, "XYZZY");
        assert_eq!(app.messages.last().unwrap().text, "XYZZY is not in the word list");
    }

    #[test]
    fn winning_records_stats_and_locks_input() {
        let words = word_list();
        let mut app = App::new(&words, GameConfig::default(), Some("crane")).unwrap();
        type_word(&mut app, "trace");
        type_word(&mut app, "crane");

        assert_eq!(app.session.status(), GameStatus::Won);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);

        app.handle_key(Key::Letter('A'));
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn losing_reveals_word() {
        let words = word_list();
        let mut app = App::new(&words, GameConfig::default(), Some("crane")).unwrap();
        for _ in 0..MAX_ATTEMPTS {
            type_word(&mut app, "audio");
        }

        assert_eq!(app.session.status(), GameStatus::Lost);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Guesses used up. Word was CRANE. Game over")
        );
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn new_game_starts_fresh_session() {
        let words = word_list();
        let mut app = App::new(&words, GameConfig::default(), Some("crane")).unwrap();
        type_word(&mut app, "trace");
        app.handle_key(Key::NewGame);

        assert!(app.session.history().is_empty());
        assert!(app.session.keyboard().is_empty());
        assert_eq!(app.session.attempt(), 1);
    }

    #[test]
    fn reveal_toggles() {
        let words = word_list();
        let mut app = App::new(&words, GameConfig::default(), None).unwrap();
        assert!(!app.show_word);
        app.handle_key(Key::ToggleReveal);
        assert!(app.show_word);
    }

    #[test]
    fn messages_expire() {
        let words = word_list();
        let mut app = App::new(&words, GameConfig::default(), None).unwrap();
        assert!(!app.messages.is_empty());

        app.expire_messages(Instant::now() + MESSAGE_DISPLAY_TIME + Duration::from_secs(1));
        assert!(app.messages.is_empty());
    }

    /// Single-answer provider that accepts any guess
    struct OneWord(Word);

    impl WordProvider for OneWord {
        fn is_answer(&self, word: &Word) -> bool {
            *word == self.0
        }

        fn is_valid_guess(&self, _word: &Word) -> bool {
            true
        }

        fn random_answer<R: rand::Rng + ?Sized>(&self, _rng: &mut R) -> &Word {
            &self.0
        }

        fn answer_count(&self) -> usize {
            1
        }

        fn guess_count(&self) -> usize {
            1
        }
    }

    #[test]
    fn runs_on_any_word_provider() {
        let words = OneWord(Word::new("slate").unwrap());
        let mut app = App::new(&words, GameConfig::default(), None).unwrap();
        assert_eq!(app.session.hidden_word().text(), "SLATE");

        for c in "qqqqq".chars() {
            app.handle_key(Key::Letter(c));
        }
        app.handle_key(Key::Enter);
        assert_eq!(app.session.history().len(), 1);

        app.handle_key(Key::NewGame);
        assert_eq!(app.session.hidden_word().text(), "SLATE");
        assert!(app.session.history().is_empty());
    }

    #[test]
    fn invalid_start_word_is_rejected() {
        let words = word_list();
        assert!(App::new(&words, GameConfig::default(), Some("abc")).is_err());
    }
}
