//! Full-screen terminal front end (Ratatui + crossterm).
//!
//! ```text
//! ┌ Quotient ──────────────────────┐
//! │                       q=0, r=5 │
//! └────────────────────────────────┘
//!  Safe mode: divisor was 0, remainder preserved
//!  Safe division: Enabled
//!
//!  0-9 . digits   + - * / operator   = Enter evaluate
//!  c Esc clear    s safe division    q Ctrl-C quit
//! ```

use anyhow::Result;
use calc_core::engine::Engine;
use calc_core::keys::Key;
use calc_core::render::{Presenter, Render, StatusStyle, StatusUpdate};
use calc_core::settings::Settings;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, warn};

const HELP: [&str; 2] = [
    "0-9 . digits   + - * / operator   = Enter evaluate",
    "c Esc clear    s safe division    q Ctrl-C quit",
];

/// What a terminal key press means to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Quit,
    Press(Key),
    /// A printable key the calculator has no use for
    Unknown(char),
}

/// Last emitted screen contents
#[derive(Debug, Clone)]
struct Screen {
    display: String,
    note: String,
    status: StatusUpdate,
}

impl Presenter for Screen {
    fn render(&mut self, render: &Render) {
        self.display.clone_from(&render.display);
        self.note.clone_from(&render.note);
    }

    fn render_status(&mut self, status: &StatusUpdate) {
        self.status = status.clone();
    }
}

struct App {
    engine: Engine,
    screen: Screen,
    show_status: bool,
    exit: bool,
}

/// Run the TUI until the user quits. The terminal is restored on every exit path.
pub fn run(engine: Engine, settings: &Settings) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = App::new(engine, settings).run(&mut terminal);
    ratatui::restore();
    result
}

impl App {
    fn new(engine: Engine, settings: &Settings) -> Self {
        let screen = Screen {
            display: engine.entry().to_string(),
            note: String::new(),
            status: engine.status(),
        };
        App {
            engine,
            screen,
            show_status: settings.show_status,
            exit: false,
        }
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match translate_key(key) {
            Some(Action::Quit) => {
                debug!("quit requested");
                self.exit = true;
            }
            Some(Action::Press(key)) => {
                if let Err(err) = self.engine.dispatch(key, &mut self.screen) {
                    warn!(error = %err, "key rejected");
                    self.screen.note = err.to_string();
                }
            }
            Some(Action::Unknown(ch)) => {
                debug!(key = %ch, "unmapped key");
            }
            None => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [display_area, note_area, status_area, _, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(frame.area());

        let display = Paragraph::new(self.screen.display.as_str())
            .alignment(Alignment::Right)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::bordered().title(" Quotient "));
        frame.render_widget(display, display_area);

        let note = Paragraph::new(self.screen.note.as_str()).style(Style::default().fg(Color::Yellow));
        frame.render_widget(note, note_area);

        if self.show_status {
            let color = match self.screen.status.style {
                StatusStyle::Enabled => Color::Green,
                StatusStyle::Disabled => Color::Red,
            };
            let status = Line::from(vec![
                Span::raw("Safe division: "),
                Span::styled(
                    self.screen.status.label.as_str(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]);
            frame.render_widget(Paragraph::new(status), status_area);
        }

        let help: Vec<Line> = HELP.iter().map(|line| Line::from(*line)).collect();
        frame.render_widget(
            Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
            help_area,
        );
    }
}

/// Translate a terminal key event into an app action.
fn translate_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Press(Key::Clear)),
        KeyCode::Enter => Some(Action::Press(Key::Equals)),
        KeyCode::Char(ch) => Some(match Key::from_char(ch) {
            Ok(key) => Action::Press(key),
            Err(_) => Action::Unknown(ch),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::engine::Operator;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn press(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)
    }

    fn type_keys(app: &mut App, keys: &str) {
        for ch in keys.chars() {
            app.handle_key(press(ch));
        }
    }

    fn rendered_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_translate_keys() {
        assert_eq!(translate_key(press('7')), Some(Action::Press(Key::Digit('7'))));
        assert_eq!(translate_key(press('/')), Some(Action::Press(Key::Operator(Operator::Divide))));
        assert_eq!(translate_key(press('c')), Some(Action::Press(Key::Clear)));
        assert_eq!(translate_key(press('q')), Some(Action::Quit));
        assert_eq!(translate_key(press('#')), Some(Action::Unknown('#')));
        assert_eq!(
            translate_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Action::Press(Key::Equals))
        );
        assert_eq!(
            translate_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(translate_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_app_updates_screen() {
        let mut app = App::new(Engine::new(), &Settings::default());
        type_keys(&mut app, "5/");
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        assert_eq!(app.screen.display, "q=0, r=5");
        assert_eq!(app.screen.note, "Safe mode: divisor was 0, remainder preserved");
        assert!(!app.exit);
    }

    #[test]
    fn test_app_toggle_and_quit() {
        let mut app = App::new(Engine::new(), &Settings::default());
        type_keys(&mut app, "s");
        assert_eq!(app.screen.status.style, StatusStyle::Disabled);
        assert_eq!(app.screen.note, "Go ahead, create an error");

        type_keys(&mut app, "q");
        assert!(app.exit);
    }

    #[test]
    fn test_draw_shows_display_and_status() {
        let mut app = App::new(Engine::new(), &Settings::default());
        type_keys(&mut app, "7+3=");

        let text = rendered_text(&app);
        assert!(text.contains("Quotient"));
        assert!(text.contains("10"));
        assert!(text.contains("Safe division: Enabled"));
    }

    #[test]
    fn test_draw_hides_status() {
        let settings = Settings {
            show_status: false,
            ..Settings::default()
        };
        let app = App::new(Engine::with_settings(&settings), &settings);
        assert!(!rendered_text(&app).contains("Safe division:"));
    }
}
