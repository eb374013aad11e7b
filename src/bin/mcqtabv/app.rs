//! Application state and key handling
//!
//! App owns the conversion Session plus view state: which pipeline stage
//! is on screen (preview table or record cards), the scroll offset, and a
//! one-line status for copy/reload feedback. Key handling mutates state
//! only; all drawing lives in [crate::ui].

use std::fs;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mcqtab::mcq::clipboard;
use mcqtab::mcq::formats::HeaderMode;
use mcqtab::mcq::session::Session;

/// Which stage of the pipeline is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Split rows, unescaped, with attention highlighting
    #[default]
    Preview,
    /// Converted records as cards
    Records,
}

/// The main application
pub struct App {
    /// Conversion state shared by all three actions
    pub session: Session,

    /// Stage currently rendered
    pub view: View,

    /// Lines scrolled off the top of the main area
    pub scroll: usize,

    /// One-line feedback from the last action
    pub status: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Displayed in the title bar
    pub file_name: String,

    file_path: PathBuf,
}

impl App {
    /// Create the application and run the initial Preview on the loaded
    /// content.
    pub fn new(content: String, file_name: String, file_path: PathBuf) -> Self {
        let mut session = Session::new();
        session.set_input(content);
        session.preview();
        App {
            session,
            view: View::default(),
            scroll: 0,
            status: String::new(),
            should_quit: false,
            file_name,
            file_path,
        }
    }

    /// Handle a keyboard event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            (KeyCode::Char('p'), KeyModifiers::NONE) => self.reload_and_preview(),
            (KeyCode::Char('c'), KeyModifiers::NONE) => self.convert(),
            (KeyCode::Char('y'), KeyModifiers::NONE) => self.copy_current_view(),
            (KeyCode::Tab, _) => self.toggle_view(),
            (KeyCode::Up, _) => self.scroll = self.scroll.saturating_sub(1),
            (KeyCode::Down, _) => self.scroll = self.scroll.saturating_add(1),
            (KeyCode::PageUp, _) => self.scroll = self.scroll.saturating_sub(10),
            (KeyCode::PageDown, _) => self.scroll = self.scroll.saturating_add(10),
            _ => {}
        }
    }

    /// Preview action: re-read the file and re-split it.
    fn reload_and_preview(&mut self) {
        match fs::read_to_string(&self.file_path) {
            Ok(content) => {
                self.session.set_input(content);
                self.session.preview();
                self.view = View::Preview;
                self.scroll = 0;
                let count = self.session.rows().map(|r| r.len()).unwrap_or(0);
                self.status = format!("previewed {} rows", count);
            }
            Err(e) => {
                self.status = format!("reload failed: {}", e);
            }
        }
    }

    /// Convert action: rebuild records from the previewed rows and switch
    /// to the card view.
    fn convert(&mut self) {
        self.session.convert();
        if self.session.records().is_empty() {
            self.status = "nothing to convert".to_string();
        } else {
            self.view = View::Records;
            self.scroll = 0;
            self.status = format!("converted {} records", self.session.records().len());
        }
    }

    /// Copy action: serialize the current view and hand it to the
    /// clipboard sink. Preview copies raw rows; the record view copies
    /// headered TSV for paste back into the spreadsheet.
    fn copy_current_view(&mut self) {
        let payload = match self.view {
            View::Preview => self.session.rows_payload(),
            View::Records => self.session.records_payload(HeaderMode::Prepend),
        };
        let Some(payload) = payload else {
            self.status = "nothing to copy".to_string();
            return;
        };
        self.status = match clipboard::set_text(&payload) {
            Ok(()) => format!("copied {} rows to clipboard", payload.lines().count()),
            Err(e) => format!("clipboard write failed: {}", e),
        };
    }

    fn toggle_view(&mut self) {
        match self.view {
            View::Preview if !self.session.records().is_empty() => {
                self.view = View::Records;
                self.scroll = 0;
            }
            View::Records => {
                self.view = View::Preview;
                self.scroll = 0;
            }
            View::Preview => {
                self.status = "no records yet: press c to convert".to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(content: &str) -> App {
        App::new(
            content.to_string(),
            "sample.tsv".to_string(),
            PathBuf::from("sample.tsv"),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_app_starts_in_preview() {
        let app = app_with("a\tb\nc\td");
        assert_eq!(app.view, View::Preview);
        assert_eq!(app.session.rows().unwrap().len(), 2);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app_with("a\tb");
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = app_with("a\tb");
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_convert_switches_to_records_view() {
        let mut app = app_with("a\tb");
        app.handle_key(key(KeyCode::Char('c')));
        assert_eq!(app.view, View::Records);
        assert_eq!(app.session.records().len(), 1);
        assert_eq!(app.status, "converted 1 records");
    }

    #[test]
    fn test_toggle_without_records_stays_in_preview() {
        let mut app = app_with("a\tb");
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.view, View::Preview);
        assert!(app.status.contains("press c"));
    }

    #[test]
    fn test_toggle_after_convert_round_trips() {
        let mut app = app_with("a\tb");
        app.handle_key(key(KeyCode::Char('c')));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.view, View::Preview);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.view, View::Records);
    }

    #[test]
    fn test_scroll_saturates_at_zero() {
        let mut app = app_with("a\tb");
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.scroll, 0);
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.scroll, 2);
        app.handle_key(key(KeyCode::PageUp));
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_reload_failure_sets_status() {
        let mut app = App::new(
            "a\tb".to_string(),
            "gone.tsv".to_string(),
            PathBuf::from("/nonexistent/gone.tsv"),
        );
        app.handle_key(key(KeyCode::Char('p')));
        assert!(app.status.starts_with("reload failed"));
        // The previous preview is untouched
        assert_eq!(app.session.rows().unwrap().len(), 1);
    }
}
