//! Interactive terminal previewer for mcqtab
//!
//! Loads a pasted spreadsheet block from a file, shows the split rows with
//! escaping-need and arity highlighting, and drives the three actions:
//! Preview (p, re-reads the file), Convert (c), Copy (y).

mod app;
mod theme;
mod ui;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;

#[derive(Parser)]
#[command(name = "mcqtabv")]
#[command(about = "A terminal UI previewer for pasted MCQ spreadsheet rows")]
struct Args {
    /// Path to the file holding the pasted block
    file: PathBuf,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let content = fs::read_to_string(&args.file)?;
    let file_name = args
        .file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();
    let mut app = App::new(content, file_name, args.file);

    // Setup terminal
    enable_raw_mode()?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    terminal.clear()?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        eprintln!("Error: {}", e);
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
                if app.should_quit {
                    return Ok(());
                }
            }
        }
    }
}
