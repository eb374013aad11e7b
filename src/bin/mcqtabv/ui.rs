//! UI rendering logic
//!
//! Layout structure:
//! - Title bar (1 line, fixed)
//! - Main area (responsive height): preview table or record cards
//! - Status bar (2 lines, fixed): counts + last action, then key help
//!
//! Marker-wrapped spans are rendered as styled inline code here, by
//! substituting the backtick pairs at draw time. That substitution is
//! purely presentational: the session's text keeps its plain markers.

use mcqtab::mcq::escape::{needs_escaping, MARKER};
use mcqtab::mcq::record::{McqRecord, FIELD_COUNT, HEADERS};
use mcqtab::mcq::rows;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use crate::app::{App, View};
use crate::theme::Theme;

/// Minimum terminal width required for the UI
const MIN_TERMINAL_WIDTH: u16 = 60;
/// Width allocated to each preview table column
const COLUMN_WIDTH: u16 = 14;
/// Height of the status bar
const STATUS_BAR_HEIGHT: u16 = 2;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let theme = Theme::default();
    let size = frame.area();

    if size.width < MIN_TERMINAL_WIDTH {
        render_error_too_narrow(frame, size, &theme);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                 // Title bar
            Constraint::Min(3),                    // Main area
            Constraint::Length(STATUS_BAR_HEIGHT), // Status bar
        ])
        .split(size);

    render_title_bar(frame, chunks[0], app, &theme);
    match app.view {
        View::Preview => render_preview_table(frame, chunks[1], app, &theme),
        View::Records => render_record_cards(frame, chunks[1], app, &theme),
    }
    render_status_bar(frame, chunks[2], app, &theme);
}

fn render_error_too_narrow(frame: &mut Frame, area: Rect, theme: &Theme) {
    let msg = format!(
        "Terminal too narrow: {} < {} chars",
        area.width, MIN_TERMINAL_WIDTH
    );
    let paragraph = Paragraph::new(msg).style(theme.row_invalid());
    frame.render_widget(paragraph, area);
}

fn render_title_bar(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let stage = match app.view {
        View::Preview => "preview",
        View::Records => "records",
    };
    let title = format!("mcqtab:: {} [{}]", app.file_name, stage);
    let paragraph = Paragraph::new(title).style(theme.title_bar());
    frame.render_widget(paragraph, area);
}

/// The raw-row table: one column per schema field, missing cells shown as
/// `-`, cells needing escaping and wrong-arity rows highlighted.
fn render_preview_table(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let Some(raw_rows) = app.session.rows() else {
        let paragraph = Paragraph::new("No rows: input is empty").style(theme.row_invalid());
        frame.render_widget(paragraph, area);
        return;
    };

    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h))).style(theme.table_header());

    let table_rows: Vec<Row> = raw_rows
        .iter()
        .skip(app.scroll)
        .map(|raw| {
            let cells = (0..FIELD_COUNT).map(|i| {
                let value = raw.get(i).map(String::as_str).unwrap_or("");
                if value.is_empty() {
                    Cell::from("-")
                } else if needs_escaping(value) {
                    Cell::from(value).style(theme.cell_needs_escape())
                } else {
                    Cell::from(value)
                }
            });
            let row = Row::new(cells);
            if rows::is_valid_row(raw, FIELD_COUNT) {
                row
            } else {
                row.style(theme.row_invalid())
            }
        })
        .collect();

    let widths = vec![Constraint::Length(COLUMN_WIDTH); FIELD_COUNT];
    let table = Table::new(table_rows, widths).header(header);
    frame.render_widget(table, area);
}

/// One card per record: question, the four options, the correct answer
/// with rationale, then the metadata line.
fn render_record_cards(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let mut lines: Vec<Line> = Vec::new();
    for (i, record) in app.session.records().iter().enumerate() {
        lines.extend(card_lines(i, record, theme));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

fn card_lines<'a>(index: usize, record: &'a McqRecord, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::new();

    let mut title = format!("Question {}", index + 1);
    if !record.difficulty.is_empty() {
        title.push_str(&format!("  [{}]", record.difficulty));
    }
    if !record.points.is_empty() {
        title.push_str(&format!("  [{} marks]", record.points));
    }
    lines.push(Line::styled(title, theme.card_title()));

    lines.push(marker_line("", &record.question, theme.cell_normal(), theme));
    lines.push(marker_line("  A) ", &record.option_a, theme.cell_normal(), theme));
    lines.push(marker_line("  B) ", &record.option_b, theme.cell_normal(), theme));
    lines.push(marker_line("  C) ", &record.option_c, theme.cell_normal(), theme));
    lines.push(marker_line("  D) ", &record.option_d, theme.cell_normal(), theme));
    lines.push(marker_line(
        "  Correct: ",
        &record.correct_answer,
        theme.correct_answer(),
        theme,
    ));
    if !record.rationale.is_empty() {
        lines.push(marker_line("  ", &record.rationale, theme.cell_normal(), theme));
    }

    let mut meta = Vec::new();
    if !record.slug.is_empty() {
        meta.push(format!("Slug: {}", record.slug));
    }
    if !record.tags.is_empty() {
        meta.push(format!("Tags: {}", record.tags));
    }
    if !meta.is_empty() {
        lines.push(Line::styled(format!("  {}", meta.join("  ")), theme.cell_normal()));
    }

    lines.push(Line::raw(""));
    lines
}

/// Build one line where marker-wrapped pieces get the inline-code style.
///
/// Splitting on the marker character alternates outside/inside pieces;
/// an unbalanced trailing marker simply leaves the last piece unstyled
/// content, so malformed input still renders.
fn marker_line<'a>(prefix: &'static str, text: &'a str, base: Style, theme: &Theme) -> Line<'a> {
    let mut spans = Vec::new();
    if !prefix.is_empty() {
        spans.push(Span::styled(prefix, base));
    }
    for (i, piece) in text.split(MARKER).enumerate() {
        if piece.is_empty() {
            continue;
        }
        let style = if i % 2 == 1 { theme.inline_code() } else { base };
        spans.push(Span::styled(piece, style));
    }
    Line::from(spans)
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let row_count = app.session.rows().map(|r| r.len()).unwrap_or(0);
    let mut summary = format!(
        "{} rows | {} invalid | {} records",
        row_count,
        app.session.invalid_row_count(),
        app.session.records().len()
    );
    if !app.status.is_empty() {
        summary.push_str("  ");
        summary.push_str(&app.status);
    }

    let lines = vec![
        Line::raw(summary),
        Line::raw("p preview  c convert  y copy  Tab view  Up/Down scroll  q quit"),
    ];
    let paragraph = Paragraph::new(Text::from(lines)).style(theme.status_bar());
    frame.render_widget(paragraph, area);
}
