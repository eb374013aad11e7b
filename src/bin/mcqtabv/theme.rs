//! Theme configuration for the mcqtabv UI
//!
//! Two-layer theming: `PresentationStyles` holds the concrete Style
//! values by semantic role, and `Theme` exposes methods named after UI
//! element locations. UI code uses the location-named methods, so related
//! elements stay visually consistent and color tweaks happen in one
//! place.

use ratatui::style::{Color, Modifier, Style};

/// Presentation layer: the concrete Style values, grouped by semantic
/// role.
#[derive(Debug, Clone)]
pub struct PresentationStyles {
    /// Normal table/card content
    pub normal: Style,

    /// Cells that contain bracket characters the conversion will wrap
    pub attention: Style,

    /// Rows whose cell count doesn't match the schema
    pub invalid: Style,

    /// Table header row and card titles
    pub heading: Style,

    /// Marker-wrapped spans rendered as inline code
    pub code: Style,

    /// The correct-answer line in record cards
    pub confirm: Style,

    /// Title/header bar
    pub title: Style,

    /// Status and help line
    pub status: Style,
}

/// Application layer: methods named after UI element locations.
#[derive(Debug, Clone)]
pub struct Theme {
    presentation: PresentationStyles,
}

impl Theme {
    /// Styling for normal preview cells and card text
    pub fn cell_normal(&self) -> Style {
        self.presentation.normal
    }

    /// Styling for preview cells that need escaping
    /// Semantic: attention
    pub fn cell_needs_escape(&self) -> Style {
        self.presentation.attention
    }

    /// Styling for structurally invalid preview rows
    /// Semantic: invalid
    pub fn row_invalid(&self) -> Style {
        self.presentation.invalid
    }

    /// Styling for the preview table header
    pub fn table_header(&self) -> Style {
        self.presentation.heading
    }

    /// Styling for record card titles
    /// Semantic: heading (same as table_header)
    pub fn card_title(&self) -> Style {
        self.presentation.heading
    }

    /// Styling for marker-wrapped spans rendered as inline code
    pub fn inline_code(&self) -> Style {
        self.presentation.code
    }

    /// Styling for the correct-answer line in record cards
    pub fn correct_answer(&self) -> Style {
        self.presentation.confirm
    }

    /// Styling for the title bar
    pub fn title_bar(&self) -> Style {
        self.presentation.title
    }

    /// Styling for the status/help line
    pub fn status_bar(&self) -> Style {
        self.presentation.status
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            presentation: PresentationStyles {
                normal: Style::default(),

                // Cells the conversion will rewrite
                attention: Style::default().fg(Color::Black).bg(Color::Yellow),

                invalid: Style::default().fg(Color::Red),

                heading: Style::default().add_modifier(Modifier::BOLD),

                code: Style::default().fg(Color::Cyan),

                confirm: Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),

                title: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),

                status: Style::default().bg(Color::Black).fg(Color::White),
            },
        }
    }
}
