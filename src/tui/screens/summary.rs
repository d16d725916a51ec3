//! Summary screen: the submitted snapshot as labeled lines or JSON.

use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::SubmittedApplication;
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

/// How the snapshot is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryView {
    /// One labeled line per field.
    #[default]
    Fields,
    /// The serialized JSON document.
    Json,
}

/// Outcome of the last export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    /// Nothing exported since the snapshot was shown.
    Idle,
    /// Export written to the given path.
    Exported(PathBuf),
    /// Export failed with the given error message.
    Failed(String),
}

/// State for the summary screen.
#[derive(Debug, Clone)]
pub struct SummaryState {
    view: SummaryView,
    scroll: u16,
    export: ExportStatus,
}

impl Default for SummaryState {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryState {
    /// Creates a summary state showing the field view.
    pub fn new() -> Self {
        Self {
            view: SummaryView::Fields,
            scroll: 0,
            export: ExportStatus::Idle,
        }
    }

    /// Resets view, scroll and export status for a freshly submitted snapshot.
    pub fn prepare(&mut self) {
        *self = Self::new();
    }

    /// Returns the active view.
    pub fn view(&self) -> SummaryView {
        self.view
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Returns the outcome of the last export.
    pub fn export_status(&self) -> &ExportStatus {
        &self.export
    }

    /// Records a successful export.
    pub fn set_exported(&mut self, path: &Path) {
        self.export = ExportStatus::Exported(path.to_path_buf());
    }

    /// Records a failed export.
    pub fn set_export_error(&mut self, msg: String) {
        self.export = ExportStatus::Failed(msg);
    }
}

impl ScreenState for SummaryState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') => {
                self.view = match self.view {
                    SummaryView::Fields => SummaryView::Json,
                    SummaryView::Json => SummaryView::Fields,
                };
                self.scroll = 0;
                Action::None
            }
            KeyCode::Char('x') => Action::ExportSnapshot,
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(Screen::Application),
            _ => Action::None,
        }
    }
}

fn field_lines(snapshot: &SubmittedApplication) -> Vec<Line<'static>> {
    let label_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    snapshot
        .summary_lines()
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label}: "), label_style),
                Span::styled(value, Style::default().fg(Color::White)),
            ])
        })
        .collect()
}

fn json_lines(snapshot: &SubmittedApplication) -> Vec<Line<'static>> {
    match snapshot.to_json_pretty() {
        Ok(json) => json.lines().map(|l| Line::from(l.to_string())).collect(),
        Err(e) => vec![Line::from(Span::styled(
            format!("could not serialize application: {e}"),
            Style::default().fg(Color::Red),
        ))],
    }
}

/// Renders the summary screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_summary(
    state: &SummaryState,
    snapshot: Option<&SubmittedApplication>,
    frame: &mut Frame,
    area: Rect,
) {
    let block = Block::default()
        .title(" Application Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, status_area, footer_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .areas(inner);

    let lines = match (snapshot, state.view()) {
        (None, _) => vec![Line::from("No application submitted yet.")],
        (Some(s), SummaryView::Fields) => field_lines(s),
        (Some(s), SummaryView::Json) => json_lines(s),
    };
    let total = lines.len() as u16;
    let capped_scroll = state.scroll().min(total.saturating_sub(content_area.height));
    frame.render_widget(
        Paragraph::new(lines).scroll((capped_scroll, 0)),
        content_area,
    );

    let status = match state.export_status() {
        ExportStatus::Idle => Line::from(""),
        ExportStatus::Exported(path) => Line::from(Span::styled(
            format!("Exported to {}", path.display()),
            Style::default().fg(Color::Green),
        )),
        ExportStatus::Failed(msg) => Line::from(Span::styled(
            format!("Export failed: {msg}"),
            Style::default().fg(Color::Red),
        )),
    };
    frame.render_widget(Paragraph::new(vec![Line::from(""), status]), status_area);

    let footer = Paragraph::new(Line::from(
        "j: toggle JSON  x: export  \u{2191}/\u{2193}: scroll  q/Esc: back to form",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
