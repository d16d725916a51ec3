use std::path::{Path, PathBuf};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tracing::{info, warn};

use crate::model::SubmittedApplication;
use crate::storage::{default_export_path, export_json};

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{
    ApplicationFormState, HelpState, SummaryState, draw_application, draw_help, draw_summary,
};
use super::widgets::{StatusBarContext, draw_status_bar};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Fill in and submit the application.
    Application,
    /// Review the submitted snapshot.
    Summary,
    /// Show keybinding help.
    Help,
}

impl Screen {
    /// Human-readable screen name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Application => "Application Form",
            Self::Summary => "Summary",
            Self::Help => "Help",
        }
    }
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    application: ApplicationFormState,
    summary: SummaryState,
    help: HelpState,
    snapshot: Option<SubmittedApplication>,
    export_dir: PathBuf,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` on the [`Screen::Application`] screen. Exports land
    /// in `export_dir`.
    pub fn new(export_dir: PathBuf) -> Self {
        Self {
            screen: Screen::Application,
            application: ApplicationFormState::new(),
            summary: SummaryState::new(),
            help: HelpState::new(),
            snapshot: None,
            export_dir,
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the current screen above a one-line status bar.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen {
            Screen::Application => draw_application(&self.application, frame, main_area),
            Screen::Summary => {
                draw_summary(&self.summary, self.snapshot.as_ref(), frame, main_area);
            }
            Screen::Help => draw_help(&self.help, frame, main_area),
        }

        draw_status_bar(&self.status_context(), frame, status_area);
    }

    /// Builds the status bar data from the current draft and snapshot.
    pub fn status_context(&self) -> StatusBarContext {
        let draft = self.application.draft();
        StatusBarContext {
            position: draft.position,
            skill_count: draft.skills.len(),
            error_count: self.application.errors().len(),
            submitted: self.snapshot.is_some(),
        }
    }

    /// Handles a key event: F1 opens help, everything else goes to the
    /// current screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::F(1) {
            if self.screen != Screen::Help {
                self.help.set_origin(self.screen);
                self.help.reset();
                self.screen = Screen::Help;
            }
            return;
        }

        let action = match self.screen {
            Screen::Application => self.application.handle_key(key),
            Screen::Summary => self.summary.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    /// Applies an action returned by a screen handler.
    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.screen = screen,
            Action::Submitted(snapshot) => {
                self.snapshot = Some(snapshot);
                self.summary.prepare();
                self.screen = Screen::Summary;
            }
            Action::ExportSnapshot => match self.export_snapshot() {
                Ok(path) => self.summary.set_exported(&path),
                Err(e) => self.summary.set_export_error(e.to_string()),
            },
            Action::Quit => self.should_quit = true,
        }
    }

    /// Writes the current snapshot into the export directory.
    pub fn export_snapshot(&self) -> Result<PathBuf, AppError> {
        let snapshot = self.snapshot.as_ref().ok_or(AppError::NoSnapshot)?;
        let path = default_export_path(snapshot, &self.export_dir);
        if let Err(e) = export_json(snapshot, &path) {
            warn!(path = %path.display(), error = %e, "export failed");
            return Err(e.into());
        }
        info!(path = %path.display(), "application exported");
        Ok(path)
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the application form state.
    pub fn application(&self) -> &ApplicationFormState {
        &self.application
    }

    /// Returns the summary screen state.
    pub fn summary(&self) -> &SummaryState {
        &self.summary
    }

    /// Returns the last successful submission, if any.
    pub fn snapshot(&self) -> Option<&SubmittedApplication> {
        self.snapshot.as_ref()
    }

    /// Returns the directory exports are written to.
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }
}
