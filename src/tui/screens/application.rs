//! Application form screen for editing and submitting the draft.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tracing::{debug, info};

use crate::model::{
    ApplicationDraft, Field, Position, Skill, ValidationErrors, submit,
};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{Form, FormField, ROW_HEIGHT, draw_form};

/// State for the application form screen.
///
/// The draft is the source of truth; the [`Form`] mirrors its text fields
/// for the layout active under the current position.
#[derive(Debug, Clone)]
pub struct ApplicationFormState {
    draft: ApplicationDraft,
    form: Form,
    errors: ValidationErrors,
}

impl Default for ApplicationFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationFormState {
    /// Creates a form over an empty draft.
    pub fn new() -> Self {
        let draft = ApplicationDraft::new();
        let form = build_form(&draft);
        Self {
            draft,
            form,
            errors: ValidationErrors::new(),
        }
    }

    /// Returns the draft being edited.
    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the errors from the last submit attempt.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Returns the skills error message from the last submit attempt.
    pub fn skills_error(&self) -> Option<String> {
        self.errors.get(Field::Skills).map(ToString::to_string)
    }

    /// Selects `position`, clearing the conditional fields and rebuilding the
    /// form layout. Focus stays on the same field when it is still shown.
    pub fn set_position(&mut self, position: Position) {
        let focused = self.form.focused_field();
        self.draft.set_position(position);
        self.errors.retain(|field| !field.is_conditional());

        self.form = build_form(&self.draft);
        self.form.apply_errors(&self.errors);
        if let Some(index) = focused.and_then(|f| self.form.index_of(f)) {
            self.form.set_focus(index);
        }
        debug!(position = position.as_str(), "position changed");
    }

    /// Adds or removes a skill from the draft.
    pub fn toggle_skill(&mut self, skill: Skill) {
        self.draft.toggle_skill(skill);
    }

    /// Cycles the position forward or backward, wrapping around.
    fn cycle_position(&mut self, forward: bool) {
        let next = cycle(Position::all(), self.draft.position, forward);
        self.set_position(next);
    }

    /// Copies the focused input's text into the draft.
    fn sync_focused(&mut self) {
        if let Some(field) = self.form.focused_field() {
            let value = self.form.value(self.form.focus()).to_string();
            self.draft.set_text(field, value);
        }
    }

    /// Validates the draft; on success returns the snapshot for the app.
    fn submit(&mut self) -> Action {
        match submit(&self.draft) {
            Ok(snapshot) => {
                self.errors = ValidationErrors::new();
                self.form.clear_errors();
                info!(position = self.draft.position.as_str(), "application accepted");
                Action::Submitted(snapshot)
            }
            Err(errors) => {
                info!(errors = errors.len(), "application rejected");
                self.form.apply_errors(&errors);
                self.errors = errors;
                Action::None
            }
        }
    }
}

impl ScreenState for ApplicationFormState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        // Alt+p cycles position; Alt+1..4 toggle skills in catalog order
        if key.modifiers == KeyModifiers::ALT {
            match key.code {
                KeyCode::Char('p') => {
                    self.cycle_position(true);
                    return Action::None;
                }
                KeyCode::Char(digit @ '1'..='9') => {
                    let index = digit as usize - '1' as usize;
                    if let Some(skill) = Skill::all().get(index) {
                        self.toggle_skill(*skill);
                    }
                    return Action::None;
                }
                _ => {}
            }
        }
        const ALT_SHIFT: KeyModifiers = KeyModifiers::ALT.union(KeyModifiers::SHIFT);
        if key.modifiers == ALT_SHIFT && key.code == KeyCode::Char('P') {
            self.cycle_position(false);
            return Action::None;
        }

        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Backspace => {
                self.form.delete_char();
                self.sync_focused();
                Action::None
            }
            KeyCode::Char(ch) => {
                self.form.insert_char(ch);
                self.sync_focused();
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Builds the inputs for the draft's current position, pre-filled from the draft.
fn build_form(draft: &ApplicationDraft) -> Form {
    Form::new(
        Field::text_layout(draft.position)
            .into_iter()
            .map(|field| FormField::with_value(field, draft.text(field)))
            .collect(),
    )
}

/// Cycles through a slice to find the next or previous element.
fn cycle<T: PartialEq + Copy>(items: &[T], current: T, forward: bool) -> T {
    let pos = items.iter().position(|&x| x == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % items.len()
    } else {
        (pos + items.len() - 1) % items.len()
    };
    items[next]
}

/// Renders the application form screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_application(state: &ApplicationFormState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Job Application Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form_height = ROW_HEIGHT * state.form().fields().len() as u16;
    let [position_area, form_area, skills_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(form_height),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let position = state.draft().position;
    let position_line = Line::from(vec![
        Span::styled(
            format!("{}: ", Field::Position.label()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("< {position} >"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(position_line), position_area);

    draw_form(state.form(), frame, form_area);

    let mut checklist = vec![Span::styled(
        format!("{} *  ", Field::Skills.label()),
        Style::default().fg(Color::White),
    )];
    for (i, skill) in Skill::all().iter().enumerate() {
        let mark = if state.draft().skills.contains(skill) {
            "x"
        } else {
            " "
        };
        checklist.push(Span::styled(
            format!("{}:[{mark}] {skill}  ", i + 1),
            Style::default().fg(Color::Yellow),
        ));
    }
    let mut skill_lines = vec![Line::from(checklist)];
    if let Some(err) = state.skills_error() {
        skill_lines.push(Line::from(Span::styled(
            err,
            Style::default().fg(Color::Red),
        )));
    }
    frame.render_widget(Paragraph::new(skill_lines), skills_area);

    let footer = Paragraph::new(Line::from(
        "Tab: next  Alt+p: position  Alt+1-4: skills  Enter: submit  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;
    use crate::model::ValidationError;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn alt_press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::ALT,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn shift_alt_press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::ALT | KeyModifiers::SHIFT,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_string(state: &mut ApplicationFormState, s: &str) {
        for ch in s.chars() {
            state.handle_key(press(KeyCode::Char(ch)));
        }
    }

    fn focus_field(state: &mut ApplicationFormState, field: Field) {
        let index = state.form().index_of(field).unwrap();
        while state.form().focus() != index {
            state.handle_key(press(KeyCode::Tab));
        }
    }

    fn fill_common(state: &mut ApplicationFormState) {
        focus_field(state, Field::FullName);
        type_string(state, "Ada Lovelace");
        focus_field(state, Field::Email);
        type_string(state, "ada@example.com");
        focus_field(state, Field::Phone);
        type_string(state, "5551234");
        focus_field(state, Field::InterviewTime);
        type_string(state, "2026-10-20 14:30");
        state.handle_key(alt_press(KeyCode::Char('3')));
    }

    mod construction {
        use super::*;

        #[test]
        fn starts_with_unset_layout() {
            let state = ApplicationFormState::new();
            assert_eq!(state.draft().position, Position::Unset);
            let fields: Vec<Field> = state.form().fields().iter().map(|f| f.field).collect();
            assert_eq!(fields, Field::text_layout(Position::Unset));
            assert!(state.errors().is_empty());
        }

        #[test]
        fn default_trait() {
            let state = ApplicationFormState::default();
            assert_eq!(state.form().focused_field(), Some(Field::FullName));
        }
    }

    mod typing {
        use super::*;

        #[test]
        fn chars_go_to_draft() {
            let mut state = ApplicationFormState::new();
            type_string(&mut state, "Ada");
            assert_eq!(state.draft().full_name, "Ada");
            assert_eq!(state.form().value_of(Field::FullName), "Ada");
        }

        #[test]
        fn backspace_updates_draft() {
            let mut state = ApplicationFormState::new();
            type_string(&mut state, "Adam");
            state.handle_key(press(KeyCode::Backspace));
            assert_eq!(state.draft().full_name, "Ada");
        }

        #[test]
        fn tab_moves_between_fields() {
            let mut state = ApplicationFormState::new();
            state.handle_key(press(KeyCode::Tab));
            type_string(&mut state, "a@b.com");
            assert_eq!(state.draft().email, "a@b.com");
            assert_eq!(state.draft().full_name, "");
        }

        #[test]
        fn backtab_wraps_to_interview_time() {
            let mut state = ApplicationFormState::new();
            state.handle_key(press(KeyCode::BackTab));
            assert_eq!(state.form().focused_field(), Some(Field::InterviewTime));
        }

        #[test]
        fn plain_p_is_typed_not_a_shortcut() {
            let mut state = ApplicationFormState::new();
            type_string(&mut state, "pp");
            assert_eq!(state.draft().full_name, "pp");
            assert_eq!(state.draft().position, Position::Unset);
        }
    }

    mod position {
        use super::*;

        #[test]
        fn alt_p_cycles_forward_and_wraps() {
            let mut state = ApplicationFormState::new();
            let mut seen = vec![];
            for _ in 0..4 {
                state.handle_key(alt_press(KeyCode::Char('p')));
                seen.push(state.draft().position);
            }
            assert_eq!(
                seen,
                vec![
                    Position::Developer,
                    Position::Designer,
                    Position::Manager,
                    Position::Unset
                ]
            );
        }

        #[test]
        fn shift_alt_p_cycles_backward() {
            let mut state = ApplicationFormState::new();
            state.handle_key(shift_alt_press(KeyCode::Char('P')));
            assert_eq!(state.draft().position, Position::Manager);
        }

        #[test]
        fn layout_follows_position() {
            let mut state = ApplicationFormState::new();
            state.set_position(Position::Designer);
            assert!(state.form().index_of(Field::Experience).is_some());
            assert!(state.form().index_of(Field::Portfolio).is_some());
            assert!(state.form().index_of(Field::ManagementExperience).is_none());

            state.set_position(Position::Manager);
            assert!(state.form().index_of(Field::Experience).is_none());
            assert!(state.form().index_of(Field::ManagementExperience).is_some());
        }

        #[test]
        fn change_clears_conditional_values_and_keeps_common() {
            let mut state = ApplicationFormState::new();
            type_string(&mut state, "Ada");
            state.set_position(Position::Developer);
            focus_field(&mut state, Field::Experience);
            type_string(&mut state, "7");
            assert_eq!(state.draft().experience, "7");

            state.set_position(Position::Designer);

            assert_eq!(state.draft().experience, "");
            assert_eq!(state.form().value_of(Field::Experience), "");
            assert_eq!(state.form().value_of(Field::FullName), "Ada");
        }

        #[test]
        fn focus_follows_field_across_layouts() {
            let mut state = ApplicationFormState::new();
            focus_field(&mut state, Field::InterviewTime);
            state.set_position(Position::Designer);
            assert_eq!(state.form().focused_field(), Some(Field::InterviewTime));
        }

        #[test]
        fn change_drops_conditional_errors_only() {
            let mut state = ApplicationFormState::new();
            state.set_position(Position::Developer);
            state.handle_key(press(KeyCode::Enter));
            assert!(state.errors().contains(Field::Experience));
            assert!(state.errors().contains(Field::FullName));

            state.set_position(Position::Manager);

            assert!(!state.errors().contains(Field::Experience));
            assert!(state.errors().contains(Field::FullName));
            let name = state.form().index_of(Field::FullName).unwrap();
            assert!(state.form().fields()[name].error.is_some());
        }
    }

    mod skills {
        use super::*;

        #[test]
        fn alt_digits_toggle_catalog_entries() {
            let mut state = ApplicationFormState::new();
            state.handle_key(alt_press(KeyCode::Char('1')));
            state.handle_key(alt_press(KeyCode::Char('4')));
            assert!(state.draft().skills.contains(&Skill::JavaScript));
            assert!(state.draft().skills.contains(&Skill::Java));

            state.handle_key(alt_press(KeyCode::Char('1')));
            assert!(!state.draft().skills.contains(&Skill::JavaScript));
        }

        #[test]
        fn alt_digit_past_catalog_is_ignored() {
            let mut state = ApplicationFormState::new();
            state.handle_key(alt_press(KeyCode::Char('9')));
            assert!(state.draft().skills.is_empty());
            assert_eq!(state.draft().full_name, "");
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn empty_submit_shows_all_errors() {
            let mut state = ApplicationFormState::new();
            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(action, Action::None);
            assert_eq!(state.errors().len(), 5);
            for input in state.form().fields() {
                assert!(input.error.is_some(), "{:?} should show an error", input.field);
            }
            assert_eq!(
                state.skills_error().as_deref(),
                Some("At least one skill must be selected.")
            );
        }

        #[test]
        fn valid_unset_draft_submits() {
            let mut state = ApplicationFormState::new();
            fill_common(&mut state);
            match state.handle_key(press(KeyCode::Enter)) {
                Action::Submitted(snapshot) => {
                    assert_eq!(snapshot.full_name(), "Ada Lovelace");
                    assert_eq!(snapshot.skills(), &[Skill::Python]);
                }
                other => panic!("expected Submitted, got {other:?}"),
            }
            assert!(state.errors().is_empty());
        }

        #[test]
        fn designer_needs_portfolio() {
            let mut state = ApplicationFormState::new();
            state.set_position(Position::Designer);
            fill_common(&mut state);
            focus_field(&mut state, Field::Experience);
            type_string(&mut state, "3");

            let action = state.handle_key(press(KeyCode::Enter));

            assert_eq!(action, Action::None);
            assert_eq!(state.errors().fields(), vec![Field::Portfolio]);
            assert_eq!(
                state.errors().get(Field::Portfolio),
                Some(&ValidationError::Required(Field::Portfolio))
            );
        }

        #[test]
        fn errors_cleared_on_successful_resubmit() {
            let mut state = ApplicationFormState::new();
            state.handle_key(press(KeyCode::Enter));
            assert!(state.form().has_errors());
            fill_common(&mut state);
            let action = state.handle_key(press(KeyCode::Enter));
            assert!(matches!(action, Action::Submitted(_)));
            assert!(!state.form().has_errors());
        }

        #[test]
        fn draft_survives_submit() {
            let mut state = ApplicationFormState::new();
            fill_common(&mut state);
            state.handle_key(press(KeyCode::Enter));
            assert_eq!(state.draft().full_name, "Ada Lovelace");
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn esc_quits() {
            let mut state = ApplicationFormState::new();
            assert_eq!(state.handle_key(press(KeyCode::Esc)), Action::Quit);
        }

        #[test]
        fn unhandled_key_returns_none() {
            let mut state = ApplicationFormState::new();
            assert_eq!(state.handle_key(press(KeyCode::F(5))), Action::None);
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render(state: &ApplicationFormState) -> String {
            let backend = TestBackend::new(100, 30);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_application(state, frame, frame.area()))
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn renders_title_fields_and_skills() {
            let output = render(&ApplicationFormState::new());
            assert!(output.contains("Job Application Form"));
            assert!(output.contains("Full Name"));
            assert!(output.contains("Preferred Interview Time"));
            assert!(output.contains("JavaScript"));
            assert!(!output.contains("Portfolio URL"), "hidden while unset");
        }

        #[test]
        fn renders_conditional_fields_for_designer() {
            let mut state = ApplicationFormState::new();
            state.set_position(Position::Designer);
            let output = render(&state);
            assert!(output.contains("< Designer >"));
            assert!(output.contains("Relevant Experience"));
            assert!(output.contains("Portfolio URL"));
        }

        #[test]
        fn renders_checked_skill() {
            let mut state = ApplicationFormState::new();
            state.toggle_skill(Skill::Css);
            let output = render(&state);
            assert!(output.contains("[x] CSS"));
            assert!(output.contains("[ ] Python"));
        }

        #[test]
        fn renders_skills_error() {
            let mut state = ApplicationFormState::new();
            state.handle_key(press(KeyCode::Enter));
            let output = render(&state);
            assert!(output.contains("At least one skill must be selected."));
        }
    }
}
