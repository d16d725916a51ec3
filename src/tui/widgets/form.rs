//! Reusable form widget for the text inputs of an application.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Field, ValidationErrors, rule_for};

/// A single input within a [`Form`], bound to one application [`Field`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// The application field this input edits.
    pub field: Field,
    /// Display label shown in the input border.
    pub label: String,
    /// Placeholder shown while the value is empty.
    pub hint: &'static str,
    /// Current text value.
    pub value: String,
    /// Validation error message, if any.
    pub error: Option<String>,
    /// Whether the field must be filled in on submit.
    pub required: bool,
}

impl FormField {
    /// Creates an empty input for `field`, taking label and required flag
    /// from the field and its rule.
    pub fn new(field: Field) -> Self {
        Self {
            field,
            label: field.label().to_string(),
            hint: hint_for(field),
            value: String::new(),
            error: None,
            required: rule_for(field).is_some_and(|r| r.required),
        }
    }

    /// Creates an input for `field` pre-filled with `value`.
    pub fn with_value(field: Field, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::new(field)
        }
    }
}

fn hint_for(field: Field) -> &'static str {
    match field {
        Field::Email => "name@example.com",
        Field::Phone => "digits only",
        Field::Experience => "number of years",
        Field::Portfolio => "https://...",
        Field::InterviewTime => "YYYY-MM-DD HH:MM",
        _ => "",
    }
}

/// A multi-field text form with focus management.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    /// Creates a new form with the given fields. Focus starts on the first field.
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focus: 0 }
    }

    /// Returns the index of the currently focused input.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Returns the application field under focus, if the form is non-empty.
    pub fn focused_field(&self) -> Option<Field> {
        self.fields.get(self.focus).map(|f| f.field)
    }

    /// Moves focus to `index`; out-of-bounds indexes are ignored.
    pub fn set_focus(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focus = index;
        }
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Inserts a character at the end of the focused field.
    pub fn insert_char(&mut self, ch: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.push(ch);
        }
    }

    /// Deletes the last character from the focused field.
    pub fn delete_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.pop();
        }
    }

    /// Returns the position of `field` in this form, if it is shown.
    pub fn index_of(&self, field: Field) -> Option<usize> {
        self.fields.iter().position(|f| f.field == field)
    }

    /// Replaces every field's error with the entry from `errors`.
    ///
    /// Errors for fields not shown in this form are ignored.
    pub fn apply_errors(&mut self, errors: &ValidationErrors) {
        for input in &mut self.fields {
            input.error = errors.get(input.field).map(ToString::to_string);
        }
    }

    /// Clears all field errors.
    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.error = None;
        }
    }

    /// Returns `true` if any field has an error set.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    /// Returns the value of the field at `index`, or an empty string if out of bounds.
    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// Returns the value shown for `field`, or an empty string if it is not shown.
    pub fn value_of(&self, field: Field) -> &str {
        self.index_of(field).map_or("", |i| self.value(i))
    }

    /// Returns a reference to the fields.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }
}

/// Height in rows of one rendered input.
pub const ROW_HEIGHT: u16 = 3;

/// Renders a form within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|_| Constraint::Length(ROW_HEIGHT))
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in form.fields.iter().enumerate() {
        let is_focused = i == form.focus;

        let border_color = if field.error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let label = if field.required {
            format!("{} *", field.label)
        } else {
            field.label.clone()
        };

        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut spans = if field.value.is_empty() && !is_focused {
            vec![Span::styled(field.hint, Style::default().fg(Color::DarkGray))]
        } else {
            vec![Span::raw(&field.value)]
        };
        if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, rows[i]);

        // Error overlaps the bottom border of the input.
        if let Some(ref err) = field.error {
            let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
            let err_area = Rect {
                x: rows[i].x + 2,
                y: rows[i].y + ROW_HEIGHT.saturating_sub(1),
                width: rows[i].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(error_line, err_area);
        }
    }
}
