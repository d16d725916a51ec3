use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::field::Field;
use super::position::Position;
use super::skill::Skill;

/// The in-progress, mutable application being filled in.
///
/// Created empty, edited field by field, and never cleared by a submit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub position: Position,
    pub experience: String,
    pub portfolio: String,
    pub management_experience: String,
    pub skills: BTreeSet<Skill>,
    pub interview_time: String,
}

/// A borrowed view of one field's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Position(Position),
    Skills(&'a BTreeSet<Skill>),
}

impl FieldValue<'_> {
    /// Returns `true` if the value counts as not filled in.
    ///
    /// Whitespace-only text is empty; an unset position is empty.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Position(p) => *p == Position::Unset,
            FieldValue::Skills(set) => set.is_empty(),
        }
    }
}

impl ApplicationDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a position, clearing every conditional field.
    ///
    /// The conditional fields are reset together even when the position does
    /// not change, matching the select control's change event.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
        self.experience.clear();
        self.portfolio.clear();
        self.management_experience.clear();
    }

    /// Adds `skill` if absent, removes it if present.
    pub fn toggle_skill(&mut self, skill: Skill) {
        if !self.skills.remove(&skill) {
            self.skills.insert(skill);
        }
    }

    /// Returns the current value of `field`.
    pub fn value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Position => FieldValue::Position(self.position),
            Field::Skills => FieldValue::Skills(&self.skills),
            text => FieldValue::Text(self.text(text)),
        }
    }

    /// Returns the text of a free-text field, or `""` for non-text fields.
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Experience => &self.experience,
            Field::Portfolio => &self.portfolio,
            Field::ManagementExperience => &self.management_experience,
            Field::InterviewTime => &self.interview_time,
            Field::Position | Field::Skills => "",
        }
    }

    /// Replaces the text of a free-text field. Non-text fields are ignored.
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Experience => &mut self.experience,
            Field::Portfolio => &mut self.portfolio,
            Field::ManagementExperience => &mut self.management_experience,
            Field::InterviewTime => &mut self.interview_time,
            Field::Position | Field::Skills => return,
        };
        *slot = value.into();
    }
}
