use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::draft::ApplicationDraft;
use super::errors::ValidationErrors;
use super::field::Field;
use super::position::Position;
use super::rules::validate;
use super::skill::Skill;
use super::validation::parse_interview_time;

/// An immutable copy of a draft, taken when it passed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedApplication {
    full_name: String,
    email: String,
    phone: String,
    position: Position,
    experience: String,
    portfolio: String,
    management_experience: String,
    skills: Vec<Skill>,
    interview_time: NaiveDateTime,
    submitted_at: DateTime<Utc>,
}

impl SubmittedApplication {
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn experience(&self) -> &str {
        &self.experience
    }

    pub fn portfolio(&self) -> &str {
        &self.portfolio
    }

    pub fn management_experience(&self) -> &str {
        &self.management_experience
    }

    /// Selected skills in catalog order.
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn interview_time(&self) -> NaiveDateTime {
        self.interview_time
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    /// Returns `(label, value)` pairs for all nine fields, in form order.
    pub fn summary_lines(&self) -> Vec<(&'static str, String)> {
        let skills: Vec<&str> = self.skills.iter().map(Skill::as_str).collect();
        vec![
            (Field::FullName.label(), self.full_name.clone()),
            (Field::Email.label(), self.email.clone()),
            (Field::Phone.label(), self.phone.clone()),
            ("Position", self.position.as_str().to_string()),
            (Field::Experience.label(), self.experience.clone()),
            (Field::Portfolio.label(), self.portfolio.clone()),
            (
                Field::ManagementExperience.label(),
                self.management_experience.clone(),
            ),
            (Field::Skills.label(), skills.join(", ")),
            (
                Field::InterviewTime.label(),
                self.interview_time.format("%Y-%m-%d %H:%M").to_string(),
            ),
        ]
    }

    /// Serializes the snapshot as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Validates `draft` and, if every rule passes, snapshots it.
///
/// The draft itself is left untouched either way.
pub fn submit(draft: &ApplicationDraft) -> Result<SubmittedApplication, ValidationErrors> {
    submit_at(draft, Utc::now())
}

/// Like [`submit`], with an explicit submission timestamp.
pub fn submit_at(
    draft: &ApplicationDraft,
    submitted_at: DateTime<Utc>,
) -> Result<SubmittedApplication, ValidationErrors> {
    let errors = validate(draft);
    if !errors.is_empty() {
        return Err(errors);
    }

    // Already checked by the interview time rule above.
    let interview_time = parse_interview_time(&draft.interview_time).map_err(|e| {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::InterviewTime, e);
        errors
    })?;

    // Inactive conditional fields never reach the snapshot.
    let active_text = |field: Field| {
        if field.is_active(draft.position) {
            draft.text(field).to_string()
        } else {
            String::new()
        }
    };

    Ok(SubmittedApplication {
        full_name: draft.full_name.clone(),
        email: draft.email.clone(),
        phone: draft.phone.clone(),
        position: draft.position,
        experience: active_text(Field::Experience),
        portfolio: active_text(Field::Portfolio),
        management_experience: active_text(Field::ManagementExperience),
        skills: draft.skills.iter().copied().collect(),
        interview_time,
        submitted_at,
    })
}
