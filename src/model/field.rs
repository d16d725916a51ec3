use std::fmt;

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Every field of an application, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    Phone,
    Position,
    Experience,
    Portfolio,
    ManagementExperience,
    Skills,
    InterviewTime,
}

static ALL_FIELDS: &[Field] = &[
    Field::FullName,
    Field::Email,
    Field::Phone,
    Field::Position,
    Field::Experience,
    Field::Portfolio,
    Field::ManagementExperience,
    Field::Skills,
    Field::InterviewTime,
];

impl Field {
    /// Returns all fields in form order.
    pub fn all() -> &'static [Field] {
        ALL_FIELDS
    }

    /// Returns the camelCase key used in JSON documents and error maps.
    pub fn key(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Position => "position",
            Field::Experience => "experience",
            Field::Portfolio => "portfolio",
            Field::ManagementExperience => "managementExperience",
            Field::Skills => "skills",
            Field::InterviewTime => "interviewTime",
        }
    }

    /// Returns the human-readable label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email",
            Field::Phone => "Phone Number",
            Field::Position => "Applying for Position",
            Field::Experience => "Relevant Experience",
            Field::Portfolio => "Portfolio URL",
            Field::ManagementExperience => "Management Experience",
            Field::Skills => "Additional Skills",
            Field::InterviewTime => "Preferred Interview Time",
        }
    }

    /// Returns `true` for fields that only exist for some positions.
    pub fn is_conditional(&self) -> bool {
        matches!(
            self,
            Field::Experience | Field::Portfolio | Field::ManagementExperience
        )
    }

    /// Returns `true` for fields edited as free text.
    pub fn is_text(&self) -> bool {
        !matches!(self, Field::Position | Field::Skills)
    }

    /// Returns `true` if this field is shown and validated for `position`.
    pub fn is_active(&self, position: Position) -> bool {
        !self.is_conditional() || position.activates(*self)
    }

    /// Returns the free-text fields shown for `position`, in form order.
    pub fn text_layout(position: Position) -> Vec<Field> {
        Self::all()
            .iter()
            .copied()
            .filter(|f| f.is_text() && f.is_active(position))
            .collect()
    }
}

#[mutants::skip]
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
