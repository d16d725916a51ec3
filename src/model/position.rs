use std::fmt;

use serde::{Deserialize, Serialize};

use super::field::Field;

/// The position an applicant is applying for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Position {
    /// No position selected yet.
    #[default]
    #[serde(rename = "")]
    Unset,
    Developer,
    Designer,
    Manager,
}

static ALL_POSITIONS: &[Position] = &[
    Position::Unset,
    Position::Developer,
    Position::Designer,
    Position::Manager,
];

/// Conditional fields activated by each position.
///
/// This is the single source for both the form layout and the validator.
static DEVELOPER_FIELDS: &[Field] = &[Field::Experience];
static DESIGNER_FIELDS: &[Field] = &[Field::Experience, Field::Portfolio];
static MANAGER_FIELDS: &[Field] = &[Field::ManagementExperience];

impl Position {
    /// Returns all positions in selection order, starting with [`Position::Unset`].
    pub fn all() -> &'static [Position] {
        ALL_POSITIONS
    }

    /// Returns the conditional fields this position activates.
    pub fn active_fields(&self) -> &'static [Field] {
        match self {
            Position::Unset => &[],
            Position::Developer => DEVELOPER_FIELDS,
            Position::Designer => DESIGNER_FIELDS,
            Position::Manager => MANAGER_FIELDS,
        }
    }

    /// Returns `true` if `field` is one of this position's conditional fields.
    pub fn activates(&self, field: Field) -> bool {
        self.active_fields().contains(&field)
    }

    /// Returns the wire name of this position (`""` when unset).
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Unset => "",
            Position::Developer => "Developer",
            Position::Designer => "Designer",
            Position::Manager => "Manager",
        }
    }
}

#[mutants::skip]
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Unset => write!(f, "(not selected)"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}
