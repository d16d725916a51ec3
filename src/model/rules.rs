//! The declarative rule set and its single evaluation function.

use super::draft::{ApplicationDraft, FieldValue};
use super::errors::ValidationErrors;
use super::field::Field;
use super::position::Position;
use super::validation::{
    ValidationError, validate_email, validate_experience, validate_interview_time, validate_phone,
    validate_portfolio_url,
};

/// A format check run on a non-empty text value.
pub type Check = fn(&str) -> Result<(), ValidationError>;

/// When a rule is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Enforced for every position.
    Always,
    /// Enforced only when the selected position activates the field.
    ByPosition,
}

/// Validation rule for one field.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub field: Field,
    pub required: bool,
    pub check: Option<Check>,
    pub activation: Activation,
}

impl Rule {
    /// Returns `true` if this rule applies to a draft with `position`.
    pub fn is_active(&self, position: Position) -> bool {
        match self.activation {
            Activation::Always => true,
            Activation::ByPosition => position.activates(self.field),
        }
    }

    /// Evaluates this rule against a field value.
    ///
    /// Empty optional values pass without running the format check.
    pub fn evaluate(&self, value: FieldValue<'_>) -> Result<(), ValidationError> {
        if value.is_empty() {
            return if self.required {
                Err(missing(self.field))
            } else {
                Ok(())
            };
        }
        match (self.check, value) {
            (Some(check), FieldValue::Text(text)) => check(text),
            _ => Ok(()),
        }
    }
}

fn missing(field: Field) -> ValidationError {
    match field {
        Field::Skills => ValidationError::NoSkills,
        other => ValidationError::Required(other),
    }
}

/// Every rule, in form order.
pub static RULES: &[Rule] = &[
    Rule {
        field: Field::FullName,
        required: true,
        check: None,
        activation: Activation::Always,
    },
    Rule {
        field: Field::Email,
        required: true,
        check: Some(validate_email),
        activation: Activation::Always,
    },
    Rule {
        field: Field::Phone,
        required: true,
        check: Some(validate_phone),
        activation: Activation::Always,
    },
    Rule {
        field: Field::Experience,
        required: true,
        check: Some(validate_experience),
        activation: Activation::ByPosition,
    },
    Rule {
        field: Field::Portfolio,
        required: true,
        check: Some(validate_portfolio_url),
        activation: Activation::ByPosition,
    },
    Rule {
        field: Field::ManagementExperience,
        required: true,
        check: None,
        activation: Activation::ByPosition,
    },
    Rule {
        field: Field::Skills,
        required: true,
        check: None,
        activation: Activation::Always,
    },
    Rule {
        field: Field::InterviewTime,
        required: true,
        check: Some(validate_interview_time),
        activation: Activation::Always,
    },
];

/// Returns the rule for `field`, if the field has one.
pub fn rule_for(field: Field) -> Option<&'static Rule> {
    RULES.iter().find(|r| r.field == field)
}

/// Validates every active field of `draft`.
///
/// All rules run; the result holds one entry per failing field.
pub fn validate(draft: &ApplicationDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for rule in RULES.iter().filter(|r| r.is_active(draft.position)) {
        if let Err(e) = rule.evaluate(draft.value(rule.field)) {
            errors.insert(rule.field, e);
        }
    }
    errors
}
