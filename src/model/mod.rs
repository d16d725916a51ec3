mod draft;
mod errors;
mod field;
mod position;
mod rules;
mod skill;
mod submission;
mod validation;

pub use draft::{ApplicationDraft, FieldValue};
pub use errors::ValidationErrors;
pub use field::Field;
pub use position::Position;
pub use rules::{Activation, Check, RULES, Rule, rule_for, validate};
pub use skill::Skill;
pub use submission::{SubmittedApplication, submit, submit_at};
pub use validation::{
    ValidationError, parse_interview_time, validate_email, validate_experience,
    validate_interview_time, validate_phone, validate_portfolio_url,
};
